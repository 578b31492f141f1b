use super::*;
use crate::*;
use algograph::graph::{QueryableGraph, VertexId};
use rand::{prelude::*, rngs::SmallRng};
use std::collections::HashMap;
use tracing::debug;

/// Estimates the stationary distribution by simulating one long random walk
/// and tallying how often each page is visited.
pub struct SampledPageRank<'a, G>
where
    G: QueryableGraph,
{
    model: TransitionModel<'a, G>,
    samples: usize,
    seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Run {
    pub page_rank: HashMap<VertexId, f64, ahash::RandomState>,
    pub visits: HashMap<VertexId, u64, ahash::RandomState>,
}

impl<'a, G: QueryableGraph> SampledPageRank<'a, G> {
    pub fn new(graph: &'a G, config: &Config) -> Result<Self> {
        if config.samples == 0 {
            return Err(Error::InvalidConfiguration(
                "samples must be positive".into(),
            ));
        }
        let model = TransitionModel::new(graph, config.damping)?;
        Ok(Self {
            model,
            samples: config.samples,
            seed: config.seed,
        })
    }
}

impl<G: QueryableGraph> PageRank for SampledPageRank<'_, G> {
    type Output = self::Run;

    fn calc(&self) -> Result<Self::Output> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let vertices = self.model.vertices();
        let mut visits: HashMap<VertexId, u64, ahash::RandomState> =
            vertices.iter().map(|v| (*v, 0)).collect();
        let mut cumulative = Vec::with_capacity(vertices.len());
        let mut current = *vertices.choose(&mut rng).unwrap();
        for _ in 0..self.samples {
            // the distribution depends on the current page, so the
            // cumulative-weight table is rebuilt on every step
            let dist = self.model.distribution(current);
            cumulative.clear();
            let mut acc = 0.0;
            for v in vertices {
                acc += *dist.get(v).unwrap();
                cumulative.push((*v, acc));
            }
            let draw: f64 = rng.random();
            // first bucket whose cumulative weight exceeds the draw; the
            // clamp covers a topmost weight that rounds to just under 1.0
            let i = cumulative.partition_point(|(_, w)| *w <= draw);
            let (next, _) = cumulative[i.min(cumulative.len() - 1)];
            *visits.get_mut(&next).unwrap() += 1;
            current = next;
        }
        let page_rank = visits
            .iter()
            .map(|(v, hits)| (*v, *hits as f64 / self.samples as f64))
            .collect();
        debug!(samples = self.samples, "random walk finished");
        Ok(Run { page_rank, visits })
    }
}

impl PageRankResult for Run {
    fn page_rank(&self) -> &HashMap<VertexId, f64, ahash::RandomState> {
        &self.page_rank
    }

    fn debug<'a, G: QueryableGraph>(&'a self, graph: &'a G) -> impl std::fmt::Debug + 'a {
        RunDebug { graph, run: self }
    }
}

pub struct RunDebug<'a, G: QueryableGraph> {
    graph: &'a G,
    run: &'a Run,
}

impl<G: QueryableGraph> std::fmt::Debug for RunDebug<'_, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.iter_vertices() {
            let p = self.run.page_rank.get(&v).unwrap();
            let hits = self.run.visits.get(&v).unwrap();
            writeln!(f, "{v:?}: {p:?}, {hits} visits")?;
        }
        Ok(())
    }
}
