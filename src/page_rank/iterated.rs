use super::*;
use crate::*;
use algograph::graph::{QueryableGraph, VertexId};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Solves the PageRank fixed-point equation by repeated substitution.
///
/// Each sweep redistributes a dangling page's rank uniformly over the whole
/// universe, matching the transition model's dead-end teleport, so both
/// estimators approximate the same stationary distribution and the result
/// stays normalized on dangling-heavy graphs.
pub struct IteratedPageRank<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    damping: f64,
    epsilon: f64,
    max_sweeps: usize,
    dangling: Vec<VertexId>,
    transitions: BTreeMap<(VertexId, VertexId), f64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub epsilon: f64,
    pub max_sweeps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            epsilon: DEFAULT_EPSILON,
            max_sweeps: DEFAULT_MAX_SWEEPS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Run {
    pub page_rank: HashMap<VertexId, f64, ahash::RandomState>,
    pub delta: HashMap<VertexId, f64, ahash::RandomState>,
    pub sweeps: usize,
}

impl<'a, G: QueryableGraph> IteratedPageRank<'a, G> {
    pub fn new(g: &'a G, config: &Config) -> Result<Self> {
        let damping = config.damping;
        if !damping.is_finite() || damping <= 0.0 || damping >= 1.0 {
            return Err(Error::InvalidConfiguration(format!(
                "damping must lie in (0, 1), got {damping}"
            )));
        }
        let epsilon = config.epsilon;
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "epsilon must be positive, got {epsilon}"
            )));
        }
        if config.max_sweeps == 0 {
            return Err(Error::InvalidConfiguration(
                "max_sweeps must be positive".into(),
            ));
        }
        if g.vertex_size() == 0 {
            return Err(Error::InvalidGraph("empty page universe".into()));
        }
        let mut dangling = Vec::new();
        let transitions = {
            let mut transitions = BTreeMap::new();
            for u in g.iter_vertices() {
                let n = g.out_edges(&u).count();
                if n == 0 {
                    dangling.push(u);
                    continue;
                }
                let unit = damping / (n as f64);
                for v in g.out_edges(&u).map(|e| e.sink) {
                    if let Some(w) = transitions.get_mut(&(u, v)) {
                        *w += unit;
                    } else {
                        transitions.insert((u, v), unit);
                    }
                }
            }
            transitions
        };
        Ok(Self {
            graph: g,
            damping,
            epsilon,
            max_sweeps: config.max_sweeps,
            dangling,
            transitions,
        })
    }
}

impl<G: QueryableGraph> PageRank for IteratedPageRank<'_, G> {
    type Output = self::Run;

    fn calc(&self) -> Result<Self::Output> {
        let n = self.graph.vertex_size() as f64;
        let mut p: HashMap<VertexId, f64, ahash::RandomState> =
            self.graph.iter_vertices().map(|v| (v, 1.0 / n)).collect();
        let mut r = HashMap::with_hasher(ahash::RandomState::new());
        let mut delta = HashMap::with_hasher(ahash::RandomState::new());
        for sweep in 1..=self.max_sweeps {
            let dangling_mass: f64 = self.dangling.iter().map(|v| p.get(v).unwrap()).sum();
            let base = (1.0 - self.damping) / n + self.damping * dangling_mass / n;
            for v in self.graph.iter_vertices() {
                r.insert(v, base);
            }
            for ((v0, v1), w) in self.transitions.iter() {
                let from = p.get(v0).unwrap();
                let to = r.get_mut(v1).unwrap();
                *to += from * w;
            }

            delta.clear();
            for v in self.graph.iter_vertices() {
                let a = p.get(&v).unwrap();
                let b = r.get(&v).unwrap();
                delta.insert(v, a - b);
            }

            if norm_max(&delta) <= self.epsilon {
                debug!(sweep, "power iteration converged");
                return Ok(Run {
                    page_rank: r,
                    delta,
                    sweeps: sweep,
                });
            }

            std::mem::swap(&mut p, &mut r);
            r.clear();
        }
        Err(Error::ConvergenceFailure {
            sweeps: self.max_sweeps,
            delta: norm_max(&delta),
        })
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
            let d = self.run.delta.get(&v).unwrap();
            writeln!(f, "{v:?}: {p:?}, {d:?}")?;
        }
        Ok(())
    }
}
