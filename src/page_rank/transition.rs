use crate::*;
use algograph::graph::{QueryableGraph, VertexId};
use std::collections::HashMap;

/// Distribution over "next page to visit" for a random surfer.
///
/// With probability `damping` the surfer follows one of the current page's
/// outgoing links, uniformly; with probability `1 - damping` it teleports to
/// any page of the universe, uniformly. A dangling page teleports uniformly
/// with probability 1, itself included, so no probability mass leaves the
/// system.
pub struct TransitionModel<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    damping: f64,
    vertices: Vec<VertexId>,
}

impl<'a, G: QueryableGraph> TransitionModel<'a, G> {
    pub fn new(graph: &'a G, damping: f64) -> Result<Self> {
        if !damping.is_finite() || damping <= 0.0 || damping >= 1.0 {
            return Err(Error::InvalidConfiguration(format!(
                "damping must lie in (0, 1), got {damping}"
            )));
        }
        if graph.vertex_size() == 0 {
            return Err(Error::InvalidGraph("empty page universe".into()));
        }
        let mut vertices: Vec<_> = graph.iter_vertices().collect();
        vertices.sort_unstable();
        Ok(Self {
            graph,
            damping,
            vertices,
        })
    }

    /// All pages of the universe, in a fixed order shared by every call.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn distribution(&self, page: VertexId) -> HashMap<VertexId, f64, ahash::RandomState> {
        debug_assert!(self.graph.contains_vertex(&page));
        let n = self.vertices.len() as f64;
        let links: Vec<VertexId> = self.graph.out_edges(&page).map(|e| e.sink).collect();
        let dist = if links.is_empty() {
            self.vertices.iter().map(|v| (*v, 1.0 / n)).collect()
        } else {
            let teleport = (1.0 - self.damping) / n;
            let follow = self.damping / (links.len() as f64);
            let mut dist: HashMap<_, _, ahash::RandomState> =
                self.vertices.iter().map(|v| (*v, teleport)).collect();
            for v in links {
                *dist.get_mut(&v).unwrap() += follow;
            }
            dist
        };
        debug_assert!((total_mass(&dist) - 1.0).abs() < 1e-7);
        dist
    }
}
