use crate::page_rank::{iterated, sampled, PageRank, PageRankResult};
use crate::{Error, Result};
use algograph::graph::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A validated universe of pages and the links between them.
///
/// Pages are identified by name; internally each name is bound to a vertex of
/// a directed graph so the estimators can stay generic over
/// [`QueryableGraph`]. Vertices are created in `BTreeMap` order, so vertex-id
/// order coincides with lexicographic page order. The graph is immutable once
/// built.
pub struct LinkGraph {
    graph: directed::TreeBackedGraph,
    ids: HashMap<String, VertexId, ahash::RandomState>,
    names: HashMap<VertexId, String, ahash::RandomState>,
}

impl LinkGraph {
    /// Builds the graph, rejecting an empty universe, links to unknown pages
    /// and self-links.
    pub fn from_links(links: BTreeMap<String, BTreeSet<String>>) -> Result<Self> {
        if links.is_empty() {
            return Err(Error::InvalidGraph("empty page universe".into()));
        }
        let mut graph = directed::TreeBackedGraph::new();
        let mut ids = HashMap::with_hasher(ahash::RandomState::new());
        let mut names = HashMap::with_hasher(ahash::RandomState::new());
        for page in links.keys() {
            let v = graph.add_vertex();
            ids.insert(page.clone(), v);
            names.insert(v, page.clone());
        }
        for (page, targets) in links.iter() {
            let u = ids[page];
            for target in targets.iter() {
                if target == page {
                    return Err(Error::InvalidGraph(format!("{page:?} links to itself")));
                }
                let Some(v) = ids.get(target) else {
                    return Err(Error::InvalidGraph(format!(
                        "{page:?} links to unknown page {target:?}"
                    )));
                };
                graph.add_edge(u, *v);
            }
        }
        Ok(Self { graph, ids, names })
    }

    pub fn page_count(&self) -> usize {
        self.graph.vertex_size()
    }

    pub fn links(&self, page: &str) -> Option<BTreeSet<&str>> {
        let u = self.ids.get(page)?;
        Some(
            self.graph
                .out_edges(u)
                .map(|e| self.names[&e.sink].as_str())
                .collect(),
        )
    }

    pub fn as_graph(&self) -> &directed::TreeBackedGraph {
        &self.graph
    }

    /// Maps a vertex-keyed rank distribution back onto page names,
    /// lexicographically ordered.
    pub fn resolve(
        &self,
        ranks: &HashMap<VertexId, f64, ahash::RandomState>,
    ) -> BTreeMap<String, f64> {
        ranks
            .iter()
            .map(|(v, w)| (self.names[v].clone(), *w))
            .collect()
    }

    pub fn sample_rank(&self, config: &sampled::Config) -> Result<BTreeMap<String, f64>> {
        let run = sampled::SampledPageRank::new(&self.graph, config)?.calc()?;
        Ok(self.resolve(run.page_rank()))
    }

    pub fn iterate_rank(&self, config: &iterated::Config) -> Result<BTreeMap<String, f64>> {
        let run = iterated::IteratedPageRank::new(&self.graph, config)?.calc()?;
        Ok(self.resolve(run.page_rank()))
    }
}
