use crate::maximum_flow::error::{MaxFlowError, Result};
use crate::maximum_flow::residual_graph::ResidualGraph;
use log::{debug, trace};
use num_traits::NumAssign;
use std::collections::VecDeque;
use std::fmt::Debug;

#[derive(Default)]
pub struct EdmondsKarp {
    que: VecDeque<usize>,
    prev: Vec<usize>,
    visited: Vec<bool>,
    path: Vec<usize>,
    augmentations: usize,
}

impl EdmondsKarp {
    // O(V * E) augmentations, O(V^2) per search on the matrix. the graph is
    // left holding the final residual capacities and flow assignment.
    pub fn solve<Flow>(&mut self, source: usize, sink: usize, graph: &mut ResidualGraph<Flow>) -> Result<Flow>
    where
        Flow: NumAssign + Ord + Copy + Debug,
    {
        let num_vertices = graph.num_vertices();
        if source >= num_vertices {
            return Err(MaxFlowError::InvalidVertex { vertex: source, num_vertices });
        }
        if sink >= num_vertices {
            return Err(MaxFlowError::InvalidVertex { vertex: sink, num_vertices });
        }
        if source == sink {
            return Err(MaxFlowError::DegenerateQuery { vertex: source });
        }

        self.prev.resize(num_vertices, usize::MAX);
        self.visited.resize(num_vertices, false);
        self.augmentations = 0;

        let mut max_flow = Flow::zero();
        while self.bfs(source, sink, graph) {
            // walk the predecessor chain back from the sink
            self.path.clear();
            let mut v = sink;
            while v != source {
                self.path.push(v);
                v = self.prev[v];
            }
            self.path.push(source);
            self.path.reverse();

            // calculate delta
            let mut delta = graph.residual_capacity(self.path[0], self.path[1]);
            for w in self.path.windows(2) {
                delta = delta.min(graph.residual_capacity(w[0], w[1]));
            }

            // update flow
            graph.push_flow(&self.path, delta);
            max_flow += delta;
            self.augmentations += 1;
            trace!("augmenting path of {} edges, delta {:?}", self.path.len() - 1, delta);
        }

        debug!("maximum flow {:?} after {} augmentations", max_flow, self.augmentations);
        Ok(max_flow)
    }

    // number of augmenting paths used by the last solve
    #[inline]
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    // bfs over edges with positive residual capacity; each vertex keeps the
    // predecessor that reached it first, and the search stops the moment the
    // sink is discovered
    fn bfs<Flow>(&mut self, source: usize, sink: usize, graph: &ResidualGraph<Flow>) -> bool
    where
        Flow: NumAssign + Ord + Copy + Debug,
    {
        self.prev.fill(usize::MAX);
        self.visited.fill(false);
        self.que.clear();
        self.que.push_back(source);
        self.visited[source] = true;

        while let Some(u) = self.que.pop_front() {
            for v in 0..graph.num_vertices() {
                if self.visited[v] || graph.residual_capacity(u, v) == Flow::zero() {
                    continue;
                }
                self.visited[v] = true;
                self.prev[v] = u;

                if v == sink {
                    return true;
                }
                self.que.push_back(v);
            }
        }

        false
    }
}
