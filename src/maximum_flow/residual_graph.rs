use crate::maximum_flow::error::{MaxFlowError, Result};
use num_traits::NumAssign;
use std::collections::VecDeque;
use std::fmt::Debug;

/// Capacitated directed graph over dense vertex indices `0..num_vertices`,
/// stored as a residual-capacity matrix plus a flow matrix. The matrix is
/// pre-sized, so the reverse entry of every edge exists with zero capacity
/// before any flow is pushed.
pub struct ResidualGraph<Flow> {
    num_vertices: usize,
    capacity: Vec<Vec<Flow>>,
    flow: Vec<Vec<Flow>>,
}

impl<Flow> ResidualGraph<Flow>
where
    Flow: NumAssign + Ord + Copy + Debug,
{
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            capacity: vec![vec![Flow::zero(); num_vertices]; num_vertices],
            flow: vec![vec![Flow::zero(); num_vertices]; num_vertices],
        }
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    // re-adding an edge replaces its capacity; the reverse direction only
    // gains residual capacity as a byproduct of pushed flow
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: Flow) -> Result<()> {
        if from >= self.num_vertices {
            return Err(MaxFlowError::InvalidVertex { vertex: from, num_vertices: self.num_vertices });
        }
        if to >= self.num_vertices {
            return Err(MaxFlowError::InvalidVertex { vertex: to, num_vertices: self.num_vertices });
        }
        if capacity < Flow::zero() {
            return Err(MaxFlowError::NegativeCapacity { from, to });
        }

        self.capacity[from][to] = capacity;
        Ok(())
    }

    #[inline]
    pub fn residual_capacity(&self, from: usize, to: usize) -> Flow {
        self.capacity[from][to]
    }

    #[inline]
    pub fn flow(&self, from: usize, to: usize) -> Flow {
        self.flow[from][to]
    }

    pub fn flows(&self) -> &[Vec<Flow>] {
        &self.flow
    }

    // originally added capacity of from -> to, reconstructed from the
    // mutated residual state
    pub fn upper_capacity(&self, from: usize, to: usize) -> Flow {
        self.capacity[from][to] + self.flow[from][to] - self.flow[to][from]
    }

    // flow is recorded net: a push along (u, v) first cancels flow recorded
    // on (v, u) and only the remainder lands on (u, v). pushing more than a
    // pair's residual capacity (a missing edge has zero) panics.
    pub fn push_flow(&mut self, path: &[usize], amount: Flow) {
        debug_assert!(amount > Flow::zero());

        for w in path.windows(2) {
            let (u, v) = (w[0], w[1]);
            assert!(
                amount <= self.capacity[u][v],
                "push of {:?} exceeds residual capacity {:?} on edge {}->{}",
                amount,
                self.capacity[u][v],
                u,
                v
            );

            self.capacity[u][v] -= amount;
            self.capacity[v][u] += amount;

            let cancelled = amount.min(self.flow[v][u]);
            self.flow[v][u] -= cancelled;
            self.flow[u][v] += amount - cancelled;
        }
    }

    // net flow out of a vertex; equals the solver's return value for the
    // source once a solve has completed
    pub fn maximum_flow(&self, source: usize) -> Flow {
        (0..self.num_vertices).fold(Flow::zero(), |mut total, v| {
            total += self.flow[source][v];
            total -= self.flow[v][source];
            total
        })
    }

    // vertices still reachable from source through positive residual
    // capacity, in visit order; the source side of a minimum cut once a
    // solve has completed
    pub fn minimum_cut(&self, source: usize) -> Vec<usize> {
        let mut cut = Vec::new();
        let mut visited = vec![false; self.num_vertices];
        let mut que = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = que.pop_front() {
            cut.push(u);
            for v in 0..self.num_vertices {
                if !visited[v] && self.capacity[u][v] > Flow::zero() {
                    visited[v] = true;
                    que.push_back(v);
                }
            }
        }

        cut
    }
}
