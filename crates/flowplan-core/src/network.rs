pub(crate) mod topology;
pub mod types;

use petgraph::graph::DiGraph;

pub use topology::TopologyError;
pub use types::*;

use crate::model::{self, SolveError};
use crate::solution::Solution;
use crate::units::Quantity;

use self::topology::Topology;

/// A validated flow network: supply, demand, and transshipment nodes joined by
/// directed, costed routes.
#[derive(Debug, Clone)]
pub struct Network {
    topology: Topology,
}

impl Network {
    /// Creates a network from a list of nodes and routes. Returns an error if the
    /// input violates any of the properties listed in [`Topology::new`].
    pub fn new(nodes: &[Node], routes: &[Route]) -> Result<Self, TopologyError> {
        let topology = Topology::new(nodes, routes)?;
        Ok(Self { topology })
    }

    /// Builds the linear program for this network and hands it to the solver.
    pub fn solve(&self) -> Result<Solution, SolveError> {
        model::solve(self)
    }

    /// Get the route from `src` to `dst`, if one exists.
    pub fn route_between(&self, src: &NodeId, dst: &NodeId) -> Option<&Route> {
        let a = self.topology.idx_of(src)?;
        let b = self.topology.idx_of(dst)?;
        let eidx = self.topology.graph.find_edge(a, b)?;
        self.topology.graph.edge_weight(eidx)
    }

    /// Total amount available across all supply nodes.
    pub fn total_supply(&self) -> Quantity {
        self.nodes().filter_map(Node::supply_amount).sum()
    }

    /// Total amount required across all demand nodes.
    pub fn total_demand(&self) -> Quantity {
        self.nodes().filter_map(Node::demand_amount).sum()
    }

    pub(crate) fn graph(&self) -> &DiGraph<Node, Route> {
        &self.topology.graph
    }

    delegate::delegate! {
        to self.topology.graph {
            #[call(node_weights)]
            pub fn nodes(&self) -> impl Iterator<Item = &Node>;

            #[call(edge_weights)]
            pub fn routes(&self) -> impl Iterator<Item = &Route>;

            #[call(node_count)]
            pub fn nr_nodes(&self) -> usize;

            #[call(edge_count)]
            pub fn nr_routes(&self) -> usize;
        }
    }
}
