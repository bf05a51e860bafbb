use std::collections::HashSet;

use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;

use crate::network::types::{Node, NodeId, NodeKind, Route};

#[derive(Debug, Clone)]
pub(crate) struct Topology {
    pub(crate) graph: DiGraph<Node, Route>,
    id2idx: FxHashMap<NodeId, NodeIndex>,
}

impl Topology {
    /// Creates a flow network topology from a list of nodes and routes. This function returns an
    /// error if the given input fails to produce a valid topology.
    ///
    /// Correctness properties:
    ///
    /// - Every node must have a unique ID.
    /// - Every route must have distinct endpoints declared in `nodes`.
    /// - For any ordered pair of nodes, there must be at most one route.
    /// - No route may terminate at a supply node.
    /// - No route may originate at a demand node.
    /// - Every node must be referenced by some route.
    pub(crate) fn new(nodes: &[Node], routes: &[Route]) -> Result<Self, TopologyError> {
        let mut g = DiGraph::new();
        let mut id2idx = FxHashMap::default();
        for node in nodes.iter().cloned() {
            let id = node.id.clone();
            let idx = g.add_node(node);
            if id2idx.insert(id.clone(), idx).is_some() {
                // CORRECTNESS: Every node must have a unique ID.
                return Err(TopologyError::DuplicateNodeId(id));
            }
        }
        let mut referenced_nodes = HashSet::new();
        for route in routes.iter().cloned() {
            let (src, dst) = (route.src.clone(), route.dst.clone());
            // CORRECTNESS: Every route must have distinct endpoints declared in `nodes`.
            if src == dst {
                return Err(TopologyError::RouteToSelf(src));
            }
            let Some(&a) = id2idx.get(&src) else {
                return Err(TopologyError::UndeclaredNode(src));
            };
            let Some(&b) = id2idx.get(&dst) else {
                return Err(TopologyError::UndeclaredNode(dst));
            };
            // CORRECTNESS: For any ordered pair of nodes, there must be at most one route.
            if g.find_edge(a, b).is_some() {
                return Err(TopologyError::DuplicateRoute { src, dst });
            }
            // CORRECTNESS: Supply nodes only ship out, demand nodes only receive. The
            // constraints placed on each node kind are not meaningful otherwise.
            if matches!(g[b].kind, NodeKind::Supply { .. }) {
                return Err(TopologyError::RouteIntoSupply { src, dst });
            }
            if matches!(g[a].kind, NodeKind::Demand { .. }) {
                return Err(TopologyError::RouteOutOfDemand { src, dst });
            }
            referenced_nodes.insert(src);
            referenced_nodes.insert(dst);
            g.add_edge(a, b, route);
        }
        // CORRECTNESS: Every node must be referenced by some route.
        for id in id2idx.keys() {
            if !referenced_nodes.contains(id) {
                return Err(TopologyError::IsolatedNode(id.clone()));
            }
        }
        Ok(Self { graph: g, id2idx })
    }

    pub(crate) fn idx_of(&self, id: &NodeId) -> Option<NodeIndex> {
        self.id2idx.get(id).copied()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    #[error("duplicate node ID {0}")]
    DuplicateNodeId(NodeId),

    #[error("node {0} has a route to itself")]
    RouteToSelf(NodeId),

    #[error("node {0} is not declared")]
    UndeclaredNode(NodeId),

    #[error("duplicate routes from {src} to {dst}")]
    DuplicateRoute { src: NodeId, dst: NodeId },

    #[error("route from {src} terminates at supply node {dst}")]
    RouteIntoSupply { src: NodeId, dst: NodeId },

    #[error("route to {dst} originates at demand node {src}")]
    RouteOutOfDemand { src: NodeId, dst: NodeId },

    #[error("node {0} is not referenced by any route")]
    IsolatedNode(NodeId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_topology_succeeds() {
        assert!(
            Topology::new(&[], &[]).is_ok(),
            "failed to create empty topology"
        );
    }

    #[test]
    fn two_by_two_topology_succeeds() {
        let (nodes, routes) = crate::testing::two_by_two_config();
        assert!(Topology::new(&nodes, &routes).is_ok());
    }

    #[test]
    fn crossdock_topology_succeeds() {
        let (nodes, routes) = crate::testing::crossdock_config();
        assert!(Topology::new(&nodes, &routes).is_ok());
    }

    #[test]
    fn duplicate_node_fails() {
        let n1 = Node::new_supply("S1", 100.0);
        let n2 = Node::new_supply("S1", 50.0); // error
        let n3 = Node::new_demand("D1", 150.0);
        let r1 = Route::new("S1", "D1", 1.0);
        let res = Topology::new(&[n1, n2, n3], &[r1]);
        assert!(matches!(res, Err(TopologyError::DuplicateNodeId(..))));
    }

    #[test]
    fn route_to_self_fails() {
        let n1 = Node::new_supply("S1", 100.0);
        let n2 = Node::new_transshipment("T1");
        let r1 = Route::new("S1", "T1", 1.0);
        let r2 = Route::new("T1", "T1", 1.0); // error
        let res = Topology::new(&[n1, n2], &[r1, r2]);
        assert!(matches!(res, Err(TopologyError::RouteToSelf(..))));
    }

    #[test]
    fn undeclared_node_fails() {
        let n1 = Node::new_supply("S1", 100.0);
        let n2 = Node::new_demand("D1", 100.0);
        let r1 = Route::new("S1", "D1", 1.0);
        let r2 = Route::new("S1", "D2", 1.0); // error
        let res = Topology::new(&[n1, n2], &[r1, r2]);
        assert!(matches!(res, Err(TopologyError::UndeclaredNode(..))));
    }

    #[test]
    fn duplicate_route_fails() {
        let n1 = Node::new_supply("S1", 100.0);
        let n2 = Node::new_demand("D1", 100.0);
        let r1 = Route::new("S1", "D1", 1.0);
        let r2 = Route::new("S1", "D1", 2.0); // error
        let res = Topology::new(&[n1, n2], &[r1, r2]);
        assert!(matches!(res, Err(TopologyError::DuplicateRoute { .. })));
    }

    #[test]
    fn route_into_supply_fails() {
        let n1 = Node::new_supply("S1", 100.0);
        let n2 = Node::new_supply("S2", 100.0);
        let n3 = Node::new_demand("D1", 100.0);
        let r1 = Route::new("S1", "S2", 1.0); // error
        let r2 = Route::new("S2", "D1", 1.0);
        let res = Topology::new(&[n1, n2, n3], &[r1, r2]);
        assert!(matches!(res, Err(TopologyError::RouteIntoSupply { .. })));
    }

    #[test]
    fn route_out_of_demand_fails() {
        let n1 = Node::new_supply("S1", 100.0);
        let n2 = Node::new_demand("D1", 50.0);
        let n3 = Node::new_demand("D2", 50.0);
        let r1 = Route::new("S1", "D1", 1.0);
        let r2 = Route::new("D1", "D2", 1.0); // error
        let res = Topology::new(&[n1, n2, n3], &[r1, r2]);
        assert!(matches!(res, Err(TopologyError::RouteOutOfDemand { .. })));
    }

    #[test]
    fn isolated_node_fails() {
        let n1 = Node::new_supply("S1", 100.0);
        let n2 = Node::new_demand("D1", 100.0);
        let n3 = Node::new_transshipment("T1"); // error
        let r1 = Route::new("S1", "D1", 1.0);
        let res = Topology::new(&[n1, n2, n3], &[r1]);
        assert!(matches!(res, Err(TopologyError::IsolatedNode(..))));
    }
}
