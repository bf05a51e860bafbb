//! Problem specifications ([`Spec`]): the nodes and routes describing one
//! transportation or transhipment instance. [`run`](crate::run::run) turns a
//! specification into a [`Solution`](crate::Solution).

use crate::network::types::{Node, NodeId, NodeKind, Route};
use crate::network::{Network, TopologyError};
use crate::units::{Cost, Quantity};

/// A problem specification.
#[derive(Debug, Clone, typed_builder::TypedBuilder)]
pub struct Spec {
    /// Supply, demand, and transshipment nodes.
    pub nodes: Vec<Node>,
    /// Directed, costed routes between them.
    pub routes: Vec<Route>,
}

impl Spec {
    /// Validate a specification, producing a `ValidSpec`.
    ///
    /// Correctness properties:
    ///
    /// - Every supply and demand amount must be finite and non-negative.
    /// - Every route cost must be finite.
    /// - Every route capacity must be finite and non-negative.
    pub(crate) fn validate(self) -> Result<ValidSpec, SpecError> {
        for node in &self.nodes {
            let amount = match node.kind {
                NodeKind::Supply { amount } | NodeKind::Demand { amount } => amount,
                NodeKind::Transshipment => continue,
            };
            // CORRECTNESS: Every supply and demand amount must be finite and non-negative.
            if !amount.is_finite() || amount < Quantity::ZERO {
                return Err(SpecError::InvalidAmount {
                    node: node.id.clone(),
                    amount,
                });
            }
        }
        for route in &self.routes {
            // CORRECTNESS: Every route cost must be finite. Negative costs are
            // legal and may make the model unbounded.
            if !route.cost.is_finite() {
                return Err(SpecError::NonFiniteCost {
                    src: route.src.clone(),
                    dst: route.dst.clone(),
                    cost: route.cost,
                });
            }
            if let Some(capacity) = route.capacity {
                // CORRECTNESS: Every route capacity must be finite and non-negative.
                if !capacity.is_finite() || capacity < Quantity::ZERO {
                    return Err(SpecError::InvalidCapacity {
                        src: route.src.clone(),
                        dst: route.dst.clone(),
                        capacity,
                    });
                }
            }
        }
        let network = Network::new(&self.nodes, &self.routes)?;
        Ok(ValidSpec { network })
    }
}

/// A `ValidSpec` is a `Spec` that has been validated. Its values satisfy the
/// properties listed in `Spec::validate()` and its topology those in
/// `Network::new()`.
#[derive(Debug)]
pub(crate) struct ValidSpec {
    pub(crate) network: Network,
}

/// Problem specification error.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// A node has a non-finite or negative amount.
    #[error("node {node} has an invalid amount ({amount})")]
    InvalidAmount {
        /// The node ID.
        node: NodeId,
        /// The invalid amount.
        amount: Quantity,
    },

    /// A route has a non-finite cost.
    #[error("route from {src} to {dst} has a non-finite cost ({cost})")]
    NonFiniteCost {
        /// The route origin.
        src: NodeId,
        /// The route destination.
        dst: NodeId,
        /// The invalid cost.
        cost: Cost,
    },

    /// A route has a non-finite or negative capacity.
    #[error("route from {src} to {dst} has an invalid capacity ({capacity})")]
    InvalidCapacity {
        /// The route origin.
        src: NodeId,
        /// The route destination.
        dst: NodeId,
        /// The invalid capacity.
        capacity: Quantity,
    },

    /// The topology is invalid.
    #[error("invalid topology")]
    InvalidTopology(#[from] TopologyError),
}
