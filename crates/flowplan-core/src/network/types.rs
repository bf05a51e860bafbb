use crate::units::{Cost, Quantity};

/// A node identifier, e.g. `"F1"` or `"DC3"`.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a new ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
}

impl Node {
    pub fn new_supply(id: impl Into<NodeId>, amount: impl Into<Quantity>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Supply {
                amount: amount.into(),
            },
        }
    }

    pub fn new_demand(id: impl Into<NodeId>, amount: impl Into<Quantity>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Demand {
                amount: amount.into(),
            },
        }
    }

    pub fn new_transshipment(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Transshipment,
        }
    }

    /// Returns the supply amount, or `None` for other node kinds.
    pub fn supply_amount(&self) -> Option<Quantity> {
        match self.kind {
            NodeKind::Supply { amount } => Some(amount),
            _ => None,
        }
    }

    /// Returns the demand amount, or `None` for other node kinds.
    pub fn demand_amount(&self) -> Option<Quantity> {
        match self.kind {
            NodeKind::Demand { amount } => Some(amount),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Supply { amount: Quantity },
    Demand { amount: Quantity },
    /// Passes flow through without producing or consuming any.
    Transshipment,
}

/// A directed shipping route between two nodes.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Route {
    pub src: NodeId,
    pub dst: NodeId,
    /// Cost per unit shipped.
    pub cost: Cost,
    /// Upper bound on flow; `None` means uncapacitated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Quantity>,
}

impl Route {
    pub fn new(src: impl Into<NodeId>, dst: impl Into<NodeId>, cost: impl Into<Cost>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            cost: cost.into(),
            capacity: None,
        }
    }

    pub fn capped(
        src: impl Into<NodeId>,
        dst: impl Into<NodeId>,
        cost: impl Into<Cost>,
        capacity: impl Into<Quantity>,
    ) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            cost: cost.into(),
            capacity: Some(capacity.into()),
        }
    }

    pub fn connects(&self, src: &NodeId, dst: &NodeId) -> bool {
        &self.src == src && &self.dst == dst
    }
}

/// One row of a [`Solution`](crate::Solution): the solved flow along a route.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FlowRecord {
    pub src: NodeId,
    pub dst: NodeId,
    pub flow: Quantity,
    pub unit_cost: Cost,
}

impl FlowRecord {
    /// Cost contributed by this record, `flow * unit_cost`.
    pub fn cost(&self) -> Cost {
        Cost::new(self.flow.into_f64() * self.unit_cost.into_f64())
    }
}
