//! Solved shipment plans.

use crate::network::types::{FlowRecord, NodeId};
use crate::units::{Cost, Quantity};

/// The result of solving a [`Network`](crate::Network): one flow per route,
/// plus the total cost of shipping them. Produced once per solve call and
/// never mutated afterward.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Solution {
    records: Vec<FlowRecord>,
    total_cost: Cost,
}

impl Solution {
    pub(crate) fn new(records: Vec<FlowRecord>) -> Self {
        // The total is recomputed from the flow table, not read back from the
        // solver objective.
        let total_cost = records.iter().map(FlowRecord::cost).sum();
        Self {
            records,
            total_cost,
        }
    }

    /// All records, in route declaration order.
    pub fn records(&self) -> &[FlowRecord] {
        &self.records
    }

    /// Records carrying a positive flow.
    pub fn shipments(&self) -> impl Iterator<Item = &FlowRecord> {
        self.records.iter().filter(|r| r.flow > Quantity::ZERO)
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    /// The flow shipped from `src` to `dst`, if such a route exists.
    pub fn flow_between(&self, src: &NodeId, dst: &NodeId) -> Option<Quantity> {
        self.records
            .iter()
            .find(|r| &r.src == src && &r.dst == dst)
            .map(|r| r.flow)
    }

    /// Total flow leaving `id`.
    pub fn outflow(&self, id: &NodeId) -> Quantity {
        self.records
            .iter()
            .filter(|r| &r.src == id)
            .map(|r| r.flow)
            .sum()
    }

    /// Total flow entering `id`.
    pub fn inflow(&self, id: &NodeId) -> Quantity {
        self.records
            .iter()
            .filter(|r| &r.dst == id)
            .map(|r| r.flow)
            .sum()
    }
}
