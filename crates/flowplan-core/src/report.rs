//! Presentation helpers: a plain-text flow table and a Graphviz rendering of
//! a solved network.

use petgraph::dot::{Config, Dot};
use petgraph::visit::EdgeRef;

use crate::network::types::NodeKind;
use crate::network::Network;
use crate::solution::Solution;
use crate::units::Quantity;

/// Renders a solution as an aligned text table, one row per route, with a
/// total line at the bottom.
pub fn flow_table(solution: &Solution) -> String {
    let id_width = solution
        .records()
        .iter()
        .map(|r| r.src.as_str().len().max(r.dst.as_str().len()))
        .max()
        .unwrap_or(0)
        .max("from".len());
    let mut out = String::new();
    out.push_str(&format!(
        "{:<id_width$}  {:<id_width$}  {:>10}  {:>12}\n",
        "from", "to", "flow", "cost"
    ));
    for record in solution.records() {
        out.push_str(&format!(
            "{:<id_width$}  {:<id_width$}  {:>10.1}  {:>12.2}\n",
            record.src.as_str(),
            record.dst.as_str(),
            record.flow.into_f64(),
            record.cost().into_f64(),
        ));
    }
    out.push_str(&format!(
        "total cost: {:.2}\n",
        solution.total_cost().into_f64()
    ));
    out
}

/// Renders the solved network in Graphviz format. Routes are labeled with
/// `flow @ unit cost`; supply and demand nodes carry their amounts.
pub fn flow_dot(network: &Network, solution: &Solution) -> String {
    // `Dot`'s Display impl requires Display weights; Debug emits the same
    // structure, and every label comes from the getters below.
    format!(
        "{:?}",
        Dot::with_attr_getters(
            network.graph(),
            &[Config::EdgeNoLabel, Config::NodeNoLabel],
            &|_, edge| {
                let route = edge.weight();
                let flow = solution
                    .flow_between(&route.src, &route.dst)
                    .unwrap_or(Quantity::ZERO);
                format!("label = \"{} @ {}\"", flow, route.cost)
            },
            &|_, (_, node)| {
                let label = match node.kind {
                    NodeKind::Supply { amount } => format!("{} (supply {})", node.id, amount),
                    NodeKind::Demand { amount } => format!("{} (demand {})", node.id, amount),
                    NodeKind::Transshipment => node.id.to_string(),
                };
                format!("label = \"{label}\"")
            },
        )
    )
}
