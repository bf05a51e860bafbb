//! The linear program behind a shipment plan, and the adapter around the
//! external solver that optimizes it.
//!
//! Each route contributes one non-negative decision variable (its flow),
//! bounded above by the route capacity when one is set. The objective is the
//! total shipping cost. Supply nodes constrain their outflow from above,
//! demand nodes constrain their inflow from below, and transshipment nodes
//! conserve flow exactly. A single deterministic solve attempt is made per
//! invocation; all optimization is delegated to the solver backend.

use good_lp::{
    constraint, default_solver, variable, Expression, ProblemVariables, ResolutionError,
    Solution as _, SolverModel, Variable,
};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use rustc_hash::FxHashMap;

use crate::network::types::{FlowRecord, Node, NodeKind, Route};
use crate::network::Network;
use crate::solution::Solution;
use crate::units::Quantity;

pub(crate) fn solve(network: &Network) -> Result<Solution, SolveError> {
    let graph = network.graph();
    // A network without routes has nothing to optimize, and the backend
    // rejects models with no variables.
    if graph.edge_count() == 0 {
        return Ok(Solution::new(Vec::new()));
    }

    let mut vars = ProblemVariables::new();
    let mut flow_vars: FxHashMap<EdgeIndex, Variable> = FxHashMap::default();
    let mut total_cost = Expression::default();
    for edge in graph.edge_references() {
        let route = edge.weight();
        let var = match route.capacity {
            Some(cap) => vars.add(variable().min(0.0).max(cap.into_f64())),
            None => vars.add(variable().min(0.0)),
        };
        total_cost.add_mul(route.cost.into_f64(), var);
        flow_vars.insert(edge.id(), var);
    }

    let mut model = vars.minimise(total_cost).using(default_solver);
    for idx in graph.node_indices() {
        let inflow = incident_flow(graph, idx, Direction::Incoming, &flow_vars);
        let outflow = incident_flow(graph, idx, Direction::Outgoing, &flow_vars);
        match graph[idx].kind {
            NodeKind::Supply { amount } => {
                model = model.with(constraint!(outflow <= amount.into_f64()));
            }
            NodeKind::Demand { amount } => {
                model = model.with(constraint!(inflow >= amount.into_f64()));
            }
            NodeKind::Transshipment => {
                model = model.with(constraint!(inflow == outflow));
            }
        }
    }

    let lp_solution = model.solve().map_err(|err| match err {
        ResolutionError::Infeasible => SolveError::Infeasible {
            detail: infeasibility_context(network),
        },
        ResolutionError::Unbounded => SolveError::Unbounded,
        other => SolveError::Solver(other.to_string()),
    })?;

    let records = graph
        .edge_references()
        .map(|edge| {
            let route = edge.weight();
            // Clamp tiny negative round-off from the backend.
            let flow = lp_solution.value(flow_vars[&edge.id()]).max(0.0);
            FlowRecord {
                src: route.src.clone(),
                dst: route.dst.clone(),
                flow: Quantity::new(flow),
                unit_cost: route.cost,
            }
        })
        .collect();
    Ok(Solution::new(records))
}

fn incident_flow(
    graph: &DiGraph<Node, Route>,
    idx: NodeIndex,
    dir: Direction,
    flow_vars: &FxHashMap<EdgeIndex, Variable>,
) -> Expression {
    let mut expr = Expression::default();
    for edge in graph.edges_directed(idx, dir) {
        expr.add_mul(1.0, flow_vars[&edge.id()]);
    }
    expr
}

/// Best-effort explanation for an infeasible model, derived from network
/// aggregates. The backend reports infeasibility without naming a constraint.
fn infeasibility_context(network: &Network) -> String {
    let supply = network.total_supply();
    let demand = network.total_demand();
    if demand > supply {
        return format!("total demand {demand} exceeds total supply {supply}");
    }
    let graph = network.graph();
    for idx in graph.node_indices() {
        let node = &graph[idx];
        let NodeKind::Demand { amount } = node.kind else {
            continue;
        };
        let mut inbound = Quantity::ZERO;
        let mut uncapped = false;
        for edge in graph.edges_directed(idx, Direction::Incoming) {
            match edge.weight().capacity {
                Some(cap) => inbound += cap,
                None => uncapped = true,
            }
        }
        if !uncapped && inbound < amount {
            return format!(
                "inbound capacity {inbound} at node {} is below its demand {amount}",
                node.id
            );
        }
    }
    "constraints admit no feasible flow".to_owned()
}

/// The ways a well-formed network can fail to produce a shipment plan.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    /// No assignment of flows satisfies every constraint.
    #[error("model is infeasible: {detail}")]
    Infeasible { detail: String },

    /// The objective has no finite minimum.
    #[error("model is unbounded")]
    Unbounded,

    /// The backend failed for a reason other than the model itself.
    #[error("solver failure: {0}")]
    Solver(String),
}
