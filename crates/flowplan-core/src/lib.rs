#![warn(unreachable_pub, missing_debug_implementations)]

//! The core `flowplan` library. This crate defines [the routine](run::run)
//! that turns a problem specification into a [shipment plan](Solution): it
//! builds a linear program over a validated flow [`Network`] and hands it to
//! an external LP solver. No optimization algorithm lives here.

mod model;
mod network;
pub mod report;
mod run;
mod solution;
mod spec;
pub mod units;

#[cfg(test)]
pub(crate) mod testing;

pub use model::SolveError;
pub use network::{
    types::{FlowRecord, Node, NodeId, NodeKind, Route},
    Network, TopologyError,
};
pub use run::{run, Error};
pub use solution::Solution;
pub use spec::{Spec, SpecError};
