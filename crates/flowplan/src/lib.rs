//! `Flowplan` formulates and solves the classic transportation and
//! transhipment problems. Given supply nodes, demand nodes, optional
//! transshipment nodes, and directed routes with unit costs and capacities,
//! it builds a linear program, dispatches it to an off-the-shelf LP solver,
//! and produces a shipment plan that can be rendered as a table or a
//! Graphviz chart.

#![warn(unreachable_pub, missing_docs)]

pub mod core;
pub mod driver;
