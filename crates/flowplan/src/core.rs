//! Core data structures and routines. The most common entry point is
//! [run()](run), which turns a [specification](Spec) into a
//! [shipment plan](Solution).

pub use flowplan_core::*;
