//! File front end: load a problem specification from disk and solve it.

pub use flowplan_driver::*;
