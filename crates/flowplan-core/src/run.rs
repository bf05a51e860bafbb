use crate::model::SolveError;
use crate::solution::Solution;
use crate::spec::{Spec, SpecError};

/// The core `flowplan` routine. This turns a problem specification into a
/// shipment plan: validate the specification, build the linear program, and
/// hand it to the solver.
///
/// Exactly one deterministic solve attempt is made; no retry is meaningful.
pub fn run(spec: Spec) -> Result<Solution, Error> {
    let spec = spec.validate()?;
    let solution = spec.network.solve()?;
    Ok(solution)
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidSpec(#[from] SpecError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}
