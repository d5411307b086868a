//! Decision procedures for a [`ConstraintSystem`]

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};

use crate::constraints::{ConstraintSystem, Model};

mod elimination;
pub use elimination::Elimination;

#[cfg(feature = "z3")]
mod smt;
#[cfg(feature = "z3")]
pub use smt::Z3;

/// Result of a satisfiability check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sat(Model),
    Unsat,
}

impl Outcome {
    pub fn model(&self) -> Option<&Model> {
        match self {
            Outcome::Sat(model) => Some(model),
            Outcome::Unsat => None,
        }
    }
}

/// Something that can decide a [`ConstraintSystem`]
pub trait Backend {
    fn name(&self) -> &'static str;

    /// `Ok(Outcome::Unsat)` means the system provably has no solution. Errors are
    /// reserved for systems the backend cannot decide.
    fn check(&self, system: &ConstraintSystem) -> Result<Outcome>;
}

/// Backends selectable from the command line
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    #[default]
    Elimination,
    Z3,
}

impl BackendKind {
    pub fn create(self) -> Result<Box<dyn Backend>> {
        match self {
            BackendKind::Elimination => Ok(Box::new(Elimination)),
            #[cfg(feature = "z3")]
            BackendKind::Z3 => Ok(Box::new(Z3)),
            #[cfg(not(feature = "z3"))]
            BackendKind::Z3 => bail!("the z3 backend is not available, rebuild with `--features z3`"),
        }
    }
}

impl FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "elimination" => Ok(BackendKind::Elimination),
            "z3" => Ok(BackendKind::Z3),
            _ => bail!("unknown backend '{s}' (expected 'elimination' or 'z3')"),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BackendKind::Elimination => "elimination",
            BackendKind::Z3 => "z3",
        })
    }
}

/// Build the constraint system for `observations` and decide it with `backend`
pub fn solve(
    backend: &dyn Backend,
    observations: &[common::structs::WorldLine],
) -> Result<Outcome> {
    let system = ConstraintSystem::new(observations.to_vec());
    log::info!(
        "checking {} constraints over {} unknowns with the {} backend",
        system.constraints().len(),
        system.unknowns().len(),
        backend.name()
    );
    let outcome = backend.check(&system)?;
    match &outcome {
        Outcome::Sat(model) => log::debug!("model: {model:?}"),
        Outcome::Unsat => log::info!("no assignment satisfies the constraints"),
    }
    Ok(outcome)
}
