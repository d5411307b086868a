//! The constraint system asserted into the Z3 SMT solver

use anyhow::{bail, Context as _, Result};
use z3::ast::{Ast, Int};
use z3::{Config, Context, SatResult, Solver};

use common::structs::{Axis, Vec3};

use super::{Backend, Outcome};
use crate::constraints::{Constraint, ConstraintSystem, Model, Unknown};

#[derive(Debug, Default, Clone, Copy)]
pub struct Z3;

impl Backend for Z3 {
    fn name(&self) -> &'static str {
        "z3"
    }

    fn check(&self, system: &ConstraintSystem) -> Result<Outcome> {
        let cfg = Config::new();
        let ctx = Context::new(&cfg);
        let solver = Solver::new(&ctx);

        let var = |unknown: Unknown| Int::new_const(&ctx, unknown.to_string());
        let origin = Axis::ALL.map(|axis| var(Unknown::Origin(axis)));
        let velocity = Axis::ALL.map(|axis| var(Unknown::Velocity(axis)));
        let times: Vec<_> = (0..system.observations().len())
            .map(|i| var(Unknown::Time(i)))
            .collect();
        let zero = Int::from_i64(&ctx, 0);

        for &constraint in system.constraints() {
            log::trace!("assert {}", system.display(constraint));
            match constraint {
                Constraint::Positive(i) => solver.assert(&times[i].gt(&zero)),
                Constraint::Meets { observation, axis } => {
                    let hail = system.observations()[observation];
                    let a = axis as usize;
                    let t = &times[observation];
                    let position = Int::from_i64(&ctx, hail.position.get(axis));
                    let speed = Int::from_i64(&ctx, hail.velocity.get(axis));
                    let rock = &origin[a] + &(&velocity[a] * t);
                    let hail = &position + &(&speed * t);
                    solver.assert(&rock._eq(&hail));
                }
            }
        }

        match solver.check() {
            SatResult::Sat => {}
            SatResult::Unsat => return Ok(Outcome::Unsat),
            SatResult::Unknown => bail!(
                "z3 could not decide the system: {}",
                solver
                    .get_reason_unknown()
                    .unwrap_or_else(|| "no reason given".to_owned())
            ),
        }

        let model = solver.get_model().context("z3 returned no model")?;
        let eval = |ast: &Int| -> Result<i64> {
            model
                .eval(ast, true)
                .and_then(|value| value.as_i64())
                .context("model value does not fit into i64")
        };

        let model = Model {
            origin: Vec3::new(eval(&origin[0])?, eval(&origin[1])?, eval(&origin[2])?),
            velocity: Vec3::new(eval(&velocity[0])?, eval(&velocity[1])?, eval(&velocity[2])?),
            times: times.iter().map(eval).collect::<Result<_>>()?,
        };
        Ok(Outcome::Sat(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::constants::BUILTIN_OBSERVATIONS;

    #[test]
    fn agrees_with_elimination() {
        let system = ConstraintSystem::new(BUILTIN_OBSERVATIONS.to_vec());
        let z3 = Z3.check(&system).unwrap();
        let elimination = super::super::Elimination.check(&system).unwrap();
        assert_eq!(z3, elimination);
    }
}
