//! Encoding of the problem as a set of integer constraints
//!
//! Six unknowns are shared by every observation: the rock's origin `x, y, z`
//! and velocity `vx, vy, vz`. Each observation `i` adds its own time `t_i`,
//! which must be positive, and three equalities saying that the rock and the
//! hailstone are at the same place at that time.

use std::fmt;

use common::structs::{Axis, Vec3, WorldLine};

/// Something the solver has to find
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unknown {
    Origin(Axis),
    Velocity(Axis),
    /// Time at which the rock meets the observation with this index
    Time(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// `t_i > 0`
    Positive(usize),
    /// `origin[axis] + velocity[axis] * t_i == position_i[axis] + velocity_i[axis] * t_i`
    Meets { observation: usize, axis: Axis },
}

/// An assignment to every unknown of a [`ConstraintSystem`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub origin: Vec3,
    pub velocity: Vec3,
    pub times: Vec<i64>,
}

#[derive(Debug, Clone)]
pub struct ConstraintSystem {
    observations: Vec<WorldLine>,
    constraints: Vec<Constraint>,
}

impl ConstraintSystem {
    pub fn new(observations: Vec<WorldLine>) -> Self {
        let constraints = (0..observations.len())
            .flat_map(|i| {
                std::iter::once(Constraint::Positive(i)).chain(
                    Axis::ALL
                        .into_iter()
                        .map(move |axis| Constraint::Meets { observation: i, axis }),
                )
            })
            .collect();
        Self {
            observations,
            constraints,
        }
    }

    pub fn observations(&self) -> &[WorldLine] {
        &self.observations
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn unknowns(&self) -> Vec<Unknown> {
        Axis::ALL
            .into_iter()
            .map(Unknown::Origin)
            .chain(Axis::ALL.into_iter().map(Unknown::Velocity))
            .chain((0..self.observations.len()).map(Unknown::Time))
            .collect()
    }

    /// Check every constraint against `model` with exact arithmetic
    pub fn holds(&self, model: &Model) -> bool {
        model.times.len() == self.observations.len()
            && self.constraints.iter().all(|c| self.holds_one(*c, model))
    }

    fn holds_one(&self, constraint: Constraint, model: &Model) -> bool {
        match constraint {
            Constraint::Positive(i) => model.times[i] > 0,
            Constraint::Meets { observation, axis } => {
                let t = model.times[observation] as i128;
                let hail = self.observations[observation];
                let rock = model.origin.get(axis) as i128 + model.velocity.get(axis) as i128 * t;
                let hail = hail.position.get(axis) as i128 + hail.velocity.get(axis) as i128 * t;
                rock == hail
            }
        }
    }

    /// Display a single constraint in the same notation as the whole system
    pub fn display(&self, constraint: Constraint) -> impl fmt::Display + '_ {
        DisplayConstraint {
            system: self,
            constraint,
        }
    }
}

impl fmt::Display for Unknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unknown::Origin(axis) => write!(f, "{axis}"),
            Unknown::Velocity(axis) => write!(f, "v{axis}"),
            Unknown::Time(i) => write!(f, "t{}", i + 1),
        }
    }
}

struct DisplayConstraint<'a> {
    system: &'a ConstraintSystem,
    constraint: Constraint,
}

impl fmt::Display for DisplayConstraint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.constraint {
            Constraint::Positive(i) => write!(f, "{} > 0", Unknown::Time(i)),
            Constraint::Meets { observation, axis } => {
                let hail = self.system.observations[observation];
                let t = Unknown::Time(observation);
                write!(
                    f,
                    "{} + {} * {t} == {} + {} * {t}",
                    Unknown::Origin(axis),
                    Unknown::Velocity(axis),
                    hail.position.get(axis),
                    hail.velocity.get(axis),
                )
            }
        }
    }
}

impl fmt::Display for ConstraintSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &constraint in &self.constraints {
            writeln!(f, "{}", self.display(constraint))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::constants::BUILTIN_OBSERVATIONS;

    fn builtin() -> ConstraintSystem {
        ConstraintSystem::new(BUILTIN_OBSERVATIONS.to_vec())
    }

    #[test]
    fn layout() {
        let system = builtin();
        assert_eq!(system.constraints().len(), 12);
        assert_eq!(system.constraints()[0], Constraint::Positive(0));
        assert_eq!(
            system.constraints()[7],
            Constraint::Meets {
                observation: 1,
                axis: Axis::Z
            }
        );
        let names: Vec<_> = system.unknowns().iter().map(|u| u.to_string()).collect();
        assert_eq!(names, ["x", "y", "z", "vx", "vy", "vz", "t1", "t2", "t3"]);
    }

    #[test]
    fn display() {
        let text = builtin().to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("t1 > 0"));
        assert_eq!(
            lines.next(),
            Some("x + vx * t1 == 237822270988608 + 115 * t1")
        );
        assert_eq!(
            text.lines().nth(11),
            Some("z + vz * t3 == 376069872241870 + -78 * t3")
        );
    }

    #[test]
    fn holds() {
        let system = builtin();
        let mut model = Model {
            origin: Vec3::new(287838354624648, 412952398656862, 148587016955395),
            velocity: Vec3::new(-5, -250, 217),
            times: vec![416800696967, 774801537071, 771128323005],
        };
        assert!(system.holds(&model));

        model.times[0] += 1;
        assert!(!system.holds(&model));

        model.times.pop();
        assert!(!system.holds(&model));
    }

    #[test]
    fn holds_requires_positive_time() {
        let line = WorldLine::new(Vec3::new(5, 5, 5), Vec3::new(1, 1, 1));
        let system = ConstraintSystem::new(vec![line]);
        let model = Model {
            origin: Vec3::new(5, 5, 5),
            velocity: Vec3::new(0, 0, 0),
            times: vec![0],
        };
        assert!(!system.holds(&model));
    }
}
