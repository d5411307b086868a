//! Exact decision procedure for the rock-throw constraints.
//!
//! For every observation `i` the rock satisfies `(p - p_i) × (v - v_i) = 0`.
//! The only non-linear term is `p × v`, shared by all observations, so the
//! difference between observation `0` and observation `j` gives three
//! equations linear in `(p, v)`:
//!
//! ```text
//! p × (v_j - v_0) + (p_j - p_0) × v = p_j × v_j - p_0 × v_0
//! ```
//!
//! Every observation pair is stacked into one overdetermined system and reduced
//! with fraction-free (Bareiss) elimination. Once `(p, v)` is known the times
//! follow from each observation directly.

use anyhow::{bail, ensure, Context, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use common::maths::{meeting_time, Meeting};
use common::structs::{Vec3, WorldLine};

use super::{Backend, Outcome};
use crate::constraints::{ConstraintSystem, Model};

/// Number of unknowns in the linear system: `x, y, z, vx, vy, vz`
const N: usize = 6;

/// A row of the augmented matrix: `N` coefficients followed by the right-hand side
type Row = Vec<BigInt>;

#[derive(Debug, Default, Clone, Copy)]
pub struct Elimination;

impl Backend for Elimination {
    fn name(&self) -> &'static str {
        "elimination"
    }

    fn check(&self, system: &ConstraintSystem) -> Result<Outcome> {
        let observations = system.observations();
        ensure!(
            observations.len() >= 3,
            "at least three observations are needed to pin the rock down, got {}",
            observations.len()
        );

        let rows = linear_rows(observations);
        log::debug!("{} linear equations over {N} unknowns", rows.len());

        let Some(solution) = solve_integer(rows)? else {
            return Ok(Outcome::Unsat);
        };

        let origin = Vec3::new(solution[0], solution[1], solution[2]);
        let velocity = Vec3::new(solution[3], solution[4], solution[5]);
        let rock = WorldLine::new(origin, velocity);
        log::debug!("candidate rock: {rock}");

        let mut times = Vec::with_capacity(observations.len());
        for (i, &hail) in observations.iter().enumerate() {
            match meeting_time(rock, hail) {
                Meeting::At(t) if t > 0 => times.push(
                    i64::try_from(t)
                        .with_context(|| format!("meeting time {t} does not fit into i64"))?,
                ),
                Meeting::Always => times.push(1),
                Meeting::At(t) => {
                    log::debug!("observation {} is met at t = {t}", i + 1);
                    return Ok(Outcome::Unsat);
                }
                Meeting::Never => {
                    log::debug!("observation {} is never met at an integer time", i + 1);
                    return Ok(Outcome::Unsat);
                }
            }
        }

        let model = Model {
            origin,
            velocity,
            times,
        };
        ensure!(
            system.holds(&model),
            "elimination produced a model that violates the constraints"
        );
        Ok(Outcome::Sat(model))
    }
}

/// Three equations per observation pair `(0, j)`, see the module documentation
fn linear_rows(observations: &[WorldLine]) -> Vec<Row> {
    let first = observations[0];
    let mut rows = Vec::with_capacity((observations.len() - 1) * 3);

    for &other in &observations[1..] {
        let [dpx, dpy, dpz] = other.position.sub_big(first.position);
        let [dvx, dvy, dvz] = other.velocity.sub_big(first.velocity);
        let a = other.position.cross_big(other.velocity);
        let b = first.position.cross_big(first.velocity);
        let zero = BigInt::zero;

        // Coefficients of (px, py, pz, vx, vy, vz), then the right-hand side.
        let coeffs: [[BigInt; N]; 3] = [
            [zero(), dvz.clone(), -&dvy, zero(), -&dpz, dpy.clone()],
            [-&dvz, zero(), dvx.clone(), dpz, zero(), -&dpx],
            [dvy, -dvx, zero(), -dpy, dpx, zero()],
        ];
        for ((coeffs, a), b) in coeffs.into_iter().zip(a).zip(b) {
            let mut row: Row = coeffs.into();
            row.push(a - b);
            rows.push(row);
        }
    }

    rows
}

/// Solve the overdetermined system `rows` over the integers.
///
/// `Ok(None)` when the system is inconsistent or its unique solution is not
/// integral. Errors if the system has rank below `N`.
fn solve_integer(mut rows: Vec<Row>) -> Result<Option<[i64; N]>> {
    let m = rows.len();
    let mut prev = BigInt::from(1);

    for k in 0..N {
        let Some(pivot) = (k..m).find(|&r| !rows[r][k].is_zero()) else {
            bail!("the observations do not determine the rock (rank {k} < {N})");
        };
        rows.swap(k, pivot);

        let (top, bottom) = rows.split_at_mut(k + 1);
        let pivot_row = &top[k];
        for row in bottom.iter_mut() {
            for j in k + 1..=N {
                // Bareiss: the division is always exact.
                row[j] = (&pivot_row[k] * &row[j] - &row[k] * &pivot_row[j]) / &prev;
            }
            row[k] = BigInt::zero();
        }
        prev = rows[k][k].clone();
        log::trace!("pivot {k}: {prev}");
    }

    if rows[N..].iter().any(|row| !row[N].is_zero()) {
        log::debug!("linear system is inconsistent");
        return Ok(None);
    }

    let mut solution = [0i64; N];
    let mut exact = vec![BigInt::zero(); N];
    for k in (0..N).rev() {
        let mut rhs = rows[k][N].clone();
        for j in k + 1..N {
            rhs -= &rows[k][j] * &exact[j];
        }
        let (q, r) = rhs.div_rem(&rows[k][k]);
        if !r.is_zero() {
            log::debug!("linear solution is not integral");
            return Ok(None);
        }
        solution[k] = q
            .to_i64()
            .with_context(|| format!("solution component {q} does not fit into i64"))?;
        exact[k] = q;
    }

    Ok(Some(solution))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::constants::BUILTIN_OBSERVATIONS;
    use common::hail_data::parse_puzzle_input;

    const EXAMPLE: &str = "\
19, 13, 30 @ -2,  1, -2
18, 19, 22 @ -1, -1, -2
20, 25, 34 @ -2, -2, -4
12, 31, 28 @ -1, -2, -1
20, 19, 15 @  1, -5, -3
";

    fn check(observations: Vec<WorldLine>) -> Result<Outcome> {
        Elimination.check(&ConstraintSystem::new(observations))
    }

    #[test]
    fn builtin_observations() {
        let outcome = check(BUILTIN_OBSERVATIONS.to_vec()).unwrap();
        let model = outcome.model().unwrap();
        assert_eq!(
            model.origin,
            Vec3::new(287838354624648, 412952398656862, 148587016955395)
        );
        assert_eq!(model.velocity, Vec3::new(-5, -250, 217));
        assert_eq!(model.times, [416800696967, 774801537071, 771128323005]);
    }

    #[test]
    fn example() {
        let outcome = check(parse_puzzle_input(EXAMPLE).unwrap()).unwrap();
        let model = outcome.model().unwrap();
        assert_eq!(model.origin, Vec3::new(24, 13, 10));
        assert_eq!(model.velocity, Vec3::new(-3, 1, 2));
        assert_eq!(model.times, [5, 3, 4, 6, 1]);
    }

    #[test]
    fn too_few_observations() {
        let lines = parse_puzzle_input(EXAMPLE).unwrap();
        assert!(check(lines[..2].to_vec()).is_err());
    }

    #[test]
    fn negative_time_is_unsat() {
        let rock = WorldLine::new(Vec3::new(24, 13, 10), Vec3::new(-3, 1, 2));
        let hail = |t: i64, v: Vec3| {
            let at = rock.position_at(t).unwrap();
            WorldLine::new(at - v * t, v)
        };
        let lines = vec![
            hail(5, Vec3::new(-2, 1, -2)),
            hail(3, Vec3::new(-1, -1, -2)),
            hail(-4, Vec3::new(-2, -2, -4)),
        ];
        assert_eq!(check(lines).unwrap(), Outcome::Unsat);
    }

    #[test]
    fn zero_time_is_unsat() {
        let rock = WorldLine::new(Vec3::new(24, 13, 10), Vec3::new(-3, 1, 2));
        let hail = |t: i64, v: Vec3| {
            let at = rock.position_at(t).unwrap();
            WorldLine::new(at - v * t, v)
        };
        let lines = vec![
            hail(5, Vec3::new(-2, 1, -2)),
            hail(3, Vec3::new(-1, -1, -2)),
            hail(0, Vec3::new(-2, -2, -4)),
        ];
        assert_eq!(check(lines).unwrap(), Outcome::Unsat);
    }

    #[test]
    fn stones_at_opposite_ends_of_i64() {
        const FAR: i64 = -9_000_000_000_000_000_000;
        let rock = WorldLine::new(
            Vec3::new(FAR, FAR, FAR),
            Vec3::new(1_000_000_000, 1_000_000_000, 1_000_000_000),
        );
        let hail = |t: i64, v: Vec3| {
            let at = rock.position_at(t).unwrap();
            WorldLine::new(at - v * t, v)
        };
        let lines = vec![
            // Sits at 8e18 on every axis.
            hail(17_000_000_000, Vec3::new(0, 0, 0)),
            hail(1, Vec3::new(1, 2, 3)),
            hail(2, Vec3::new(3, -2, 1)),
            hail(3, Vec3::new(-2, 5, -1)),
        ];
        let near = 8_000_000_000_000_000_000;
        assert_eq!(lines[0].position, Vec3::new(near, near, near));

        let outcome = check(lines).unwrap();
        let model = outcome.model().unwrap();
        assert_eq!(model.origin, rock.position);
        assert_eq!(model.velocity, rock.velocity);
        assert_eq!(model.times, [17_000_000_000, 1, 2, 3]);
    }

    #[test]
    fn meeting_time_beyond_i64_is_an_error() {
        const FAR: i64 = -9_000_000_000_000_000_000;
        const NEAR: i64 = 1_000_000_000_000_000_000;
        let rock = Vec3::new(FAR, FAR, FAR);
        let stone = |position: Vec3, v: Vec3| WorldLine::new(position, v);
        let small = |t: i64, v: Vec3| stone(rock - v * t, v);
        let lines = vec![
            // Met at t = 1e19, past i64::MAX.
            stone(Vec3::new(NEAR, NEAR, NEAR), Vec3::new(-1, -1, -1)),
            small(5, Vec3::new(1, 2, 3)),
            small(7, Vec3::new(3, -2, 1)),
            small(11, Vec3::new(-2, 5, -1)),
        ];
        let err = check(lines).unwrap_err();
        assert!(err.to_string().contains("does not fit into i64"));
    }

    #[test]
    fn inconsistent_is_unsat() {
        let mut lines = parse_puzzle_input(EXAMPLE).unwrap();
        lines[4].position.z += 1;
        assert_eq!(check(lines).unwrap(), Outcome::Unsat);
    }

    #[test]
    fn parallel_hail_is_underdetermined() {
        let v = Vec3::new(1, 2, 3);
        let lines = vec![
            WorldLine::new(Vec3::new(0, 0, 0), v),
            WorldLine::new(Vec3::new(10, 0, 0), v),
            WorldLine::new(Vec3::new(0, 10, 0), v),
        ];
        assert!(check(lines).is_err());
    }
}
