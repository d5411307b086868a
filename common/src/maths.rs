//! Some useful mathematical functions

use crate::structs::*;

/// `num / den` if it divides evenly
pub fn div_exact(num: i128, den: i128) -> Option<i128> {
    if den == 0 || num % den != 0 {
        None
    } else {
        Some(num / den)
    }
}

/// When two world lines occupy the same point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meeting {
    /// Not at any integer time
    Never,
    /// The lines coincide, any time will do
    Always,
    /// Exactly at this time. Not necessarily within `i64`.
    At(i128),
}

/// The integer time `t` at which `a` and `b` occupy the same point.
///
/// On an axis where both velocities agree the positions have to agree too, and
/// that axis says nothing about `t`.
pub fn meeting_time(a: WorldLine, b: WorldLine) -> Meeting {
    let mut time: Option<i128> = None;
    for axis in Axis::ALL {
        // Differences of two i64 fit into i128, as does their quotient.
        let dp = b.position.get(axis) as i128 - a.position.get(axis) as i128;
        let dv = a.velocity.get(axis) as i128 - b.velocity.get(axis) as i128;
        if dv == 0 {
            if dp != 0 {
                return Meeting::Never;
            }
            continue;
        }
        let Some(t) = div_exact(dp, dv) else {
            return Meeting::Never;
        };
        match time {
            Some(prev) if prev != t => return Meeting::Never,
            _ => time = Some(t),
        }
    }
    time.map_or(Meeting::Always, Meeting::At)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_division() {
        assert_eq!(div_exact(12, -4), Some(-3));
        assert_eq!(div_exact(13, 4), None);
        assert_eq!(div_exact(1, 0), None);
    }

    #[test]
    fn meets_at_integer_time() {
        let rock = WorldLine::new(Vec3::new(24, 13, 10), Vec3::new(-3, 1, 2));
        let hail = WorldLine::new(Vec3::new(19, 13, 30), Vec3::new(-2, 1, -2));
        assert_eq!(meeting_time(rock, hail), Meeting::At(5));
    }

    #[test]
    fn shared_velocity_axis() {
        let rock = WorldLine::new(Vec3::new(0, 0, 0), Vec3::new(1, 2, 3));
        let hail = WorldLine::new(Vec3::new(0, 2, 4), Vec3::new(1, 1, 1));
        assert_eq!(meeting_time(rock, hail), Meeting::At(2));

        let hail = WorldLine::new(Vec3::new(1, 2, 4), Vec3::new(1, 1, 1));
        assert_eq!(meeting_time(rock, hail), Meeting::Never);
    }

    #[test]
    fn disagreeing_axes() {
        let rock = WorldLine::new(Vec3::new(0, 0, 0), Vec3::new(1, 1, 1));
        let hail = WorldLine::new(Vec3::new(2, 3, 2), Vec3::new(0, 0, 0));
        assert_eq!(meeting_time(rock, hail), Meeting::Never);
    }

    #[test]
    fn identical_lines() {
        let l = WorldLine::new(Vec3::new(1, 2, 3), Vec3::new(4, 5, 6));
        assert_eq!(meeting_time(l, l), Meeting::Always);
    }

    #[test]
    fn time_beyond_i64() {
        let rock = WorldLine::new(Vec3::new(i64::MIN, 0, 0), Vec3::new(1, 0, 0));
        let hail = WorldLine::new(Vec3::new(i64::MAX, 0, 0), Vec3::new(0, 0, 0));
        assert_eq!(meeting_time(rock, hail), Meeting::At(u64::MAX as i128));
    }
}
