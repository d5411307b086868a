use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use super::{Area, Vec3};

/// A point moving with constant velocity: `position + velocity * t`
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WorldLine {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// The point where two paths cross when projected onto the XY plane.
///
/// Every quantity is kept as a numerator over the shared positive
/// denominator `den`, so nothing is rounded or overflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossingXY {
    pub x_num: BigInt,
    pub y_num: BigInt,
    /// Time at which the first line reaches the crossing, times `den`
    pub t1_num: BigInt,
    /// Time at which the second line reaches the crossing, times `den`
    pub t2_num: BigInt,
    pub den: BigInt,
}

impl WorldLine {
    pub const fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// Position at time `t`, `None` on overflow
    pub fn position_at(self, t: i64) -> Option<Vec3> {
        self.position.checked_add(self.velocity.checked_mul(t)?)
    }

    /// Intersect the XY projections of `self` and `other`.
    ///
    /// Returns `None` for parallel paths (including coincident ones).
    pub fn crossing_xy(self, other: Self) -> Option<CrossingXY> {
        let [p1x, p1y, _] = self.position.big();
        let [v1x, v1y, _] = self.velocity.big();
        let [v2x, v2y, _] = other.velocity.big();
        let [dx, dy, _] = other.position.sub_big(self.position);

        let mut den = &v1x * &v2y - &v1y * &v2x;
        if den.is_zero() {
            return None;
        }

        let mut t1_num = &dx * &v2y - &dy * &v2x;
        let mut t2_num = &dx * &v1y - &dy * &v1x;

        if den.is_negative() {
            den = -den;
            t1_num = -t1_num;
            t2_num = -t2_num;
        }

        Some(CrossingXY {
            x_num: p1x * &den + v1x * &t1_num,
            y_num: p1y * &den + v1y * &t1_num,
            t1_num,
            t2_num,
            den,
        })
    }
}

impl CrossingXY {
    /// Both lines reach the crossing at `t >= 0`
    pub fn in_future(&self) -> bool {
        !self.t1_num.is_negative() && !self.t2_num.is_negative()
    }

    pub fn within(&self, area: Area) -> bool {
        let range = BigInt::from(area.min) * &self.den..BigInt::from(area.max) * &self.den;
        range.contains(&self.x_num) && range.contains(&self.y_num)
    }

    /// Approximate coordinates, for logging only
    pub fn approx(&self) -> (f64, f64) {
        let approx = |num: &BigInt| {
            let den = self.den.to_f64().unwrap_or(f64::NAN);
            num.to_f64().unwrap_or(f64::NAN) / den
        };
        (approx(&self.x_num), approx(&self.y_num))
    }
}

impl fmt::Display for WorldLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.position, self.velocity)
    }
}

impl FromStr for WorldLine {
    type Err = anyhow::Error;

    /// Parse `px, py, pz @ vx, vy, vz`. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let (position, velocity) = s.split_once('@').context("missing '@' separator")?;
        Ok(Self {
            position: parse_triple(position).context("bad position")?,
            velocity: parse_triple(velocity).context("bad velocity")?,
        })
    }
}

fn parse_triple(s: &str) -> Result<Vec3> {
    let mut parts = s.split(',').map(|part| {
        let part = part.trim();
        part.parse::<i64>()
            .with_context(|| format!("'{part}' is not an integer"))
    });
    let mut next = || parts.next().context("expected three components").and_then(|x| x);
    let v = Vec3::new(next()?, next()?, next()?);
    anyhow::ensure!(parts.next().is_none(), "expected three components");
    Ok(v)
}
