use std::fmt;
use std::ops;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use super::Axis;

/// Integer vector in space.
///
/// Serialized as `[x, y, z]`.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(from = "[i64; 3]")]
#[serde(into = "[i64; 3]")]
pub struct Vec3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Vec3 {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    pub fn get(self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Components as big integers, so products and differences never overflow
    pub fn big(self) -> [BigInt; 3] {
        [self.x.into(), self.y.into(), self.z.into()]
    }

    /// `self - other` without overflow
    pub fn sub_big(self, other: Self) -> [BigInt; 3] {
        let [ax, ay, az] = self.big();
        let [bx, by, bz] = other.big();
        [ax - bx, ay - by, az - bz]
    }

    pub fn cross_big(self, other: Self) -> [BigInt; 3] {
        let [ax, ay, az] = self.big();
        let [bx, by, bz] = other.big();
        [
            &ay * &bz - &az * &by,
            &az * &bx - &ax * &bz,
            &ax * &by - &ay * &bx,
        ]
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(other.x)?,
            y: self.y.checked_add(other.y)?,
            z: self.z.checked_add(other.z)?,
        })
    }

    pub fn checked_mul(self, k: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_mul(k)?,
            y: self.y.checked_mul(k)?,
            z: self.z.checked_mul(k)?,
        })
    }

    /// Sum of the components, `None` on overflow
    pub fn checked_sum(self) -> Option<i64> {
        self.x.checked_add(self.y)?.checked_add(self.z)
    }
}

impl From<[i64; 3]> for Vec3 {
    fn from([x, y, z]: [i64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vec3> for [i64; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

impl ops::Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl ops::Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl ops::Mul<i64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl ops::Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
