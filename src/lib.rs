//! This program finds the one throw of a rock that hits every hailstone,
//! given only the hailstones' world lines.
//!
//! The problem is stated as a system of integer constraints (see
//! [`constraints`]) and decided by a [`solver::Backend`]. Part one of the
//! puzzle, counting crossings of hailstone paths, lives in [`collisions`].

pub mod collisions;
pub mod constraints;
pub mod report;
pub mod solver;
