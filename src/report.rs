//! What gets printed once the solver is done

use std::fmt;

use anyhow::{Context, Result};
use serde::Serialize;

use common::structs::Vec3;

use crate::constraints::Model;
use crate::solver::Outcome;

/// The answer
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub origin: Vec3,
    pub velocity: Vec3,
    pub times: Vec<i64>,
    /// `x + y + z` of the origin
    pub sum: i64,
}

impl Report {
    pub fn from_model(model: &Model) -> Result<Self> {
        Ok(Self {
            origin: model.origin,
            velocity: model.velocity,
            times: model.times.clone(),
            sum: model
                .origin
                .checked_sum()
                .context("sum of the origin coordinates overflows i64")?,
        })
    }
}

/// Two lines: the sum, then the coordinates it was made of
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Vec3 { x, y, z } = self.origin;
        writeln!(f, "{}", self.sum)?;
        write!(f, "answers {x}, {y}, {z} == {}", self.sum)
    }
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum JsonOutcome<'a> {
    Sat(&'a Report),
    Unsat,
}

/// Text rendering of the outcome, `unsat` when there is no model
pub fn render_text(outcome: &Outcome) -> Result<String> {
    match outcome {
        Outcome::Sat(model) => Ok(Report::from_model(model)?.to_string()),
        Outcome::Unsat => Ok("unsat".to_owned()),
    }
}

pub fn render_json(outcome: &Outcome) -> Result<String> {
    let report = outcome.model().map(Report::from_model).transpose()?;
    let json = match &report {
        Some(report) => JsonOutcome::Sat(report),
        None => JsonOutcome::Unsat,
    };
    serde_json::to_string_pretty(&json).context("could not serialize the report")
}
