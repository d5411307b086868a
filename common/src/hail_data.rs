use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::BUILTIN_OBSERVATIONS;
use crate::structs::*;

/// A set of observed hailstones, as stored in a TOML file.
///
/// ```toml
/// name = "example"
///
/// [test_area]
/// min = 7
/// max = 27
///
/// [[hailstone]]
/// position = [19, 13, 30]
/// velocity = [-2, 1, -2]
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Data {
    pub name: Option<String>,
    pub test_area: Option<Area>,
    #[serde(rename = "hailstone", default)]
    pub hailstones: Vec<WorldLine>,
}

impl Data {
    /// The three observations used when nothing else is given
    pub fn builtin() -> Self {
        Self {
            name: Some("builtin".to_owned()),
            test_area: None,
            hailstones: BUILTIN_OBSERVATIONS.to_vec(),
        }
    }

    /// Read either a TOML data file (`*.toml`) or plain puzzle input
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;

        let mut retval = if path.extension().map_or(false, |ext| ext == "toml") {
            toml::from_str(&contents)
                .with_context(|| format!("could not deserialize {}", path.display()))?
        } else {
            Self {
                name: None,
                test_area: None,
                hailstones: parse_puzzle_input(&contents)
                    .with_context(|| format!("could not parse {}", path.display()))?,
            }
        };

        if retval.name.is_none() {
            retval.name = path
                .file_stem()
                .map(|file_name| file_name.to_string_lossy().into_owned());
        }

        Ok(retval)
    }
}

/// Parse one `px, py, pz @ vx, vy, vz` line per hailstone. Blank lines are skipped.
pub fn parse_puzzle_input(input: &str) -> Result<Vec<WorldLine>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| line.parse::<WorldLine>().with_context(|| format!("line {}", i + 1)))
        .collect()
}
