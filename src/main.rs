//! This program finds the one throw of a rock that hits every hailstone.
//!
//! Run:
//! ```bash
//! $ hailstorm -h
//! ```
//! to see which parameters of the implementation can be tweaked.

mod params;

use std::io::{IsTerminal, Write};

use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;
use yansi::Paint;

use common::hail_data::Data;
use hailstorm::collisions::count_crossings;
use hailstorm::constraints::ConstraintSystem;
use hailstorm::report::{render_json, render_text};
use hailstorm::solver::{self, Outcome};
use params::Params;

fn main() {
    // Parse arguments
    let params = Params::parse();
    init_logger(params.log_level);

    if !std::io::stdout().is_terminal() {
        Paint::disable();
    }

    if let Err(e) = run(&params) {
        if std::io::stderr().is_terminal() {
            Paint::enable();
        } else {
            Paint::disable();
        }
        eprintln!("{} {e:#}", Paint::red("error:").bold());
        std::process::exit(1);
    }
}

fn init_logger(level: LevelFilter) {
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn run(params: &Params) -> Result<()> {
    let data = match &params.input {
        Some(path) => Data::read_from_file(path)?,
        None => Data::builtin(),
    };
    log::info!(
        "loaded {} hailstones from {}",
        data.hailstones.len(),
        data.name.as_deref().unwrap_or("<unnamed>")
    );
    for line in &data.hailstones {
        log::debug!("hailstone {line}");
    }

    if params.part == 1 {
        let mut area = data.test_area.unwrap_or_default();
        area.min = params.min.unwrap_or(area.min);
        area.max = params.max.unwrap_or(area.max);
        log::info!("test area {area}");

        let count = count_crossings(&data.hailstones, area);
        if params.json {
            println!("{}", serde_json::json!({ "crossings": count, "test_area": area }));
        } else {
            println!("{count}");
        }
        return Ok(());
    }

    if params.dump_constraints {
        print!("{}", ConstraintSystem::new(data.hailstones.clone()));
    }

    let backend = params.backend.create()?;
    let outcome = solver::solve(backend.as_ref(), &data.hailstones)?;

    if params.json {
        println!("{}", render_json(&outcome)?);
    } else if outcome == Outcome::Unsat {
        println!("{}", Paint::red(render_text(&outcome)?));
    } else {
        println!("{}", render_text(&outcome)?);
    }

    Ok(())
}
