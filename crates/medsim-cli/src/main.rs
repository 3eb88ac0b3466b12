//! MedSim interactive console
//!
//! Runs one simulation in the terminal. The disease catalog defaults to the
//! bundled `data/diseases.json`; everything else comes from defaults, an
//! optional JSON config file, and flags.
//!
//! Usage:
//!   cargo run -p medsim-cli
//!   cargo run -p medsim-cli -- --seed 42 --single-patient
//!   cargo run -p medsim-cli -- --diseases my_diseases.json --config sim.json --verbose

mod controller;

use std::fs::File;
use std::io::{self, BufReader};
use std::process;

use clap::Parser;
use medsim_core::catalog::{self, Catalog};
use medsim_core::prelude::*;

use controller::Controller;

// ── Bundled catalog (same JSON the tests use) ───────────────────────────
const DISEASES_JSON: &str = include_str!("../../../data/diseases.json");

#[derive(Parser, Debug, Default)]
#[command(name = "medsim")]
#[command(about = "Clinical decision-making simulator")]
struct Options {
    /// Disease catalog JSON (defaults to the bundled catalog)
    #[arg(long)]
    diseases: Option<String>,

    /// Simulation config JSON; overrides --single-patient
    #[arg(long)]
    config: Option<String>,

    /// Fixed random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// One patient per day, no arrivals, time-efficiency scoring
    #[arg(long)]
    single_patient: bool,

    /// Log simulation events at info level
    #[arg(short, long)]
    verbose: bool,
}

fn build_hospital(options: &Options) -> Result<Hospital, String> {
    let diseases = match &options.diseases {
        Some(path) => catalog::load_diseases_from_path(path),
        None => catalog::parse_diseases(DISEASES_JSON),
    }
    .map_err(|e| e.to_string())?;
    let catalog = Catalog::new(diseases, standard_treatments()).map_err(|e| e.to_string())?;

    let mut config = match &options.config {
        Some(path) => {
            let file = File::open(path).map_err(|e| format!("{}: {}", path, e))?;
            SimulationConfig::load(BufReader::new(file)).map_err(|e| e.to_string())?
        }
        None if options.single_patient => SimulationConfig::single_patient(),
        None => SimulationConfig::default(),
    };
    if let Some(seed) = options.seed {
        config.seed = Some(seed);
    }

    Hospital::new(catalog, config).map_err(|e| e.to_string())
}

fn main() {
    let options = Options::parse();

    let default_filter = if options.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut hospital = match build_hospital(&options) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("Failed to start simulation: {}", e);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller = Controller::new(&mut hospital, stdin.lock(), stdout.lock());
    if let Err(e) = controller.run() {
        eprintln!("I/O error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(list: &[&str]) -> Result<Options, clap::Error> {
        Options::try_parse_from(std::iter::once("medsim").chain(list.iter().copied()))
    }

    #[test]
    fn test_parse_flags() {
        let o = parse(&["--seed", "42", "--single-patient", "-v"]).unwrap();
        assert_eq!(o.seed, Some(42));
        assert!(o.single_patient);
        assert!(o.verbose);
        assert!(o.diseases.is_none());
    }

    #[test]
    fn test_parse_paths() {
        let o = parse(&["--diseases", "d.json", "--config", "c.json"]).unwrap();
        assert_eq!(o.diseases.as_deref(), Some("d.json"));
        assert_eq!(o.config.as_deref(), Some("c.json"));
        assert!(!o.verbose);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse(&["--seed", "abc"]).is_err());
        assert!(parse(&["--seed"]).is_err());
        assert!(parse(&["--frobnicate"]).is_err());
    }

    #[test]
    fn test_build_default_hospital() {
        let options = Options {
            seed: Some(1),
            ..Options::default()
        };
        let h = build_hospital(&options).unwrap();
        assert_eq!(h.config().seed, Some(1));
        assert_eq!(h.config().waiting_room_capacity, 4);
    }

    #[test]
    fn test_build_single_patient_hospital() {
        let options = Options {
            single_patient: true,
            ..Options::default()
        };
        let h = build_hospital(&options).unwrap();
        assert_eq!(h.config().waiting_room_capacity, 1);
    }

    #[test]
    fn test_missing_catalog_file_is_fatal() {
        let options = Options {
            diseases: Some("/nonexistent/diseases.json".into()),
            ..Options::default()
        };
        assert!(build_hospital(&options).is_err());
    }
}
