mod estimate;
mod session;
mod vehicles;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    cli::{estimate::EstimateArgs, session::SessionArgs, vehicles::VehiclesArgs},
    core::catalog::Catalog,
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Vehicle catalog to use instead of the built-in one, either JSON or TOML.
    #[clap(long = "catalog", env = "EV_CATALOG_PATH", global = true)]
    pub catalog_path: Option<PathBuf>,

    /// Minimal level of the log messages written to stderr.
    #[clap(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn run(self) -> Result {
        let catalog = Catalog::load(self.catalog_path.as_deref())?;
        match self.command {
            Command::Estimate(args) => args.run(&catalog),
            Command::Vehicles(args) => args.run(&catalog),
            Command::Session(args) => args.run(&catalog),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate the charging cost once and exit.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// List the vehicles from the catalog.
    #[clap(name = "vehicles")]
    Vehicles(VehiclesArgs),

    /// Interactive calculator, recomputing the estimate after every change.
    #[clap(name = "session")]
    Session(SessionArgs),
}
