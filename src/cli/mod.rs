pub mod commands;
pub mod error;

use clap::{Parser, Subcommand};
use knee_planner::domain::foundation::Language;

#[derive(Parser)]
#[command(name = "knee-planner")]
#[command(
    author,
    version,
    about = "Decision support for varus knee deformity (PUC vs osteotomy)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one set of measurements
    Analyze {
        /// Medial proximal tibial angle, in degrees
        #[clap(long, allow_hyphen_values = true)]
        mpta: String,

        /// Lateral distal femoral angle, in degrees
        #[clap(long, allow_hyphen_values = true)]
        ldfa: String,

        /// Joint line convergence angle, in degrees
        #[clap(long, allow_hyphen_values = true)]
        jlca: String,

        /// Report language (en, fr)
        #[clap(short, long)]
        lang: Option<Language>,

        /// Print the report as JSON
        #[clap(long, default_value_t = false)]
        json: bool,
    },

    /// Analyze the demo preset (MPTA 84, LDFA 90, JLCA 4)
    Demo {
        /// Report language (en, fr)
        #[clap(short, long)]
        lang: Option<Language>,

        /// Print the report as JSON
        #[clap(long, default_value_t = false)]
        json: bool,
    },

    /// Serve the HTTP API using the environment configuration
    Serve,
}
