//! CLI frontend for the Adad numerology engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "adad",
    about = "Adad — numerology charts, Abjad values and life-path compatibility",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a complete numerology chart
    Chart {
        /// Full name in Latin script
        #[arg(short, long)]
        name: String,

        /// Birth date (YYYY-MM-DD)
        #[arg(short, long)]
        birth: String,

        /// Persian spelling of the name, scored with Abjad values
        #[arg(short, long)]
        persian: Option<String>,

        /// Date used for personal year/month/day (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        today: Option<String>,

        /// Print the chart as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reduce a number to a single digit or master number
    Reduce {
        /// Number to reduce
        number: u32,

        /// Report karmic-debt numbers met on the way
        #[arg(short, long)]
        karmic: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute the Abjad value of Persian text
    Abjad {
        /// Text to score
        text: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score the compatibility of two life-path numbers
    Compat {
        /// First life path
        a: u32,

        /// Second life path
        b: u32,

        /// JSON compatibility matrix replacing the built-in one
        #[arg(short, long)]
        matrix: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show what a number means
    Meaning {
        /// A chart value (1-9, 11, 22, 33) or karmic-debt number (13, 14, 16, 19)
        number: u32,
    },

    /// Print the built-in compatibility matrix as JSON
    Matrix,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Chart {
            name,
            birth,
            persian,
            today,
            json,
        } => commands::chart::run(&name, &birth, persian.as_deref(), today.as_deref(), json),
        Commands::Reduce {
            number,
            karmic,
            json,
        } => commands::reduce::run(number, karmic, json),
        Commands::Abjad { text, json } => commands::abjad::run(&text, json),
        Commands::Compat { a, b, matrix, json } => {
            commands::compat::run(a, b, matrix.as_deref(), json)
        }
        Commands::Meaning { number } => commands::meaning::run(number),
        Commands::Matrix => commands::matrix::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
