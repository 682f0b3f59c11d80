//! Command-line front end over the engine and the code catalog.
//!
//! Every subcommand prints the same JSON the HTTP routes answer with.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use engine::{Algorithm, InputMode, WindowParams, parse_input};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "slide-cli", author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate one algorithm at one window position, or run one search.
    Step {
        /// Comma-separated integers, or a string in string mode.
        #[arg(allow_hyphen_values = true)]
        input: String,

        #[arg(short, long, default_value = "sum")]
        algorithm: String,

        #[arg(long, default_value = "array")]
        mode: String,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        start: i64,

        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        size: i64,

        #[arg(long, allow_negative_numbers = true)]
        target: Option<i64>,

        #[arg(long, allow_negative_numbers = true)]
        bound: Option<i64>,

        #[arg(long, allow_negative_numbers = true)]
        threshold: Option<f64>,

        #[arg(long)]
        pattern: Option<String>,
    },

    /// Slide a fixed window across every position.
    Slide {
        #[arg(allow_hyphen_values = true)]
        input: String,

        #[arg(short, long, default_value = "sum")]
        algorithm: String,

        #[arg(long, default_value = "array")]
        mode: String,

        #[arg(long, allow_negative_numbers = true)]
        size: Option<i64>,

        #[arg(long)]
        pattern: Option<String>,
    },

    /// Print example code for an algorithm.
    Code {
        #[arg(short, long, default_value = "sum")]
        algorithm: String,

        #[arg(long = "type", default_value = "fixed")]
        window_type: String,

        #[arg(long, default_value_t = catalog::DEFAULT_WINDOW_SIZE)]
        size: u32,

        #[arg(short, long, default_value = "python")]
        language: String,
    },
}

/// Runs one subcommand and renders its answer as pretty JSON.
pub fn run(command: Command) -> Result<String> {
    debug!("Running {command:?}");

    let rendered = match command {
        Command::Step {
            input,
            algorithm,
            mode,
            start,
            size,
            target,
            bound,
            threshold,
            pattern,
        } => {
            let elements = parse_input(&input, mode.parse::<InputMode>()?)?;
            let algorithm: Algorithm = algorithm.parse()?;
            let params = WindowParams {
                start: Some(start),
                size: Some(size),
                target,
                bound,
                threshold,
                pattern,
            };

            serde_json::to_string_pretty(&engine::evaluate(&elements, algorithm, &params)?)
        }
        Command::Slide {
            input,
            algorithm,
            mode,
            size,
            pattern,
        } => {
            let elements = parse_input(&input, mode.parse::<InputMode>()?)?;
            let algorithm: Algorithm = algorithm.parse()?;
            let params = WindowParams {
                size,
                pattern,
                ..WindowParams::default()
            };

            serde_json::to_string_pretty(&engine::slide(&elements, algorithm, &params)?)
        }
        Command::Code {
            algorithm,
            window_type,
            size,
            language,
        } => {
            let snippet = catalog::lookup(&language, &window_type, &algorithm, size)?;

            return Ok(snippet.code);
        }
    };

    rendered.context("Failed to render result")
}
