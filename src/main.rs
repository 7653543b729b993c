// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use nocodb_fixtures::utils::logging::{format_error, format_step, format_warning};
use nocodb_fixtures::{BatchConverter, Config, ConsoleReporter, IconGenerator};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "nocodb_fixtures")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(
    about = "Convert CSV exports into NocoDB list-response JSON and write placeholder icons",
    long_about = None
)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Defaults to `convert` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every CSV file in the input directory to JSON
    Convert {
        #[arg(short, long, value_name = "DIR")]
        input: Option<PathBuf>,

        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Write placeholder PNG icons at the configured sizes
    Icons {
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    nocodb_fixtures::utils::logging::init_logger(cli.color, cli.verbose);

    // A broken config never changes the exit status; defaults are used instead.
    info!("Loading configuration from: {}", cli.config.display());
    let config = Config::load_or_default(&cli.config);

    match cli.command.unwrap_or(Commands::Convert {
        input: None,
        output: None,
    }) {
        Commands::Convert { input, output } => cmd_convert(&config, input, output),
        Commands::Icons { output } => cmd_icons(&config, output)?,
    }

    Ok(())
}

// Never fails: per-file problems are reported and the process still exits 0.
fn cmd_convert(config: &Config, input: Option<PathBuf>, output: Option<PathBuf>) {
    let input = input.unwrap_or_else(|| config.paths.input_dir.clone());
    let output = output.unwrap_or_else(|| config.paths.output_dir.clone());

    info!(
        "Converting *.{} from {} into {}",
        config.paths.extension,
        input.display(),
        output.display()
    );

    let batch = BatchConverter::new(config).with_dirs(input, output);
    let mut reporter = ConsoleReporter::stdout();

    match batch.run_with(&mut reporter) {
        Ok(report) => {
            let stats = report.stats();
            info!(
                "Batch finished in {} ms: {} converted, {} failed ({:.1}% success, {:.0} records/s)",
                stats.duration_ms,
                stats.files_converted,
                stats.files_failed,
                stats.success_rate(),
                stats.records_per_second()
            );
        }
        Err(e) => {
            println!("{}", format_error(&format!("Conversion aborted: {}", e)));
        }
    }
}

fn cmd_icons(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let mut generator = IconGenerator::new(config.icons.clone());
    if let Some(dir) = output {
        generator = generator.with_assets_dir(dir);
    }

    info!("Writing icons to {}", generator.assets_dir().display());

    let paths = generator
        .generate()
        .context("Failed to write placeholder icons")?;

    for (idx, path) in paths.iter().enumerate() {
        println!(
            "{}",
            format_step(idx + 1, paths.len(), &format!("Created {}", path.display()))
        );
    }

    println!(
        "{}",
        format_warning("Basic icon files created. Replace with actual icons for production.")
    );

    Ok(())
}
