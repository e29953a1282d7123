use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the layout to a TOML file (the default when no command is given)
    Generate(cmd::generate::GenerateArgs),
    /// Print the computed layout without writing anything
    Report(cmd::report::ReportArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("⌨️  Building keyboard layout...");

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Generate(cmd::generate::GenerateArgs::default()));

    let result = match command {
        Commands::Generate(args) => cmd::generate::run(args),
        Commands::Report(args) => cmd::report::run(args),
    };

    if let Err(e) = result {
        error!("❌ FATAL: {}", e);
        process::exit(1);
    }
}
