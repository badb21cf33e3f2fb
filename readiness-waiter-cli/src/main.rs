use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod wait_table;

use wait_table::WaitTableArgs;

/// Wait for remote resources to become ready.
#[derive(Parser, Debug)]
#[command(name = "readiness-waiter", version, about)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Poll a DynamoDB table until it reports the target status
    WaitTable(WaitTableArgs),
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::WaitTable(args) => wait_table::run(args).await,
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(wait_table::EXIT_ERROR)
        }
    }
}
