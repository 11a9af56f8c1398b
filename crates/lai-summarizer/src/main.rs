// lai-summarizer/crates/lai-summarizer/src/main.rs

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use lai_summarizer::{
    cli::{self, Cli, Command},
    config::Config,
    run_server, telemetry,
};

#[cfg(feature = "cli")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            telemetry::init_tracing();
            let cfg = Config::from_env()?;
            run_server(cfg).await
        }
        Command::Summarize(args) => {
            telemetry::init_tracing_with_default("warn");
            let cfg = Config::from_env()?;
            let output = cli::run_summarize(&args, &cfg)?;
            println!("{}", output);
            Ok(())
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    println!("CLI feature not enabled. Enable with --features cli");
}
