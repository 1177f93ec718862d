// ABOUTME: Main entry point for the PDC CLI application
// ABOUTME: Parses arguments, loads config, runs one command and maps failures to exit codes

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::env;
use std::io::Write;

use pdc_cli::cli::{Cli, Commands, ImageCommands};
use pdc_cli::cli_output::CliOutput;
use pdc_cli::completions::generate_completions;
use pdc_cli::config::{ClientOverrides, Config};
use pdc_cli::constants::env_vars;
use pdc_cli::image;
use pdc_cli::output::OutputMode;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match run(cli).await {
        Ok(()) => 0,
        Err(err) => CliOutput::new().report_error(
            &err,
            &mut std::io::stdout().lock(),
            &mut std::io::stderr().lock(),
        ),
    };
    std::process::exit(code);
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Completions { shell } => {
            generate_completions(shell, &mut Cli::command(), &mut out);
        }
        Commands::Image(command) => {
            let config = Config::load()?;
            let server = config.resolve_server(cli.server.as_deref())?;
            log::debug!("Using PDC server {}", server.host);

            let overrides = ClientOverrides {
                token: env::var(env_vars::TOKEN).ok().filter(|t| !t.is_empty()),
                page_size: cli.page_size,
                insecure: cli.insecure,
            };
            let client = server.build_client(&overrides)?;
            let mode = OutputMode::new(cli.json, cli.pretty);

            match command {
                ImageCommands::List {
                    show_sha256,
                    filters,
                } => {
                    image::list_images(&client, &filters.into(), show_sha256, mode, &mut out)
                        .await?;
                }
                ImageCommands::Info { filename, sha256 } => {
                    image::image_info(&client, &filename, sha256.as_deref(), mode, &mut out)
                        .await?;
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}
