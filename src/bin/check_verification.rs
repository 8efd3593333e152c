//! Check an SNA verification and print its status and per-attempt error codes.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use sna_verify::{CheckVerification, Config, RegionAliases, report};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env().context("loading configuration")?;
    let aliases = RegionAliases::default();
    let client = config
        .client_builder(&aliases)
        .build()
        .context("building API client")?;

    let mut out = io::stdout();
    report::render_routing(&mut out, config.routing(&aliases))?;
    report::render_check_header(&mut out, &config.phone_number, config.region.as_deref())?;

    let request = CheckVerification::for_phone(config.phone_number.clone());
    let check = match client
        .check_verification(&config.service_sid, request)
        .await
    {
        Ok(check) => check,
        Err(err) => {
            if err.is_not_found() {
                report::render_not_found_hint(&mut out)?;
            }
            return Err(err).context("checking verification");
        }
    };

    report::render_check(&mut out, &check).context("rendering verification check response")?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
