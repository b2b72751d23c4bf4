//! Resource command handlers

use log::debug;

use crate::cli::{Cli, Command};
use crate::output::output_resources;
use crate::tx::TxClient;

/// Run the resources list command
pub async fn run_resources_command(
    client: &TxClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Resources(args) = &cli.command else {
        unreachable!()
    };

    debug!("Fetching resources for project '{}'", client.project());
    let resources = client.resources().await?;
    output_resources(&resources, &args.output, cli.no_header);
    Ok(())
}
