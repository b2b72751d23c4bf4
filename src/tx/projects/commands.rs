//! Project command handlers

use log::debug;

use crate::cli::{Cli, Command};
use crate::output::output_raw;
use crate::tx::TxClient;

/// Run the project details command
pub async fn run_project_command(
    client: &TxClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Project(args) = &cli.command else {
        unreachable!()
    };

    debug!("Fetching details for project '{}'", client.project());
    let project = client.project_raw(args.details).await?;
    output_raw(&project);
    Ok(())
}
