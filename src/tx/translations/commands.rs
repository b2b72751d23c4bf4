//! Translation command handlers

use log::debug;

use crate::cli::{Cli, Command};
use crate::output::output_raw;
use crate::tx::ids::{LocaleCode, ResourceSlug};
use crate::tx::TxClient;

/// Run the translation fetch command
pub async fn run_translation_command(
    client: &TxClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Translation(args) = &cli.command else {
        unreachable!()
    };

    debug!(
        "Fetching translation for resource '{}', locale '{}'",
        args.resource, args.locale
    );

    let mut query: Vec<(&str, &str)> = Vec::new();
    if let Some(mode) = &args.mode {
        query.push(("mode", mode.as_str()));
    }

    let translation = client
        .translation(
            &ResourceSlug::from(args.resource.as_str()),
            &LocaleCode::from(args.locale.as_str()),
            &query,
        )
        .await?;

    if args.content_only {
        println!("{}", translation["content"].as_str().unwrap_or_default());
    } else {
        output_raw(&translation);
    }
    Ok(())
}
