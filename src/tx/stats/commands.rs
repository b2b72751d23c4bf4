//! Statistics command handlers

use log::debug;

use crate::cli::{Cli, Command};
use crate::output::{
    output_locale_details, output_locale_stats, output_project_stats, output_raw,
    output_resource_stats,
};
use crate::tx::ids::{LocaleCode, ResourceSlug};
use crate::tx::TxClient;
use crate::ui::{clear_spinner, create_spinner, finish_spinner};

/// Run the stats command
///
/// Dispatches on the argument combination: whole project, one resource, one
/// locale across resources, or one resource scoped to one locale.
pub async fn run_stats_command(
    client: &TxClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Stats(args) = &cli.command else {
        unreachable!()
    };

    match (&args.resource, &args.locale) {
        (Some(resource), Some(locale)) => {
            debug!("Fetching stats for resource '{}', locale '{}'", resource, locale);
            let spinner = create_spinner("Fetching statistics...", cli.batch);
            match client
                .resource_locale_stats(
                    &ResourceSlug::from(resource.as_str()),
                    &LocaleCode::from(locale.as_str()),
                )
                .await
            {
                Ok(stats) => {
                    finish_spinner(spinner, "Done");
                    output_raw(&stats);
                    Ok(())
                }
                Err(e) => {
                    clear_spinner(spinner);
                    Err(e.into())
                }
            }
        }
        (Some(resource), None) => {
            debug!("Fetching stats for resource '{}'", resource);
            let stats = client
                .resource_stats(&ResourceSlug::from(resource.as_str()))
                .await?;
            output_resource_stats(&stats, &args.output, cli.no_header);
            Ok(())
        }
        (None, Some(locale)) => {
            debug!("Fetching stats for locale '{}' across all resources", locale);
            let spinner = create_spinner("Collecting per-resource statistics...", cli.batch);
            match client.locale_stats(&LocaleCode::from(locale.as_str())).await {
                Ok(stats) => {
                    finish_spinner(spinner, "Done");
                    output_locale_stats(&stats, &args.output, cli.no_header);
                    Ok(())
                }
                Err(e) => {
                    clear_spinner(spinner);
                    Err(e.into())
                }
            }
        }
        (None, None) => {
            debug!("Fetching stats for every resource in '{}'", client.project());
            let spinner = create_spinner("Collecting per-resource statistics...", cli.batch);
            match client.project_stats().await {
                Ok(stats) => {
                    finish_spinner(spinner, "Done");
                    output_project_stats(&stats, &args.output, cli.no_header);
                    Ok(())
                }
                Err(e) => {
                    clear_spinner(spinner);
                    Err(e.into())
                }
            }
        }
    }
}

/// Run the locale detail command
pub async fn run_locale_command(
    client: &TxClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Locale(args) = &cli.command else {
        unreachable!()
    };

    debug!("Fetching locale detail for '{}'", args.code);
    let spinner = create_spinner("Fetching locale detail...", cli.batch);

    match client
        .locale_details(&LocaleCode::from(args.code.as_str()))
        .await
    {
        Ok(details) => {
            finish_spinner(spinner, "Done");
            output_locale_details(&details, &args.output, cli.no_header);
            Ok(())
        }
        Err(e) => {
            clear_spinner(spinner);
            Err(e.into())
        }
    }
}
