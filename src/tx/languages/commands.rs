//! Language command handlers

use log::debug;

use crate::cli::{Cli, Command};
use crate::output::{output_contributors, output_language_infos, output_languages, output_raw};
use crate::tx::ids::LocaleCode;
use crate::tx::TxClient;
use crate::ui::{clear_spinner, create_spinner, finish_spinner};

use super::models::ContributorKind;

/// Run the languages list command
pub async fn run_languages_command(
    client: &TxClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Languages(args) = &cli.command else {
        unreachable!()
    };

    debug!("Resolving languages for project '{}'", client.project());
    let spinner = create_spinner("Resolving project languages...", cli.batch);

    match client.all_languages().await {
        Ok(all) => {
            finish_spinner(spinner, "Done");
            output_languages(&all, &args.output, cli.no_header);
            Ok(())
        }
        Err(e) => {
            clear_spinner(spinner);
            Err(e.into())
        }
    }
}

/// Run the contributors command (tally, or one role's list)
pub async fn run_contributors_command(
    client: &TxClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Contributors(args) = &cli.command else {
        unreachable!()
    };

    if let (Some(locale), Some(kind)) = (&args.locale, &args.kind) {
        // The role kind is validated before any request goes out
        let kind: ContributorKind = kind.parse()?;
        debug!("Fetching {} for locale '{}'", kind, locale);
        let list = client
            .contributors(&LocaleCode::from(locale.as_str()), kind)
            .await?;
        output_raw(&list);
        return Ok(());
    }

    debug!("Counting contributors for project '{}'", client.project());
    let spinner = create_spinner("Counting contributors...", cli.batch);

    match client.contributor_counts().await {
        Ok(tally) => {
            finish_spinner(spinner, "Done");
            output_contributors(&tally, &args.output, cli.no_header);
            Ok(())
        }
        Err(e) => {
            clear_spinner(spinner);
            Err(e.into())
        }
    }
}

/// Run the language-info command (one code, or the full catalogue)
pub async fn run_language_info_command(
    client: &TxClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::LanguageInfo(args) = &cli.command else {
        unreachable!()
    };

    match &args.code {
        Some(code) => {
            let info = client
                .language_info(&LocaleCode::from(code.as_str()))
                .await?;
            output_language_infos(std::slice::from_ref(&info), &args.output, cli.no_header);
        }
        None => {
            let spinner = create_spinner("Fetching language catalogue...", cli.batch);
            match client.all_tx_languages().await {
                Ok(infos) => {
                    finish_spinner(spinner, "Done");
                    output_language_infos(&infos, &args.output, cli.no_header);
                }
                Err(e) => {
                    clear_spinner(spinner);
                    return Err(e.into());
                }
            }
        }
    }
    Ok(())
}
