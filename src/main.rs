//! txctl - Main entry point

use clap::Parser;
use log::{debug, info};

use txctl::tx::{
    run_contributors_command, run_language_info_command, run_languages_command, run_locale_command,
    run_project_command, run_resources_command, run_stats_command, run_translation_command,
    CredentialResolver, ProjectSlug, TxClient,
};
use txctl::{Cli, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting txctl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: project={}, host={}, batch={}",
        cli.project, cli.host, cli.batch
    );

    // Resolve credential with fallback logic
    let resolver = CredentialResolver::new(&cli.host);
    let credential = resolver.resolve(cli.credential.as_deref())?;

    // Create Transifex client scoped to the project
    let client = TxClient::new(
        &credential,
        cli.host.clone(),
        ProjectSlug::new(cli.project.clone()),
    );

    match &cli.command {
        Command::Languages(_) => run_languages_command(&client, &cli).await,
        Command::Stats(_) => run_stats_command(&client, &cli).await,
        Command::Contributors(_) => run_contributors_command(&client, &cli).await,
        Command::Locale(_) => run_locale_command(&client, &cli).await,
        Command::Project(_) => run_project_command(&client, &cli).await,
        Command::Resources(_) => run_resources_command(&client, &cli).await,
        Command::Translation(_) => run_translation_command(&client, &cli).await,
        Command::LanguageInfo(_) => run_language_info_command(&client, &cli).await,
    }
}
