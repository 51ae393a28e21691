use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use google_cloud_resourcemanager::client::{Client, ClientConfig};
use iam_quickstart::cli::Cli;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    if let Err(err) = execute(cli).await {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}

async fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = ClientConfig {
        project_id: cli.project_id.clone(),
        timeout: Some(cli.timeout()),
        ..Default::default()
    }
    .with_auth()
    .await
    .context("failed to load application default credentials")?;
    let project_id = config
        .project_id
        .clone()
        .context("no project id: pass --project-id or set GOOGLE_CLOUD_PROJECT")?;

    let client = Client::new(config);
    let mut stdout = std::io::stdout().lock();
    iam_quickstart::run(&client, &project_id, &cli.member_id, &cli.role, &mut stdout).await
}
