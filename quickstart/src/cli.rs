use std::time::Duration;

use clap::Parser;

/// The role granted by default: "Logs Writer".
pub const DEFAULT_ROLE: &str = "roles/logging.logWriter";

/// Grants a member a role on a project, prints the role's binding, then revokes the role again.
#[derive(Parser, Debug)]
#[command(name = "iam-quickstart", version, about)]
pub struct Cli {
    /// Cloud project ID. Defaults to the project of the application default credentials.
    #[arg(long = "project-id", alias = "project_id", env = "GOOGLE_CLOUD_PROJECT")]
    pub project_id: Option<String>,

    /// Member to grant the role to, in the form "user:member@example.com".
    #[arg(long = "member-id", alias = "member_id")]
    pub member_id: String,

    /// Role to grant.
    #[arg(long, default_value = DEFAULT_ROLE)]
    pub role: String,

    /// Per-request deadline in seconds.
    #[arg(long = "timeout-secs", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
