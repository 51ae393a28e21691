use std::sync::Arc;
use std::time::Duration;

use token_source::{NoopTokenSourceProvider, TokenSourceProvider};

use crate::http::resourcemanager_client::ResourceManagerClient;
use crate::http::resourcemanager_project_client::ResourceManagerProjectClient;
use crate::iam::IamHandle;

#[derive(Debug)]
pub struct ClientConfig {
    pub http: Option<reqwest_middleware::ClientWithMiddleware>,
    pub endpoint: String,
    pub token_source_provider: Box<dyn TokenSourceProvider>,
    /// Project of the resolved credentials, if any.
    pub project_id: Option<String>,
    /// Deadline applied to each request.
    pub timeout: Option<Duration>,
    /// Logs raw response bodies.
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            http: None,
            endpoint: "https://cloudresourcemanager.googleapis.com".to_string(),
            token_source_provider: Box::new(NoopTokenSourceProvider {}),
            project_id: None,
            timeout: Some(Duration::from_secs(10)),
            debug: false,
        }
    }
}

#[cfg(feature = "auth")]
pub use google_cloud_auth;

#[cfg(feature = "auth")]
impl ClientConfig {
    pub async fn with_auth(self) -> Result<Self, google_cloud_auth::error::Error> {
        let ts = google_cloud_auth::token::DefaultTokenSourceProvider::new(Self::auth_config()).await?;
        Ok(self.with_token_source(ts).await)
    }

    pub async fn with_credentials(
        self,
        credentials: google_cloud_auth::credentials::CredentialsFile,
    ) -> Result<Self, google_cloud_auth::error::Error> {
        let ts = google_cloud_auth::token::DefaultTokenSourceProvider::new_with_credentials(
            Self::auth_config(),
            Box::new(credentials),
        )
        .await?;
        Ok(self.with_token_source(ts).await)
    }

    async fn with_token_source(mut self, ts: google_cloud_auth::token::DefaultTokenSourceProvider) -> Self {
        self.project_id = resolve_project_id(self.project_id.take(), ts.project_id.clone());
        self.token_source_provider = Box::new(ts);
        self
    }

    fn auth_config() -> google_cloud_auth::project::Config<'static> {
        google_cloud_auth::project::Config::default().with_scopes(&crate::http::resourcemanager_client::SCOPES)
    }
}

#[cfg_attr(not(feature = "auth"), allow(dead_code))]
/// Prefers the configured project over the one found with the credentials. Empty ids count as unset.
fn resolve_project_id(configured: Option<String>, from_credentials: Option<String>) -> Option<String> {
    configured
        .filter(|id| !id.is_empty())
        .or_else(|| from_credentials.filter(|id| !id.is_empty()))
}

/// Client is a Cloud Resource Manager client for project IAM policies.
///
/// Clients should be reused rather than being created as needed.
#[derive(Debug, Clone)]
pub struct Client {
    project_client: ResourceManagerProjectClient,
}

impl Client {
    /// New client
    pub fn new(config: ClientConfig) -> Self {
        let ts = config.token_source_provider.token_source();
        let http = config
            .http
            .unwrap_or_else(|| reqwest_middleware::ClientBuilder::new(reqwest::Client::default()).build());
        let client = Arc::new(ResourceManagerClient::new(
            ts,
            config.endpoint.as_str(),
            http,
            config.timeout,
            config.debug,
        ));
        Self {
            project_client: ResourceManagerProjectClient::new(client),
        }
    }

    pub fn project(&self) -> &ResourceManagerProjectClient {
        &self.project_client
    }

    /// Returns a handle for reading and editing the IAM policy of the project.
    pub fn iam<'a>(&'a self, project_id: &'a str) -> IamHandle<'a> {
        IamHandle::new(project_id, &self.project_client)
    }
}
