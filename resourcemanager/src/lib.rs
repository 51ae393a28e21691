#![allow(clippy::result_large_err)]
//! # google-cloud-resourcemanager
//!
//! Google Cloud Platform Resource Manager client library, limited to project IAM policies.
//!
//! * [About Resource Manager](https://cloud.google.com/resource-manager/)
//! * [JSON API Documentation](https://cloud.google.com/resource-manager/reference/rest/v1/projects)
//!
//! ## Quick Start
//!
//! ### Authentication
//!
//! The function `with_auth()` will try and read the credentials from a file specified in the environment variable `GOOGLE_APPLICATION_CREDENTIALS`, `GOOGLE_APPLICATION_CREDENTIALS_JSON` or
//! from a metadata server.
//!
//! ```
//! use google_cloud_resourcemanager::client::{ClientConfig, Client};
//!
//! async fn run() {
//!     let config = ClientConfig::default().with_auth().await.unwrap();
//!     let client = Client::new(config);
//! }
//! ```
//!
//! ### Usage
//!
//! ```
//! use google_cloud_resourcemanager::client::Client;
//! use google_cloud_resourcemanager::http::error::Error;
//!
//! async fn run(client: Client) -> Result<(), Error> {
//!     let iam = client.iam("my-project");
//!
//!     // Grants the member the "Log Writer" role.
//!     iam.add_binding("roles/logging.logWriter", "user:member@example.com").await?;
//!
//!     if let Some(binding) = iam.binding("roles/logging.logWriter").await? {
//!         println!("{:?}", binding.members);
//!     }
//!
//!     // Revokes it again.
//!     iam.remove_member("roles/logging.logWriter", "user:member@example.com").await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod http;
pub mod iam;
mod policy;
