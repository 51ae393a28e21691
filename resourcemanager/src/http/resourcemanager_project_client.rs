use std::sync::Arc;

use crate::http::error::Error;
use crate::http::project;
use crate::http::project::get_iam_policy::GetIamPolicyRequest;
use crate::http::project::set_iam_policy::SetIamPolicyRequest;
use crate::http::project::test_iam_permissions::{TestIamPermissionsRequest, TestIamPermissionsResponse};
use crate::http::resourcemanager_client::ResourceManagerClient;
use crate::http::types::Policy;

#[derive(Debug, Clone)]
pub struct ResourceManagerProjectClient {
    inner: Arc<ResourceManagerClient>,
}

impl ResourceManagerProjectClient {
    pub fn new(inner: Arc<ResourceManagerClient>) -> Self {
        Self { inner }
    }

    /// Returns the IAM access control policy for the specified project.
    /// Permission is denied if the policy or the resource does not exist.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_iam_policy(&self, project_id: &str, req: &GetIamPolicyRequest) -> Result<Policy, Error> {
        let builder = project::get_iam_policy::build(self.inner.endpoint(), self.inner.http(), project_id, req);
        self.inner.send(builder).await
    }

    /// Sets the IAM access control policy for the specified project, replacing any existing policy.
    ///
    /// The request fails with `409 ABORTED` when the `etag` of the policy no longer matches.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn set_iam_policy(&self, project_id: &str, req: &SetIamPolicyRequest) -> Result<Policy, Error> {
        let builder = project::set_iam_policy::build(self.inner.endpoint(), self.inner.http(), project_id, req);
        self.inner.send(builder).await
    }

    /// Returns permissions that a caller has on the specified project.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn test_iam_permissions(
        &self,
        project_id: &str,
        req: &TestIamPermissionsRequest,
    ) -> Result<TestIamPermissionsResponse, Error> {
        let builder = project::test_iam_permissions::build(self.inner.endpoint(), self.inner.http(), project_id, req);
        self.inner.send(builder).await
    }
}
