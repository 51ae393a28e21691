use crate::http::error::Error;
use crate::http::project::get_iam_policy::GetIamPolicyRequest;
use crate::http::project::set_iam_policy::SetIamPolicyRequest;
use crate::http::resourcemanager_project_client::ResourceManagerProjectClient;
use crate::http::types::{Binding, Policy};

/// Highest policy version; requesting it keeps conditional bindings intact across a set.
pub const POLICY_VERSION: i32 = 3;

/// Reads and edits the IAM policy of a single project.
///
/// Every edit is a full read-modify-write: the policy is fetched, changed in memory and written
/// back with the fetched `etag`, so a concurrent change makes the write fail instead of being
/// silently overwritten.
pub struct IamHandle<'a> {
    project_id: &'a str,
    client: &'a ResourceManagerProjectClient,
}

impl<'a> IamHandle<'a> {
    pub(crate) fn new(project_id: &'a str, client: &'a ResourceManagerProjectClient) -> Self {
        Self { project_id, client }
    }

    /// Gets the project's policy.
    pub async fn policy(&self) -> Result<Policy, Error> {
        let req = GetIamPolicyRequest::with_policy_version(POLICY_VERSION);
        self.client.get_iam_policy(self.project_id, &req).await
    }

    /// Replaces the project's policy.
    pub async fn set(&self, policy: Policy) -> Result<Policy, Error> {
        let req = SetIamPolicyRequest {
            policy,
            update_mask: None,
        };
        self.client.set_iam_policy(self.project_id, &req).await
    }

    /// Gets the unconditional binding for `role`.
    pub async fn binding(&self, role: &str) -> Result<Option<Binding>, Error> {
        Ok(self.policy().await?.binding(role).cloned())
    }

    /// Grants `role` to `member` and returns the resulting policy.
    pub async fn add_binding(&self, role: &str, member: &str) -> Result<Policy, Error> {
        let mut policy = self.policy().await?;
        if !policy.add_member(role, member) {
            tracing::info!(project = self.project_id, role, member, "member already bound");
            return Ok(policy);
        }
        tracing::debug!(project = self.project_id, role, member, "adding member");
        self.set(policy).await
    }

    /// Revokes `role` from `member` and returns the resulting policy.
    pub async fn remove_member(&self, role: &str, member: &str) -> Result<Policy, Error> {
        let mut policy = self.policy().await?;
        if !policy.remove_member(role, member) {
            tracing::warn!(project = self.project_id, role, member, "member is not bound");
            return Ok(policy);
        }
        tracing::debug!(project = self.project_id, role, member, "removing member");
        self.set(policy).await
    }
}
