use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::Escape;

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TestIamPermissionsRequest {
    /// The set of permissions to check for the project.
    /// Permissions with wildcards (such as '*' or 'storage.*') are not allowed.
    /// For more information see IAM Overview.
    pub permissions: Vec<String>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TestIamPermissionsResponse {
    /// A subset of `TestPermissionsRequest.permissions` that the caller is allowed.
    #[serde(default)]
    pub permissions: Vec<String>,
}

pub(crate) fn build(
    base_url: &str,
    client: &Client,
    project_id: &str,
    req: &TestIamPermissionsRequest,
) -> RequestBuilder {
    let url = format!("{}/projects/{}:testIamPermissions", base_url, project_id.escape());
    client.post(url).json(&req)
}
