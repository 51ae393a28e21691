use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::types::GetPolicyOptions;
use crate::http::Escape;

/// Request message for `projects.getIamPolicy`.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GetIamPolicyRequest {
    /// OPTIONAL: A `GetPolicyOptions` object for specifying options to `GetIamPolicy`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GetPolicyOptions>,
}

impl GetIamPolicyRequest {
    pub fn with_policy_version(version: i32) -> Self {
        Self {
            options: Some(GetPolicyOptions {
                requested_policy_version: Some(version),
            }),
        }
    }
}

pub(crate) fn build(base_url: &str, client: &Client, project_id: &str, req: &GetIamPolicyRequest) -> RequestBuilder {
    let url = format!("{}/projects/{}:getIamPolicy", base_url, project_id.escape());
    client.post(url).json(&req)
}
