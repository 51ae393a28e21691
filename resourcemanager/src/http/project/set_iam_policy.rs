use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::types::Policy;
use crate::http::Escape;

/// Request message for `projects.setIamPolicy`.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SetIamPolicyRequest {
    /// REQUIRED: The complete policy to be applied to the project.
    /// The size of the policy is limited to a few 10s of KB.
    /// An empty policy is a valid policy but projects might reject them.
    pub policy: Policy,
    /// OPTIONAL: A FieldMask specifying which fields of the policy to modify. Only the fields in the mask will be modified. If no mask is provided, the following default mask is used:
    ///
    /// paths: "bindings, etag"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client, project_id: &str, req: &SetIamPolicyRequest) -> RequestBuilder {
    let url = format!("{}/projects/{}:setIamPolicy", base_url, project_id.escape());
    client.post(url).json(&req)
}
