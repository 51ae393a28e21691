/// An Identity and Access Management (IAM) policy, which specifies access
/// controls for Google Cloud resources.
///
/// A `Policy` is a collection of `bindings`. A `binding` binds one or more
/// `members`, or principals, to a single `role`. Principals can be user
/// accounts, service accounts, Google groups, and domains (such as G Suite).
/// A `role` is a named list of permissions; each `role` can be an IAM predefined
/// role or a user-created custom role.
///
/// **JSON example:**
///
///     {
///       "bindings": [
///         {
///           "role": "roles/logging.logWriter",
///           "members": [
///             "user:mike@example.com",
///             "serviceAccount:my-project-id@appspot.gserviceaccount.com"
///           ]
///         }
///       ],
///       "etag": "BwWWja0YfJA=",
///       "version": 1
///     }
///
/// For a description of IAM and its features, see the
/// [IAM documentation](<https://cloud.google.com/iam/docs/>).
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    /// Specifies the format of the policy.
    ///
    /// Valid values are `0`, `1`, and `3`. Requests that specify an invalid value
    /// are rejected.
    ///
    /// Any operation that affects conditional role bindings must specify version
    /// `3`.
    #[serde(default)]
    pub version: i32,
    /// Associates a list of `members`, or principals, with a `role`. Optionally,
    /// may specify a `condition` that determines how and when the `bindings` are
    /// applied. Each of the `bindings` must contain at least one principal.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bindings: Vec<Binding>,
    /// Specifies cloud audit logging configuration for this policy.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audit_configs: Vec<AuditConfig>,
    /// `etag` is used for optimistic concurrency control as a way to help
    /// prevent simultaneous updates of a policy from overwriting each other.
    /// It must be sent back unchanged in the `setIamPolicy` request that
    /// follows a `getIamPolicy`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

/// Associates `members`, or principals, with a `role`.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    /// Role that is assigned to the list of `members`, or principals.
    /// For example, `roles/viewer`, `roles/editor`, or `roles/owner`.
    pub role: String,
    /// Specifies the principals requesting access for a Google Cloud resource.
    /// `members` can have the following values:
    ///
    /// * `allUsers`
    /// * `allAuthenticatedUsers`
    /// * `user:{emailid}`
    /// * `serviceAccount:{emailid}`
    /// * `group:{emailid}`
    /// * `domain:{domain}`
    /// * `deleted:user:{emailid}?uid={uniqueid}` and the equivalents for
    ///   service accounts and groups.
    #[serde(default)]
    pub members: Vec<String>,
    /// The condition that is associated with this binding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Expr>,
}

/// Represents a textual expression in the Common Expression Language (CEL)
/// syntax.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Expr {
    /// Textual representation of an expression in Common Expression Language syntax.
    pub expression: String,
    /// Optional. Title for the expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional. Description of the expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional. String indicating the location of the expression for error reporting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Specifies the audit configuration for a service.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuditConfig {
    /// Specifies a service that will be enabled for audit logging.
    /// For example, `storage.googleapis.com`. `allServices` covers all services.
    pub service: String,
    /// The configuration for logging of each type of permission.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audit_log_configs: Vec<AuditLogConfig>,
}

/// Provides the configuration for logging a type of permissions.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogConfig {
    /// The log type that this config enables.
    #[serde(default)]
    pub log_type: LogType,
    /// Specifies the identities that do not cause logging for this type of permission.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exempted_members: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogType {
    #[default]
    LogTypeUnspecified,
    /// Admin reads. Example: CloudIAM getIamPolicy
    AdminRead,
    /// Data writes. Example: CloudSQL Users create
    DataWrite,
    /// Data reads. Example: CloudSQL Users list
    DataRead,
}

/// Encapsulates settings provided to GetIamPolicy.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GetPolicyOptions {
    /// Optional. The maximum policy version that will be used to format the policy.
    ///
    /// Valid values are 0, 1, and 3. Requests specifying an invalid value will be rejected.
    /// Requests for policies with any conditional role bindings must specify version 3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_policy_version: Option<i32>,
}
