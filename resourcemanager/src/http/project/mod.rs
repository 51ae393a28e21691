pub mod get_iam_policy;
pub mod set_iam_policy;
pub mod test_iam_permissions;
