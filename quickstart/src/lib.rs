use std::io::Write;

use anyhow::Context;

use google_cloud_resourcemanager::client::Client;
use google_cloud_resourcemanager::http::types::Binding;

pub mod cli;

/// Grants `role` to `member`, prints the role's binding to `out` and revokes the role again.
pub async fn run<W: Write>(client: &Client, project_id: &str, member: &str, role: &str, out: &mut W) -> anyhow::Result<()> {
    let iam = client.iam(project_id);

    iam.add_binding(role, member)
        .await
        .with_context(|| format!("failed to grant {role} to {member} on {project_id}"))?;
    tracing::info!(project_id, role, member, "granted");

    let binding = iam
        .binding(role)
        .await
        .with_context(|| format!("failed to read the binding of {role} on {project_id}"))?;
    write_binding(out, role, binding.as_ref())?;

    iam.remove_member(role, member)
        .await
        .with_context(|| format!("failed to revoke {role} from {member} on {project_id}"))?;
    tracing::info!(project_id, role, member, "revoked");
    Ok(())
}

/// Prints the role and its members as `Role: <role>` / `Members: [m1] [m2] `.
pub fn write_binding<W: Write>(out: &mut W, role: &str, binding: Option<&Binding>) -> std::io::Result<()> {
    writeln!(out, "Role: {}", binding.map(|b| b.role.as_str()).unwrap_or(role))?;
    write!(out, "Members: ")?;
    for member in binding.map(|b| b.members.as_slice()).unwrap_or_default() {
        write!(out, "[{member}] ")?;
    }
    writeln!(out)
}
