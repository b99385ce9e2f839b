// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Org-scoped audit visibility.
//!
//! Audit visibility is deliberately broader than task scoping: an Owner sees
//! the audit trail of their org's ENTIRE subtree, discovered depth-unbounded
//! through the [`OrgDirectory`] collaborator, while task/org access checks in
//! `foreman-server-auth` only ever consider direct children. Keep the two
//! traversals separate; call sites depend on each behavior.
//!
//! Any non-Owner role is limited to its home organization. A directory
//! failure is propagated to the caller rather than silently narrowing the
//! scope — a partial answer here would hide audit records.

use async_trait::async_trait;
use std::collections::HashSet;
use tracing::instrument;

use crate::error::AuditResult;
use foreman_server_auth::{OrgId, Role, User};

/// External lookup collaborator for org hierarchy discovery.
///
/// Typically backed by the persistence layer; each call may be a database
/// round trip. Returning an empty list terminates the traversal for that
/// branch.
#[async_trait]
pub trait OrgDirectory: Send + Sync {
	/// Returns the ids of the direct children of `org_id`.
	async fn find_children(&self, org_id: OrgId) -> AuditResult<Vec<OrgId>>;
}

/// Computes the organizations whose audit trail `user` may view.
///
/// Starts from the user's home org. Owners expand to all descendants at
/// every depth by repeated [`OrgDirectory::find_children`] calls; any other
/// role gets only the home org. Already-collected ids are never revisited,
/// so the traversal terminates even on cyclic data.
#[instrument(
    level = "debug",
    skip(directory),
    fields(user_id = %user.id, role = %user.role)
)]
pub async fn accessible_org_ids_for_audit(
	user: &User,
	directory: &dyn OrgDirectory,
) -> AuditResult<Vec<OrgId>> {
	let mut accessible = vec![user.org_id];

	if user.role != Role::Owner {
		return Ok(accessible);
	}

	let mut seen: HashSet<OrgId> = accessible.iter().copied().collect();
	let mut frontier = vec![user.org_id];

	while let Some(org_id) = frontier.pop() {
		for child_id in directory.find_children(org_id).await? {
			if seen.insert(child_id) {
				accessible.push(child_id);
				frontier.push(child_id);
			}
		}
	}

	Ok(accessible)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::AuditError;
	use std::collections::HashMap;

	struct InMemoryDirectory {
		children: HashMap<OrgId, Vec<OrgId>>,
	}

	#[async_trait]
	impl OrgDirectory for InMemoryDirectory {
		async fn find_children(&self, org_id: OrgId) -> AuditResult<Vec<OrgId>> {
			Ok(self.children.get(&org_id).cloned().unwrap_or_default())
		}
	}

	struct FailingDirectory;

	#[async_trait]
	impl OrgDirectory for FailingDirectory {
		async fn find_children(&self, _org_id: OrgId) -> AuditResult<Vec<OrgId>> {
			Err(AuditError::lookup(std::io::Error::new(
				std::io::ErrorKind::ConnectionReset,
				"database unavailable",
			)))
		}
	}

	fn user_in(org_id: OrgId, role: Role) -> User {
		User::new(org_id, role, "user@example.com", "User")
	}

	/// root -> child -> grandchild
	fn three_level_directory() -> (InMemoryDirectory, OrgId, OrgId, OrgId) {
		let root = OrgId::generate();
		let child = OrgId::generate();
		let grandchild = OrgId::generate();
		let mut children = HashMap::new();
		children.insert(root, vec![child]);
		children.insert(child, vec![grandchild]);
		(InMemoryDirectory { children }, root, child, grandchild)
	}

	#[tokio::test]
	async fn owner_sees_the_entire_subtree() {
		let (directory, root, child, grandchild) = three_level_directory();
		let owner = user_in(root, Role::Owner);

		let ids = accessible_org_ids_for_audit(&owner, &directory)
			.await
			.unwrap();

		assert_eq!(ids.len(), 3);
		assert!(ids.contains(&root));
		assert!(ids.contains(&child));
		assert!(ids.contains(&grandchild));
	}

	#[tokio::test]
	async fn admin_sees_only_the_home_org() {
		let (directory, root, ..) = three_level_directory();
		let admin = user_in(root, Role::Admin);

		let ids = accessible_org_ids_for_audit(&admin, &directory)
			.await
			.unwrap();

		assert_eq!(ids, vec![root]);
	}

	#[tokio::test]
	async fn viewer_sees_only_the_home_org() {
		let (directory, root, ..) = three_level_directory();
		let viewer = user_in(root, Role::Viewer);

		let ids = accessible_org_ids_for_audit(&viewer, &directory)
			.await
			.unwrap();

		assert_eq!(ids, vec![root]);
	}

	#[tokio::test]
	async fn childless_owner_sees_only_the_home_org() {
		let directory = InMemoryDirectory {
			children: HashMap::new(),
		};
		let owner = user_in(OrgId::generate(), Role::Owner);

		let ids = accessible_org_ids_for_audit(&owner, &directory)
			.await
			.unwrap();

		assert_eq!(ids.len(), 1);
	}

	#[tokio::test]
	async fn cyclic_directory_data_terminates() {
		let a = OrgId::generate();
		let b = OrgId::generate();
		let mut children = HashMap::new();
		children.insert(a, vec![b]);
		children.insert(b, vec![a]);
		let directory = InMemoryDirectory { children };
		let owner = user_in(a, Role::Owner);

		let ids = accessible_org_ids_for_audit(&owner, &directory)
			.await
			.unwrap();

		assert_eq!(ids, vec![a, b]);
	}

	#[tokio::test]
	async fn lookup_failure_propagates_for_owner() {
		let owner = user_in(OrgId::generate(), Role::Owner);

		let result = accessible_org_ids_for_audit(&owner, &FailingDirectory).await;

		assert!(matches!(result, Err(AuditError::Lookup { .. })));
	}

	#[tokio::test]
	async fn non_owner_never_hits_the_directory() {
		// Admins resolve without a lookup, so a broken directory is fine.
		let admin = user_in(OrgId::generate(), Role::Admin);

		let ids = accessible_org_ids_for_audit(&admin, &FailingDirectory)
			.await
			.unwrap();

		assert_eq!(ids, vec![admin.org_id]);
	}
}
