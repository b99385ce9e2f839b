// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-request org scoping.
//!
//! [`OrgScope`] is the value the request layer attaches after
//! authentication so the query layer can constrain lookups to the
//! organizations the user may touch (`WHERE org_id IN (...)`). It is a pure
//! derivation from the user's home org and the org tree snapshot.

use serde::{Deserialize, Serialize};

use crate::org::{accessible_org_ids, OrgNode};
use crate::types::OrgId;
use crate::user::User;

/// The organizations a request is allowed to touch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgScope {
	/// The user's home organization.
	pub user_org_id: OrgId,

	/// Home org plus its direct children, in tree order.
	pub accessible_org_ids: Vec<OrgId>,
}

impl OrgScope {
	/// Computes the scope for a user against an org tree snapshot.
	///
	/// Without a tree the scope degrades to just the home organization.
	pub fn for_user(user: &User, tree: Option<&[OrgNode]>) -> Self {
		Self {
			user_org_id: user.org_id,
			accessible_org_ids: accessible_org_ids(user.org_id, tree),
		}
	}

	/// Returns true if the given org is inside this scope.
	pub fn includes(&self, org_id: OrgId) -> bool {
		self.accessible_org_ids.contains(&org_id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::org::{build_org_tree, Organization};
	use crate::types::Role;

	#[test]
	fn scope_covers_home_org_and_direct_children() {
		let parent = Organization::new("parent");
		let child = Organization::child_of(parent.id, "child");
		let other = Organization::new("other");
		let tree = build_org_tree(&[parent.clone(), child.clone(), other.clone()]);
		let user = User::new(parent.id, Role::Admin, "a@example.com", "A");

		let scope = OrgScope::for_user(&user, Some(&tree));

		assert_eq!(scope.user_org_id, parent.id);
		assert_eq!(scope.accessible_org_ids, vec![parent.id, child.id]);
		assert!(scope.includes(child.id));
		assert!(!scope.includes(other.id));
	}

	#[test]
	fn scope_without_tree_is_home_org_only() {
		let org_id = OrgId::generate();
		let user = User::new(org_id, Role::Viewer, "v@example.com", "V");

		let scope = OrgScope::for_user(&user, None);

		assert_eq!(scope.accessible_org_ids, vec![org_id]);
	}
}
