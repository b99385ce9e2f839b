// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Organization records and the derived org hierarchy.
//!
//! Organizations are stored flat (parent pointer only); the
//! children-populated tree is always a derived, ephemeral projection built
//! fresh per evaluation via [`build_org_tree`]. Containment queries against
//! that tree are **two-level only**: [`org_contains`] considers an org to
//! contain itself and its direct children, and nothing deeper. Grandchildren
//! are NOT contained.
//!
//! Audit visibility uses a different, depth-unbounded traversal (see
//! `foreman-server-audit`). The two shapes deliberately coexist; call sites
//! depend on each separately, so do not unify them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::OrgId;

/// An organization, as stored: flat, with an optional parent pointer.
///
/// Organizations form a forest. A `parent_org_id` of `None` marks a root; a
/// parent id that does not resolve within a snapshot is treated as a root by
/// the tree builder, not as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
	/// Unique identifier for this organization.
	pub id: OrgId,

	/// Display name of the organization.
	pub name: String,

	/// The parent organization, if any.
	pub parent_org_id: Option<OrgId>,

	/// When the organization was created.
	pub created_at: DateTime<Utc>,

	/// When the organization was last updated.
	pub updated_at: DateTime<Utc>,
}

impl Organization {
	/// Creates a new root organization.
	pub fn new(name: impl Into<String>) -> Self {
		let now = Utc::now();
		Self {
			id: OrgId::generate(),
			name: name.into(),
			parent_org_id: None,
			created_at: now,
			updated_at: now,
		}
	}

	/// Creates a new child organization under the given parent.
	pub fn child_of(parent_org_id: OrgId, name: impl Into<String>) -> Self {
		let mut org = Self::new(name);
		org.parent_org_id = Some(parent_org_id);
		org
	}
}

/// A node in the derived org tree: an organization with its children
/// materialized.
///
/// Treat this as a per-request value; it is never persisted or mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgNode {
	/// The organization's id.
	pub id: OrgId,

	/// The organization's display name.
	pub name: String,

	/// The parent organization, if any.
	pub parent_org_id: Option<OrgId>,

	/// Direct children, in input order.
	pub children: Vec<OrgNode>,
}

impl OrgNode {
	/// Returns true if `org_id` is a direct child of this node.
	pub fn has_direct_child(&self, org_id: OrgId) -> bool {
		self.children.iter().any(|child| child.id == org_id)
	}
}

/// Builds the org forest from a flat organization snapshot.
///
/// Two passes: every org is first indexed by id with an empty child list,
/// then each org is appended to its parent's children (or collected as a
/// root when it has no parent, or its parent id does not resolve in the
/// snapshot). Both roots and children preserve input relative order, so the
/// result is deterministic and idempotent for a given snapshot.
pub fn build_org_tree(organizations: &[Organization]) -> Vec<OrgNode> {
	let by_id: HashMap<OrgId, &Organization> =
		organizations.iter().map(|org| (org.id, org)).collect();

	let mut child_ids: HashMap<OrgId, Vec<OrgId>> = HashMap::new();
	let mut root_ids: Vec<OrgId> = Vec::new();

	for org in organizations {
		match org.parent_org_id {
			Some(parent_id) if by_id.contains_key(&parent_id) => {
				child_ids.entry(parent_id).or_default().push(org.id);
			}
			_ => root_ids.push(org.id),
		}
	}

	root_ids
		.into_iter()
		.map(|id| build_node(id, &by_id, &child_ids))
		.collect()
}

fn build_node(
	id: OrgId,
	by_id: &HashMap<OrgId, &Organization>,
	child_ids: &HashMap<OrgId, Vec<OrgId>>,
) -> OrgNode {
	let org = by_id[&id];
	let children = child_ids
		.get(&id)
		.map(|ids| {
			ids.iter()
				.map(|child| build_node(*child, by_id, child_ids))
				.collect()
		})
		.unwrap_or_default();

	OrgNode {
		id: org.id,
		name: org.name.clone(),
		parent_org_id: org.parent_org_id,
		children,
	}
}

/// Two-level org containment: `ancestor` contains itself and its direct
/// children, nothing deeper.
///
/// The ancestor is located by a linear scan of the top level of `tree`.
/// Returns false when the tree is absent or the ancestor is not a top-level
/// node. Grandchildren are never contained by this check.
pub fn org_contains(
	ancestor_org_id: OrgId,
	candidate_org_id: OrgId,
	tree: Option<&[OrgNode]>,
) -> bool {
	if ancestor_org_id == candidate_org_id {
		return true;
	}

	let Some(tree) = tree else {
		return false;
	};

	tree.iter()
		.find(|node| node.id == ancestor_org_id)
		.map(|node| node.has_direct_child(candidate_org_id))
		.unwrap_or(false)
}

/// All organization ids the user's home org grants access to: the home org
/// plus its direct children, in input order.
///
/// Degrades to just the home org when no tree is supplied.
pub fn accessible_org_ids(user_org_id: OrgId, tree: Option<&[OrgNode]>) -> Vec<OrgId> {
	let mut accessible = vec![user_org_id];

	if let Some(tree) = tree {
		if let Some(node) = tree.iter().find(|node| node.id == user_org_id) {
			accessible.extend(node.children.iter().map(|child| child.id));
		}
	}

	accessible
}
