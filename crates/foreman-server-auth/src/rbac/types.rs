// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Type definitions for RBAC policy evaluation.
//!
//! This module defines the core data structures for role-based access
//! control:
//!
//! - [`Capabilities`]: The fixed capability record a role maps to
//! - [`TaskAction`]: The operation being attempted (read, create, ...)
//! - [`PermissionContext`]: Everything a single access check needs
//!
//! # Design Principles
//!
//! 1. **Immutable evaluation**: all inputs are computed before evaluation
//! 2. **No database access**: decision functions are pure; all data is
//!    pre-loaded into the context
//! 3. **Static catalog**: the role-to-capability table is a process-wide
//!    constant, never recomputed or mutated

use serde::{Deserialize, Serialize};

use crate::org::OrgNode;
use crate::task::Task;
use crate::types::{OrgId, Role};
use crate::user::User;

/// The fixed capability record for a role.
///
/// Capability sets are defined independently per role, NOT derived from
/// rank: `can_manage_org` is Owner-exclusive even though Admin otherwise
/// matches Owner. Do not "fix" the table to be rank-monotonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
	pub can_read: bool,
	pub can_create: bool,
	pub can_update: bool,
	pub can_delete: bool,
	pub can_manage_users: bool,
	pub can_manage_org: bool,
}

impl Capabilities {
	/// The all-false capability record.
	pub const fn none() -> Self {
		Self {
			can_read: false,
			can_create: false,
			can_update: false,
			can_delete: false,
			can_manage_users: false,
			can_manage_org: false,
		}
	}

	/// The static catalog: maps a (possibly unknown) role to its
	/// capability record.
	///
	/// An unknown role (`None`) yields the all-false record — total denial,
	/// not a configuration error.
	pub const fn for_role(role: Option<Role>) -> Self {
		match role {
			Some(Role::Owner) => Self {
				can_read: true,
				can_create: true,
				can_update: true,
				can_delete: true,
				can_manage_users: true,
				can_manage_org: true,
			},
			Some(Role::Admin) => Self {
				can_read: true,
				can_create: true,
				can_update: true,
				can_delete: true,
				can_manage_users: true,
				can_manage_org: false,
			},
			Some(Role::Viewer) => Self {
				can_read: true,
				can_create: false,
				can_update: false,
				can_delete: false,
				can_manage_users: false,
				can_manage_org: false,
			},
			None => Self::none(),
		}
	}

	/// Returns true if this record grants the given action.
	pub const fn allows(&self, action: TaskAction) -> bool {
		match action {
			TaskAction::Read => self.can_read,
			TaskAction::Create => self.can_create,
			TaskAction::Update => self.can_update,
			TaskAction::Delete => self.can_delete,
			TaskAction::ManageUsers => self.can_manage_users,
			TaskAction::ManageOrg => self.can_manage_org,
		}
	}
}

/// Actions that can be gated by the access evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
	Read,
	Create,
	Update,
	Delete,
	ManageUsers,
	ManageOrg,
}

impl TaskAction {
	/// Returns all gated actions.
	pub fn all() -> &'static [TaskAction] {
		&[
			TaskAction::Read,
			TaskAction::Create,
			TaskAction::Update,
			TaskAction::Delete,
			TaskAction::ManageUsers,
			TaskAction::ManageOrg,
		]
	}
}

/// Everything a single access check needs, bundled per request.
///
/// Created per check and discarded; never shared across requests. Missing
/// pieces (no task, no target org, no tree) make the corresponding checks
/// deny — they are never an error.
#[derive(Debug, Clone)]
pub struct PermissionContext<'a> {
	/// The user requesting access.
	pub user: &'a User,

	/// The task being updated or deleted, when applicable.
	pub task: Option<&'a Task>,

	/// The org being read from / created into / managed, when applicable.
	pub target_org_id: Option<OrgId>,

	/// Snapshot of the org forest for containment checks.
	pub org_tree: Option<&'a [OrgNode]>,
}

impl<'a> PermissionContext<'a> {
	/// Context for an org-targeted check (read, create, manage).
	pub fn for_org(user: &'a User, target_org_id: OrgId) -> Self {
		Self {
			user,
			task: None,
			target_org_id: Some(target_org_id),
			org_tree: None,
		}
	}

	/// Context for a task-targeted check (update, delete).
	pub fn for_task(user: &'a User, task: &'a Task) -> Self {
		Self {
			user,
			task: Some(task),
			target_org_id: None,
			org_tree: None,
		}
	}

	/// Builder: attach the org tree snapshot.
	pub fn with_tree(mut self, org_tree: &'a [OrgNode]) -> Self {
		self.org_tree = Some(org_tree);
		self
	}
}
