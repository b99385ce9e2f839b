// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! RBAC policy evaluation engine.
//!
//! This module contains the core [`is_allowed`] function and the named
//! predicates it dispatches to. Every decision combines three conditions:
//!
//! 1. The required target (org id or task) is present in the context
//! 2. The user's role grants the capability for the action
//! 3. The target org is within two-level containment of the user's home org
//!
//! All three are AND'ed; any failure denies silently. Nothing here returns an
//! error or panics — absent context is an unconditional deny, and the caller
//! decides whether a denial becomes an HTTP 403.
//!
//! Org containment here is strictly two-level (home org + direct children);
//! audit visibility in `foreman-server-audit` walks the full subtree for
//! Owners. The asymmetry is intentional and load-bearing.

use tracing::instrument;

use super::types::{Capabilities, PermissionContext, TaskAction};
use crate::org::{accessible_org_ids, org_contains, OrgNode};
use crate::types::OrgId;
use crate::user::User;

/// Evaluates whether the context's user may perform `action`.
///
/// This is the main entry point for RBAC evaluation; it dispatches to the
/// named predicate for each action.
///
/// # Tracing
///
/// This function is instrumented with tracing. The decision inputs are
/// logged at debug level for audit purposes.
#[instrument(
    level = "debug",
    skip(ctx),
    fields(
        user_id = %ctx.user.id,
        role = %ctx.user.role,
        action = ?action,
    )
)]
pub fn is_allowed(ctx: &PermissionContext<'_>, action: TaskAction) -> bool {
	match action {
		TaskAction::Read => can_read(ctx),
		TaskAction::Create => can_create(ctx),
		TaskAction::Update => can_update(ctx),
		TaskAction::Delete => can_delete(ctx),
		TaskAction::ManageUsers => can_manage_users(ctx),
		TaskAction::ManageOrg => can_manage_org(ctx),
	}
}

/// Returns true if the user may read tasks in the target organization.
pub fn can_read(ctx: &PermissionContext<'_>) -> bool {
	allowed_for_target_org(ctx, TaskAction::Read)
}

/// Returns true if the user may create tasks in the target organization.
pub fn can_create(ctx: &PermissionContext<'_>) -> bool {
	allowed_for_target_org(ctx, TaskAction::Create)
}

/// Returns true if the user may update the context's task.
pub fn can_update(ctx: &PermissionContext<'_>) -> bool {
	allowed_for_task(ctx, TaskAction::Update)
}

/// Returns true if the user may delete the context's task.
pub fn can_delete(ctx: &PermissionContext<'_>) -> bool {
	allowed_for_task(ctx, TaskAction::Delete)
}

/// Returns true if the user may manage users in the target organization.
pub fn can_manage_users(ctx: &PermissionContext<'_>) -> bool {
	allowed_for_target_org(ctx, TaskAction::ManageUsers)
}

/// Returns true if the user may manage the target organization itself.
///
/// Owner-only by virtue of the capability table, not a separate rank check.
pub fn can_manage_org(ctx: &PermissionContext<'_>) -> bool {
	allowed_for_target_org(ctx, TaskAction::ManageOrg)
}

/// Org-targeted checks: require a target org id, the capability, and
/// containment of the target within the user's home org.
fn allowed_for_target_org(ctx: &PermissionContext<'_>, action: TaskAction) -> bool {
	let Some(target_org_id) = ctx.target_org_id else {
		return false;
	};

	if !Capabilities::for_role(Some(ctx.user.role)).allows(action) {
		return false;
	}

	org_contains(ctx.user.org_id, target_org_id, ctx.org_tree)
}

/// Task-targeted checks: require the task, the capability, and containment
/// of the task's own org within the user's home org.
fn allowed_for_task(ctx: &PermissionContext<'_>, action: TaskAction) -> bool {
	let Some(task) = ctx.task else {
		return false;
	};

	if !Capabilities::for_role(Some(ctx.user.role)).allows(action) {
		return false;
	}

	org_contains(ctx.user.org_id, task.org_id, ctx.org_tree)
}

/// All organization ids in which the user may perform `action`.
///
/// Empty when the role lacks the capability; otherwise the home org plus its
/// direct children, in tree input order.
pub fn accessible_org_ids_for_action(
	user: &User,
	action: TaskAction,
	tree: Option<&[OrgNode]>,
) -> Vec<OrgId> {
	if !Capabilities::for_role(Some(user.role)).allows(action) {
		return Vec::new();
	}

	accessible_org_ids(user.org_id, tree)
}
