// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

pub mod org;
pub mod rbac;
pub mod scope;
pub mod task;
pub mod types;
pub mod user;

pub use org::{accessible_org_ids, build_org_tree, org_contains, OrgNode, Organization};
pub use rbac::{
	accessible_org_ids_for_action, can_create, can_delete, can_manage_org, can_manage_users,
	can_read, can_update, is_allowed, Capabilities, PermissionContext, TaskAction,
};
pub use scope::OrgScope;
pub use task::Task;
pub use types::{rank_of, OrgId, Role, TaskCategory, TaskId, TaskStatus, UserId};
pub use user::User;
