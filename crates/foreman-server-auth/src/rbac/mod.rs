// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Role-based access control: the capability catalog and the policy
//! evaluation engine.

pub mod engine;
pub mod types;

pub use engine::{
	accessible_org_ids_for_action, can_create, can_delete, can_manage_org, can_manage_users,
	can_read, can_update, is_allowed,
};
pub use types::{Capabilities, PermissionContext, TaskAction};
