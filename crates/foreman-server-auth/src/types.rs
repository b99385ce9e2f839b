// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core type definitions for authorization.
//!
//! This module defines the foundational types used throughout the access
//! control system:
//!
//! - **ID newtypes**: Type-safe wrappers around UUIDs for different entity
//!   types ([`UserId`], [`OrgId`], [`TaskId`]) preventing accidental mixing
//! - **Role enum**: The organization role ladder ([`Role`]) with a total rank
//!   order used for minimum-role checks
//! - **Task enums**: Workflow state ([`TaskStatus`]) and classification
//!   ([`TaskCategory`]) for task records
//!
//! All ID types implement transparent serde serialization (as UUID strings)
//! and provide conversion to/from [`uuid::Uuid`].

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// ID Newtypes
// =============================================================================

macro_rules! define_id_type {
	($name:ident, $doc:expr) => {
		#[doc = $doc]
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(Uuid);

		impl $name {
			/// Create a new ID from a UUID.
			pub fn new(id: Uuid) -> Self {
				Self(id)
			}

			/// Generate a new random ID.
			pub fn generate() -> Self {
				Self(Uuid::new_v4())
			}

			/// Get the inner UUID value.
			pub fn into_inner(self) -> Uuid {
				self.0
			}

			/// Get a reference to the inner UUID.
			pub fn as_uuid(&self) -> &Uuid {
				&self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, "{}", self.0)
			}
		}

		impl From<Uuid> for $name {
			fn from(id: Uuid) -> Self {
				Self(id)
			}
		}

		impl From<$name> for Uuid {
			fn from(id: $name) -> Self {
				id.0
			}
		}
	};
}

define_id_type!(UserId, "Unique identifier for a user.");
define_id_type!(OrgId, "Unique identifier for an organization.");
define_id_type!(TaskId, "Unique identifier for a task.");

// =============================================================================
// Organization Roles
// =============================================================================

/// Roles within an organization.
///
/// Roles form a total order by rank: `Owner > Admin > Viewer`. Rank alone does
/// NOT determine capabilities; the capability table in
/// [`crate::rbac::Capabilities`] is defined independently per role (notably,
/// org management is Owner-exclusive even though Admin outranks Viewer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
	/// Full org control, including org settings and deletion.
	Owner,
	/// Manage members and tasks, cannot manage the org itself.
	Admin,
	/// Read-only access to tasks.
	Viewer,
}

impl Role {
	/// Returns all available roles.
	pub fn all() -> &'static [Role] {
		&[Role::Owner, Role::Admin, Role::Viewer]
	}

	/// Numeric rank for ordering comparisons (higher = more senior).
	pub fn rank(&self) -> u8 {
		match self {
			Role::Owner => 3,
			Role::Admin => 2,
			Role::Viewer => 1,
		}
	}

	/// Returns true if this role has at least the seniority of `required`.
	pub fn is_at_least(&self, required: Role) -> bool {
		self.rank() >= required.rank()
	}

	/// Allowlist membership test.
	///
	/// This is deliberately NOT a rank comparison: a Viewer is not "at least"
	/// an `[Admin, Owner]` allowlist entry unless explicitly listed.
	pub fn is_any_of(&self, allowed: &[Role]) -> bool {
		allowed.contains(self)
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Role::Owner => write!(f, "owner"),
			Role::Admin => write!(f, "admin"),
			Role::Viewer => write!(f, "viewer"),
		}
	}
}

/// Rank for a possibly-unknown role.
///
/// Boundary code that deserializes foreign role strings carries
/// `Option<Role>`; an unrecognized role ranks 0, below every known role.
pub fn rank_of(role: Option<Role>) -> u8 {
	role.map(|r| r.rank()).unwrap_or(0)
}

// =============================================================================
// Task Enums
// =============================================================================

/// Workflow state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
	Backlog,
	InProgress,
	Done,
}

impl fmt::Display for TaskStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TaskStatus::Backlog => write!(f, "backlog"),
			TaskStatus::InProgress => write!(f, "in_progress"),
			TaskStatus::Done => write!(f, "done"),
		}
	}
}

/// Classification of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
	Work,
	Personal,
	Learning,
}

impl fmt::Display for TaskCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TaskCategory::Work => write!(f, "work"),
			TaskCategory::Personal => write!(f, "personal"),
			TaskCategory::Learning => write!(f, "learning"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	mod ids {
		use super::*;

		#[test]
		fn id_types_roundtrip_through_uuid() {
			let uuid = Uuid::new_v4();
			let user_id = UserId::new(uuid);
			assert_eq!(user_id.into_inner(), uuid);
			assert_eq!(Uuid::from(user_id), uuid);
			assert_eq!(UserId::from(uuid), user_id);
		}

		#[test]
		fn id_display_matches_uuid_display() {
			let uuid = Uuid::new_v4();
			let org_id = OrgId::new(uuid);
			assert_eq!(org_id.to_string(), uuid.to_string());
		}

		#[test]
		fn id_serde_is_transparent() {
			let task_id = TaskId::generate();
			let json = serde_json::to_string(&task_id).unwrap();
			assert_eq!(json, format!("\"{}\"", task_id));
			let back: TaskId = serde_json::from_str(&json).unwrap();
			assert_eq!(back, task_id);
		}
	}

	mod roles {
		use super::*;

		#[test]
		fn rank_is_strictly_ordered() {
			assert!(Role::Owner.rank() > Role::Admin.rank());
			assert!(Role::Admin.rank() > Role::Viewer.rank());
		}

		#[test]
		fn every_role_is_at_least_itself() {
			for role in Role::all() {
				assert!(role.is_at_least(*role));
			}
		}

		#[test]
		fn owner_is_at_least_every_role() {
			for role in Role::all() {
				assert!(Role::Owner.is_at_least(*role));
			}
		}

		#[test]
		fn viewer_is_not_at_least_admin_or_owner() {
			assert!(!Role::Viewer.is_at_least(Role::Admin));
			assert!(!Role::Viewer.is_at_least(Role::Owner));
		}

		#[test]
		fn is_any_of_is_membership_not_rank() {
			// Owner outranks Admin but is not in an Admin-only allowlist.
			assert!(!Role::Owner.is_any_of(&[Role::Admin]));
			assert!(Role::Owner.is_any_of(&[Role::Admin, Role::Owner]));
			assert!(!Role::Viewer.is_any_of(&[Role::Admin, Role::Owner]));
		}

		#[test]
		fn unknown_role_ranks_below_every_known_role() {
			assert_eq!(rank_of(None), 0);
			for role in Role::all() {
				assert!(rank_of(Some(*role)) > rank_of(None));
			}
		}

		#[test]
		fn role_serde_uses_snake_case() {
			assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"owner\"");
			assert_eq!(
				serde_json::from_str::<Role>("\"viewer\"").unwrap(),
				Role::Viewer
			);
		}
	}
}
