// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User record type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{OrgId, Role, UserId};

/// A user account, as seen by the access control layer.
///
/// A user belongs to exactly one organization; the set of organizations a
/// user can operate across is always derived from the org hierarchy at
/// evaluation time, never stored on the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
	/// Unique identifier for this user.
	pub id: UserId,

	/// Login email address.
	pub email: String,

	/// Human-readable display name.
	pub display_name: String,

	/// The user's home organization. Immutable after creation.
	pub org_id: OrgId,

	/// The user's role within their home organization.
	pub role: Role,

	/// When the user was created.
	pub created_at: DateTime<Utc>,

	/// When the user was last updated.
	pub updated_at: DateTime<Utc>,
}

impl User {
	/// Creates a new user in the given organization with the given role.
	///
	/// Generates a new user ID and sets timestamps to now.
	pub fn new(
		org_id: OrgId,
		role: Role,
		email: impl Into<String>,
		display_name: impl Into<String>,
	) -> Self {
		let now = Utc::now();
		Self {
			id: UserId::generate(),
			email: email.into(),
			display_name: display_name.into(),
			org_id,
			role,
			created_at: now,
			updated_at: now,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_creates_user_with_generated_id() {
		let org_id = OrgId::generate();
		let user = User::new(org_id, Role::Admin, "alex@example.com", "Alex");

		assert_eq!(user.org_id, org_id);
		assert_eq!(user.role, Role::Admin);
		assert_eq!(user.email, "alex@example.com");
		assert_eq!(user.display_name, "Alex");
	}
}
