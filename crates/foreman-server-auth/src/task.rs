// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Task record type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{OrgId, TaskCategory, TaskId, TaskStatus, UserId};

/// A task, as seen by the access control layer.
///
/// Update and delete checks resolve org containment against the task's own
/// `org_id`, not against a caller-supplied target org.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
	/// Unique identifier for this task.
	pub id: TaskId,

	/// Short title of the task.
	pub title: String,

	/// Optional longer description.
	pub description: Option<String>,

	/// Current workflow state.
	pub status: TaskStatus,

	/// Classification of the task.
	pub category: TaskCategory,

	/// The user who created the task, if known.
	pub created_by_user_id: Option<UserId>,

	/// The organization the task belongs to.
	pub org_id: OrgId,

	/// When the task was created.
	pub created_at: DateTime<Utc>,

	/// When the task was last updated.
	pub updated_at: DateTime<Utc>,
}

impl Task {
	/// Creates a new backlog task in the given organization.
	///
	/// Generates a new task ID and sets timestamps to now.
	pub fn new(org_id: OrgId, category: TaskCategory, title: impl Into<String>) -> Self {
		let now = Utc::now();
		Self {
			id: TaskId::generate(),
			title: title.into(),
			description: None,
			status: TaskStatus::Backlog,
			category,
			created_by_user_id: None,
			org_id,
			created_at: now,
			updated_at: now,
		}
	}

	/// Builder: set the creating user.
	pub fn created_by(mut self, user_id: UserId) -> Self {
		self.created_by_user_id = Some(user_id);
		self
	}

	/// Builder: set the description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_creates_backlog_task() {
		let org_id = OrgId::generate();
		let task = Task::new(org_id, TaskCategory::Work, "Ship the release");

		assert_eq!(task.org_id, org_id);
		assert_eq!(task.status, TaskStatus::Backlog);
		assert_eq!(task.category, TaskCategory::Work);
		assert_eq!(task.title, "Ship the release");
		assert!(task.description.is_none());
		assert!(task.created_by_user_id.is_none());
	}

	#[test]
	fn builders_set_creator_and_description() {
		let user_id = UserId::generate();
		let task = Task::new(OrgId::generate(), TaskCategory::Learning, "Read the book")
			.created_by(user_id)
			.with_description("Chapters 1-3");

		assert_eq!(task.created_by_user_id, Some(user_id));
		assert_eq!(task.description.as_deref(), Some("Chapters 1-3"));
	}
}
