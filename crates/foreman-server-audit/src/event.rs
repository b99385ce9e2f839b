// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the audit trail.
//!
//! This module provides the foundational types for audit records:
//!
//! - [`AuditAction`]: Enumeration of auditable actions
//! - [`AuditLogEntry`]: A complete audit record
//! - [`AuditLogBuilder`]: Fluent API for constructing entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use foreman_server_auth::UserId;

/// Actions that are recorded in the audit trail.
///
/// Serialized in SCREAMING_SNAKE_CASE to match the stored wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
	Create,
	Read,
	Update,
	Delete,
}

impl fmt::Display for AuditAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AuditAction::Create => write!(f, "CREATE"),
			AuditAction::Read => write!(f, "READ"),
			AuditAction::Update => write!(f, "UPDATE"),
			AuditAction::Delete => write!(f, "DELETE"),
		}
	}
}

/// A single record in the audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
	/// Unique identifier for this audit entry.
	pub id: Uuid,

	/// The user who performed the action.
	pub user_id: UserId,

	/// The action performed.
	pub action: AuditAction,

	/// The type of resource affected (e.g., "task", "organization").
	pub resource_type: String,

	/// The ID of the resource affected.
	pub resource_id: String,

	/// Additional event-specific details.
	pub metadata: Option<serde_json::Value>,

	/// When the event occurred.
	pub timestamp: DateTime<Utc>,
}

impl AuditLogEntry {
	/// Create a new audit log builder for the given actor and action.
	pub fn builder(user_id: UserId, action: AuditAction) -> AuditLogBuilder {
		AuditLogBuilder::new(user_id, action)
	}

	/// Convenience constructor for a task-scoped audit record.
	pub fn task_action(
		user_id: UserId,
		action: AuditAction,
		task_id: impl fmt::Display,
	) -> Self {
		Self::builder(user_id, action)
			.resource("task", task_id.to_string())
			.build()
	}
}

/// Builder for constructing audit log entries with a fluent API.
#[derive(Debug, Clone)]
pub struct AuditLogBuilder {
	user_id: UserId,
	action: AuditAction,
	resource_type: Option<String>,
	resource_id: Option<String>,
	metadata: Option<serde_json::Value>,
}

impl AuditLogBuilder {
	/// Starts a builder for the given actor and action.
	pub fn new(user_id: UserId, action: AuditAction) -> Self {
		Self {
			user_id,
			action,
			resource_type: None,
			resource_id: None,
			metadata: None,
		}
	}

	/// Sets the affected resource.
	pub fn resource(mut self, resource_type: impl Into<String>, resource_id: impl Into<String>) -> Self {
		self.resource_type = Some(resource_type.into());
		self.resource_id = Some(resource_id.into());
		self
	}

	/// Attaches event-specific details.
	pub fn metadata(mut self, metadata: serde_json::Value) -> Self {
		self.metadata = Some(metadata);
		self
	}

	/// Finalizes the entry, generating its id and timestamp.
	pub fn build(self) -> AuditLogEntry {
		AuditLogEntry {
			id: Uuid::new_v4(),
			user_id: self.user_id,
			action: self.action,
			resource_type: self.resource_type.unwrap_or_default(),
			resource_id: self.resource_id.unwrap_or_default(),
			metadata: self.metadata,
			timestamp: Utc::now(),
		}
	}
}
