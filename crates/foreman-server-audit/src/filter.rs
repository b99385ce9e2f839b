// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Audit trail query filter.
//!
//! [`AuditLogFilter`] is the value object the query layer consumes when
//! listing audit records; everything is optional and pagination falls back
//! to sensible defaults. The filter carries no org scoping of its own — the
//! caller pairs it with the org-id set from
//! [`crate::scope::accessible_org_ids_for_audit`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::AuditAction;
use foreman_server_auth::UserId;

/// Default page number when none is requested.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size when none is requested.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Filter criteria for listing audit records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditLogFilter {
	/// Restrict to a single action.
	pub action: Option<AuditAction>,

	/// Restrict to records produced by a single user.
	pub user_id: Option<UserId>,

	/// Restrict to a resource type (e.g., "task").
	pub resource_type: Option<String>,

	/// Restrict to a single resource id.
	pub resource_id: Option<String>,

	/// Inclusive lower timestamp bound.
	pub from: Option<DateTime<Utc>>,

	/// Inclusive upper timestamp bound.
	pub to: Option<DateTime<Utc>>,

	/// 1-based page number.
	pub page: Option<u32>,

	/// Records per page.
	pub page_size: Option<u32>,
}

impl AuditLogFilter {
	/// The requested page, defaulting to [`DEFAULT_PAGE`].
	pub fn effective_page(&self) -> u32 {
		self.page.unwrap_or(DEFAULT_PAGE).max(1)
	}

	/// The requested page size, defaulting to [`DEFAULT_PAGE_SIZE`].
	pub fn effective_page_size(&self) -> u32 {
		self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
	}

	/// Number of records to skip for the requested page.
	pub fn offset(&self) -> u64 {
		u64::from(self.effective_page() - 1) * u64::from(self.effective_page_size())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_apply_when_unset() {
		let filter = AuditLogFilter::default();
		assert_eq!(filter.effective_page(), 1);
		assert_eq!(filter.effective_page_size(), 20);
		assert_eq!(filter.offset(), 0);
	}

	#[test]
	fn offset_skips_previous_pages() {
		let filter = AuditLogFilter {
			page: Some(3),
			page_size: Some(50),
			..Default::default()
		};
		assert_eq!(filter.offset(), 100);
	}

	#[test]
	fn zero_page_clamps_to_first() {
		let filter = AuditLogFilter {
			page: Some(0),
			..Default::default()
		};
		assert_eq!(filter.effective_page(), 1);
		assert_eq!(filter.offset(), 0);
	}
}
