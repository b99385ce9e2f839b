// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

pub mod error;
pub mod event;
pub mod filter;
pub mod scope;

pub use error::{AuditError, AuditResult};
pub use event::{AuditAction, AuditLogBuilder, AuditLogEntry};
pub use filter::{AuditLogFilter, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use scope::{accessible_org_ids_for_audit, OrgDirectory};
