// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use thiserror::Error;

pub type AuditResult<T> = Result<T, AuditError>;

#[derive(Error, Debug)]
pub enum AuditError {
	/// The org directory collaborator failed. Propagated unchanged to the
	/// caller; a silent home-org-only fallback would be a visibility bug.
	#[error("org lookup failed: {source}")]
	Lookup {
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},
}

impl AuditError {
	/// Wraps a collaborator failure.
	pub fn lookup(source: impl std::error::Error + Send + Sync + 'static) -> Self {
		Self::Lookup {
			source: Box::new(source),
		}
	}
}
