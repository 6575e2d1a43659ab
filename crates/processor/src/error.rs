//! Error types for role-table operations.

use thiserror::Error;

use crate::roles::{Cardinality, Role};

/// Errors raised by structural misuse of the role table.
///
/// Only caller bugs surface here: addressing a role with the wrong
/// cardinality, or indexing past a role's current size. Out-of-domain mode
/// values are deliberately not errors — they are warned no-ops, so loading
/// a mostly valid persisted configuration never aborts.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RoleError {
	/// The operation requires a role of the other cardinality.
	#[error("role `{role}` is not {expected}-valued")]
	InvalidRole {
		/// The role that was addressed.
		role: Role,
		/// The cardinality the operation requires.
		expected: Cardinality,
	},

	/// The index is outside the role's current entry list.
	#[error("index {index} out of range for role `{role}` with {len} entries")]
	IndexOutOfRange {
		/// The role that was addressed.
		role: Role,
		/// The requested index.
		index: usize,
		/// The role's entry count at the time of the call.
		len: usize,
	},
}

/// Result type for role-table operations.
pub type Result<T> = std::result::Result<T, RoleError>;
