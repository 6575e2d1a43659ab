use serde::{Deserialize, Serialize};

/// Opaque reference to an externally owned transform entity.
///
/// Handles are minted by the directory that owns the entities; this crate
/// never dereferences one. Equality is identity equality: two handles name
/// the same entity iff their raw values match. An absent reference is
/// `Option<TransformHandle>`, never a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransformHandle(u64);

impl TransformHandle {
	/// Wraps a raw directory-assigned id.
	pub const fn from_raw(raw: u64) -> Self {
		Self(raw)
	}

	/// Returns the raw directory-assigned id.
	pub const fn as_raw(self) -> u64 {
		self.0
	}
}

impl core::fmt::Display for TransformHandle {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "#{}", self.0)
	}
}
