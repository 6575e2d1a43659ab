//! Named-role reference table.
//!
//! Maps a fixed set of roles to ordered lists of entity handles, enforcing
//! per-role cardinality. The table is pure state: mutators report what
//! changed so the owning node can gate observation bookkeeping and the
//! change notification ([`crate::node::ProcessorNode`]).

use gimbal_primitives::TransformHandle;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RoleError};

/// Fixed set of named slots a referenced transform can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
	/// Source frame of a relative transform.
	FromTransform,
	/// Target frame of a relative transform.
	ToTransform,
	/// Baseline pose captured before a change.
	InitialTransform,
	/// Pose observed after a change.
	ChangedTransform,
	/// Frame the changed pose is re-anchored to.
	AnchorTransform,
	/// Input to inversion.
	ForwardTransform,
	/// Slot the computed result is written to.
	OutputTransform,
	/// Inputs to combination, order is observation order.
	CombineTransform,
}

impl Role {
	/// All roles in declaration order.
	pub const ALL: [Self; 8] = [
		Self::FromTransform,
		Self::ToTransform,
		Self::InitialTransform,
		Self::ChangedTransform,
		Self::AnchorTransform,
		Self::ForwardTransform,
		Self::OutputTransform,
		Self::CombineTransform,
	];

	/// Canonical role name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::FromTransform => "FromTransform",
			Self::ToTransform => "ToTransform",
			Self::InitialTransform => "InitialTransform",
			Self::ChangedTransform => "ChangedTransform",
			Self::AnchorTransform => "AnchorTransform",
			Self::ForwardTransform => "ForwardTransform",
			Self::OutputTransform => "OutputTransform",
			Self::CombineTransform => "CombineTransform",
		}
	}

	/// Looks up a role by its canonical name.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|r| r.as_str() == name)
	}

	/// Cardinality of the role. Only `CombineTransform` holds a list.
	pub const fn cardinality(self) -> Cardinality {
		match self {
			Self::CombineTransform => Cardinality::Multi,
			_ => Cardinality::Single,
		}
	}

	/// Whether the role feeds the computation. Everything except the
	/// output slot is an input.
	pub const fn is_input(self) -> bool {
		!matches!(self, Self::OutputTransform)
	}
}

impl core::fmt::Display for Role {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Cardinality class of a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
	/// At most one reference.
	Single,
	/// Zero or more references, duplicate-free.
	Multi,
}

impl core::fmt::Display for Cardinality {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(match self {
			Self::Single => "single",
			Self::Multi => "multi",
		})
	}
}

/// Outcome of a committed single-role assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetSingle {
	/// The handle already equals the stored reference; nothing changed.
	Unchanged,
	/// The reference was replaced; the caller releases `previous`.
	Replaced {
		/// The reference that was displaced, if any.
		previous: Option<TransformHandle>,
	},
}

/// Ordered handle lists keyed by role, with cardinality enforcement.
#[derive(Debug, Default)]
pub struct RoleTable {
	entries: FxHashMap<Role, Vec<TransformHandle>>,
}

impl RoleTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the sole reference of a single-valued role; `None` clears.
	///
	/// Assigning the current reference again is reported as
	/// [`SetSingle::Unchanged`] so the caller can skip notification.
	pub fn set_single(
		&mut self,
		role: Role,
		handle: Option<TransformHandle>,
	) -> Result<SetSingle> {
		if role.cardinality() != Cardinality::Single {
			return Err(RoleError::InvalidRole {
				role,
				expected: Cardinality::Single,
			});
		}
		let previous = self.first(role);
		if previous == handle {
			return Ok(SetSingle::Unchanged);
		}
		let slot = self.entries.entry(role).or_default();
		slot.clear();
		if let Some(handle) = handle {
			slot.push(handle);
		}
		Ok(SetSingle::Replaced { previous })
	}

	/// Appends a handle to a multi-valued role, keeping the list
	/// duplicate-free by identity. Returns whether an entry was added.
	pub fn add_multi(&mut self, role: Role, handle: TransformHandle) -> Result<bool> {
		if role.cardinality() != Cardinality::Multi {
			return Err(RoleError::InvalidRole {
				role,
				expected: Cardinality::Multi,
			});
		}
		let slot = self.entries.entry(role).or_default();
		if slot.contains(&handle) {
			return Ok(false);
		}
		slot.push(handle);
		Ok(true)
	}

	/// Removes and returns the entry at `index`.
	pub fn remove_at(&mut self, role: Role, index: usize) -> Result<TransformHandle> {
		let len = self.count(role);
		if index >= len {
			return Err(RoleError::IndexOutOfRange { role, index, len });
		}
		let slot = self.entries.get_mut(&role).expect("indexed role has entries");
		Ok(slot.remove(index))
	}

	/// Returns the handle at `index`, or `None` when absent or out of
	/// range. Never fails for a known role.
	pub fn get(&self, role: Role, index: usize) -> Option<TransformHandle> {
		self.entries.get(&role).and_then(|slot| slot.get(index)).copied()
	}

	/// Returns the first handle of a role, if any.
	pub fn first(&self, role: Role) -> Option<TransformHandle> {
		self.get(role, 0)
	}

	/// Number of entries currently held for the role.
	pub fn count(&self, role: Role) -> usize {
		self.entries.get(&role).map_or(0, Vec::len)
	}

	/// Iterates the handles stored for a role in observation order.
	pub fn iter_role(&self, role: Role) -> impl Iterator<Item = TransformHandle> + '_ {
		self.entries.get(&role).into_iter().flatten().copied()
	}

	/// Whether any input role currently references `handle`.
	pub fn input_references(&self, handle: TransformHandle) -> bool {
		Role::ALL
			.into_iter()
			.filter(|role| role.is_input())
			.any(|role| self.iter_role(role).any(|h| h == handle))
	}
}
