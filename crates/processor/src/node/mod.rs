//! Combined configuration node.
//!
//! [`ProcessorNode`] owns the role table, the mode configuration, and the
//! change signal, and routes every mutation so that exactly one
//! configuration-changed notification is raised per call that commits
//! state, after the commit. Handles referenced by roles are observed
//! through the injected directory for as long as they stay referenced.

use std::rc::Rc;

use gimbal_primitives::{ChangeSignal, SubscriberId, TransformDirectory, TransformHandle};
use tracing::debug;

use crate::config::ModeConfig;
use crate::error::Result;
use crate::roles::{Role, RoleTable, SetSingle};

mod accessors;
#[cfg(test)]
mod tests;

/// Configuration node for one transform-composition stage.
pub struct ProcessorNode {
	roles: RoleTable,
	config: ModeConfig,
	changed: ChangeSignal,
	directory: Rc<dyn TransformDirectory>,
}

impl ProcessorNode {
	/// Creates a node with default configuration bound to a directory.
	pub fn new(directory: Rc<dyn TransformDirectory>) -> Self {
		Self {
			roles: RoleTable::new(),
			config: ModeConfig::new(),
			changed: ChangeSignal::new(),
			directory,
		}
	}

	/// Subscribes to the configuration-changed signal.
	pub fn subscribe(&self, callback: impl FnMut() + 'static) -> SubscriberId {
		self.changed.subscribe(callback)
	}

	/// Drops a subscription. Returns false when the id was already gone.
	pub fn unsubscribe(&self, id: SubscriberId) -> bool {
		self.changed.unsubscribe(id)
	}

	/// Replaces the sole reference of a single-valued role; `None` clears.
	/// Re-assigning the current handle is a no-op without notification.
	pub fn set_single(&mut self, role: Role, handle: Option<TransformHandle>) -> Result<()> {
		match self.roles.set_single(role, handle)? {
			SetSingle::Unchanged => Ok(()),
			SetSingle::Replaced { previous } => {
				if let Some(previous) = previous {
					self.directory.release(previous);
				}
				if let Some(handle) = handle {
					self.directory.observe(handle);
				}
				debug!(role = role.as_str(), "single reference replaced");
				self.changed.emit();
				Ok(())
			}
		}
	}

	/// Appends a reference to a multi-valued role. Absent and duplicate
	/// handles are no-ops without notification.
	pub fn add_multi(&mut self, role: Role, handle: Option<TransformHandle>) -> Result<()> {
		let Some(handle) = handle else {
			return Ok(());
		};
		if self.roles.add_multi(role, handle)? {
			self.directory.observe(handle);
			debug!(role = role.as_str(), "reference appended");
			self.changed.emit();
		}
		Ok(())
	}

	/// Removes the reference at `index`. Every successful removal
	/// notifies; removal carries no idempotence guard.
	pub fn remove_at(&mut self, role: Role, index: usize) -> Result<()> {
		let removed = self.roles.remove_at(role, index)?;
		self.directory.release(removed);
		debug!(role = role.as_str(), index, "reference removed");
		self.changed.emit();
		Ok(())
	}

	/// Returns the stored handle at `index` for a role, ignoring whether
	/// it still resolves.
	pub fn get(&self, role: Role, index: usize) -> Option<TransformHandle> {
		self.roles.get(role, index)
	}

	/// Returns the first stored handle for a role.
	pub fn first(&self, role: Role) -> Option<TransformHandle> {
		self.roles.first(role)
	}

	/// Number of stored references for a role.
	pub fn count(&self, role: Role) -> usize {
		self.roles.count(role)
	}

	/// Returns the handle at `index` only while the directory still
	/// resolves it. The stored reference is kept either way: the directory
	/// announces removals, and the owner clears the slot in response.
	pub fn resolve(&self, role: Role, index: usize) -> Option<TransformHandle> {
		self.roles
			.get(role, index)
			.filter(|&handle| self.directory.resolve(handle))
	}

	/// Number of references for a role the directory still resolves.
	pub fn resolved_count(&self, role: Role) -> usize {
		self.roles
			.iter_role(role)
			.filter(|&handle| self.directory.resolve(handle))
			.count()
	}

	/// Read-only view of the mode configuration.
	pub fn config(&self) -> &ModeConfig {
		&self.config
	}

	/// Copies every mode field from `other` as one logical change, with at
	/// most one notification.
	pub fn copy_config_from(&mut self, other: &ModeConfig) {
		if self.config.copy_from(other) {
			self.changed.emit();
		}
	}

	/// Reacts to a directory report that an observed entity changed:
	/// re-emits the configuration-changed signal when the entity is
	/// referenced by an input role, otherwise ignores it.
	pub fn entity_changed(&self, handle: TransformHandle) {
		if self.roles.input_references(handle) {
			self.changed.emit();
		}
	}
}

impl core::fmt::Debug for ProcessorNode {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("ProcessorNode")
			.field("roles", &self.roles)
			.field("config", &self.config)
			.field("changed", &self.changed)
			.finish_non_exhaustive()
	}
}
