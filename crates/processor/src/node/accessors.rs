//! Convenience accessors over the generic role and mode surface.
//!
//! The node exposes one getter/setter family per mode field and per role,
//! so callers and adapters do not thread [`Role`] constants or enum types
//! through every call site. String and raw variants of the mode setters
//! carry the lenient policy for data-driven input: out-of-domain values are
//! warned no-ops that keep the prior value.

use gimbal_primitives::TransformHandle;
use tracing::warn;

use super::ProcessorNode;
use crate::error::Result;
use crate::modes::{AxisLabel, DependentAxesMode, ProcessingMode, RotationMode, UpdateMode};
use crate::roles::Role;

macro_rules! mode_field {
	($ty:ident, $what:literal, $get:ident, $set:ident, $set_str:ident, $set_raw:ident) => {
		impl ProcessorNode {
			#[doc = concat!("Returns the ", $what, ".")]
			pub fn $get(&self) -> $ty {
				self.config.$get()
			}

			#[doc = concat!("Sets the ", $what, ". Equal values are no-ops without notification.")]
			pub fn $set(&mut self, value: $ty) {
				if self.config.$set(value) {
					self.changed.emit();
				}
			}

			#[doc = concat!("Sets the ", $what, " from its canonical display string. ")]
			#[doc = "Unrecognized input is a warned no-op that keeps the prior value."]
			pub fn $set_str(&mut self, name: &str) {
				match $ty::from_name(name) {
					Some(value) => self.$set(value),
					None => warn!(
						field = $what,
						value = name,
						"unrecognized value, keeping previous"
					),
				}
			}

			#[doc = concat!("Sets the ", $what, " from a raw declaration-order discriminant. ")]
			#[doc = "Out-of-range input is a warned no-op that keeps the prior value."]
			pub fn $set_raw(&mut self, raw: i64) {
				match $ty::from_raw(raw) {
					Some(value) => self.$set(value),
					None => warn!(
						field = $what,
						value = raw,
						"out-of-range value, keeping previous"
					),
				}
			}
		}
	};
}

mode_field!(
	ProcessingMode,
	"processing mode",
	processing_mode,
	set_processing_mode,
	set_processing_mode_str,
	set_processing_mode_raw
);
mode_field!(
	UpdateMode,
	"update mode",
	update_mode,
	set_update_mode,
	set_update_mode_str,
	set_update_mode_raw
);
mode_field!(
	RotationMode,
	"rotation mode",
	rotation_mode,
	set_rotation_mode,
	set_rotation_mode_str,
	set_rotation_mode_raw
);
mode_field!(
	DependentAxesMode,
	"dependent axes mode",
	dependent_axes_mode,
	set_dependent_axes_mode,
	set_dependent_axes_mode_str,
	set_dependent_axes_mode_raw
);
mode_field!(
	AxisLabel,
	"primary axis label",
	primary_axis,
	set_primary_axis,
	set_primary_axis_str,
	set_primary_axis_raw
);
mode_field!(
	AxisLabel,
	"secondary axis label",
	secondary_axis,
	set_secondary_axis,
	set_secondary_axis_str,
	set_secondary_axis_raw
);

impl ProcessorNode {
	/// Whether the x translation component is copied.
	pub fn copy_translation_x(&self) -> bool {
		self.config.copy_translation_x()
	}

	/// Enables or disables copying of the x translation component.
	pub fn set_copy_translation_x(&mut self, enabled: bool) {
		if self.config.set_copy_translation_x(enabled) {
			self.changed.emit();
		}
	}

	/// Whether the y translation component is copied.
	pub fn copy_translation_y(&self) -> bool {
		self.config.copy_translation_y()
	}

	/// Enables or disables copying of the y translation component.
	pub fn set_copy_translation_y(&mut self, enabled: bool) {
		if self.config.set_copy_translation_y(enabled) {
			self.changed.emit();
		}
	}

	/// Whether the z translation component is copied.
	pub fn copy_translation_z(&self) -> bool {
		self.config.copy_translation_z()
	}

	/// Enables or disables copying of the z translation component.
	pub fn set_copy_translation_z(&mut self, enabled: bool) {
		if self.config.set_copy_translation_z(enabled) {
			self.changed.emit();
		}
	}

	/// Advisory recomputation rate for the external scheduler.
	pub fn updates_per_second(&self) -> f64 {
		self.config.updates_per_second()
	}

	/// Sets the advisory scheduler rate. Any value is accepted.
	pub fn set_updates_per_second(&mut self, rate: f64) {
		if self.config.set_updates_per_second(rate) {
			self.changed.emit();
		}
	}
}

macro_rules! single_role {
	($role:expr, $what:literal, $get:ident, $set:ident) => {
		impl ProcessorNode {
			#[doc = concat!("Returns the ", $what, " reference.")]
			pub fn $get(&self) -> Option<TransformHandle> {
				self.first($role)
			}

			#[doc = concat!("Replaces the ", $what, " reference; `None` clears it.")]
			pub fn $set(&mut self, handle: Option<TransformHandle>) {
				self.set_single($role, handle).expect("single-valued role");
			}
		}
	};
}

single_role!(Role::FromTransform, "from-transform", from_transform, set_from_transform);
single_role!(Role::ToTransform, "to-transform", to_transform, set_to_transform);
single_role!(
	Role::InitialTransform,
	"initial-transform",
	initial_transform,
	set_initial_transform
);
single_role!(
	Role::ChangedTransform,
	"changed-transform",
	changed_transform,
	set_changed_transform
);
single_role!(
	Role::AnchorTransform,
	"anchor-transform",
	anchor_transform,
	set_anchor_transform
);
single_role!(
	Role::ForwardTransform,
	"forward-transform",
	forward_transform,
	set_forward_transform
);
single_role!(
	Role::OutputTransform,
	"output-transform",
	output_transform,
	set_output_transform
);

impl ProcessorNode {
	/// Appends a combine input. Absent and duplicate handles are no-ops.
	pub fn add_combine_transform(&mut self, handle: Option<TransformHandle>) {
		self.add_multi(Role::CombineTransform, handle)
			.expect("multi-valued role");
	}

	/// Removes the combine input at `index`.
	pub fn remove_combine_transform_at(&mut self, index: usize) -> Result<()> {
		self.remove_at(Role::CombineTransform, index)
	}

	/// Returns the combine input at `index`.
	pub fn combine_transform(&self, index: usize) -> Option<TransformHandle> {
		self.get(Role::CombineTransform, index)
	}

	/// Number of combine inputs.
	pub fn combine_transform_count(&self) -> usize {
		self.count(Role::CombineTransform)
	}
}
