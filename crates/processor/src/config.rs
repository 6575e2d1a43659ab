//! Mode configuration state machine.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::modes::{AxisLabel, DependentAxesMode, ProcessingMode, RotationMode, UpdateMode};

/// Mode selectors and constraints for one composition stage.
///
/// Every setter is idempotent: equal input returns `false` without touching
/// state, otherwise the field is committed and `true` is returned so the
/// owning node can raise the change notification. The axis-distinctness
/// invariant — primary != secondary while the dependent axes derive from
/// the secondary axis — is repaired after every transition that can break
/// it, so no caller can observe a violating pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeConfig {
	processing_mode: ProcessingMode,
	update_mode: UpdateMode,
	rotation_mode: RotationMode,
	dependent_axes_mode: DependentAxesMode,
	primary_axis: AxisLabel,
	secondary_axis: AxisLabel,
	copy_translation: [bool; 3],
	updates_per_second: f64,
}

impl Default for ModeConfig {
	fn default() -> Self {
		Self {
			processing_mode: ProcessingMode::default(),
			update_mode: UpdateMode::default(),
			rotation_mode: RotationMode::default(),
			dependent_axes_mode: DependentAxesMode::default(),
			primary_axis: AxisLabel::Z,
			secondary_axis: AxisLabel::Y,
			copy_translation: [true; 3],
			updates_per_second: 60.0,
		}
	}
}

impl ModeConfig {
	/// Creates a configuration with all fields at their defaults.
	pub fn new() -> Self {
		Self::default()
	}

	/// Selected composition algorithm.
	pub fn processing_mode(&self) -> ProcessingMode {
		self.processing_mode
	}

	/// Selected recomputation trigger.
	pub fn update_mode(&self) -> UpdateMode {
		self.update_mode
	}

	/// Selected rotation copying mode.
	pub fn rotation_mode(&self) -> RotationMode {
		self.rotation_mode
	}

	/// Selected dependent-axes derivation.
	pub fn dependent_axes_mode(&self) -> DependentAxesMode {
		self.dependent_axes_mode
	}

	/// The copied axis in single-axis rotation.
	pub fn primary_axis(&self) -> AxisLabel {
		self.primary_axis
	}

	/// The axis dependent axes are derived from in
	/// [`DependentAxesMode::FromSecondaryAxis`].
	pub fn secondary_axis(&self) -> AxisLabel {
		self.secondary_axis
	}

	/// Per-axis translation-copy flags in x, y, z order.
	pub fn copy_translation(&self) -> [bool; 3] {
		self.copy_translation
	}

	/// Whether the x translation component is copied.
	pub fn copy_translation_x(&self) -> bool {
		self.copy_translation[0]
	}

	/// Whether the y translation component is copied.
	pub fn copy_translation_y(&self) -> bool {
		self.copy_translation[1]
	}

	/// Whether the z translation component is copied.
	pub fn copy_translation_z(&self) -> bool {
		self.copy_translation[2]
	}

	/// Advisory recomputation rate for the external scheduler.
	pub fn updates_per_second(&self) -> f64 {
		self.updates_per_second
	}

	/// Selects the composition algorithm.
	pub fn set_processing_mode(&mut self, mode: ProcessingMode) -> bool {
		if self.processing_mode == mode {
			return false;
		}
		self.processing_mode = mode;
		true
	}

	/// Selects the recomputation trigger.
	pub fn set_update_mode(&mut self, mode: UpdateMode) -> bool {
		if self.update_mode == mode {
			return false;
		}
		self.update_mode = mode;
		true
	}

	/// Selects the rotation copying mode.
	pub fn set_rotation_mode(&mut self, mode: RotationMode) -> bool {
		if self.rotation_mode == mode {
			return false;
		}
		self.rotation_mode = mode;
		true
	}

	/// Selects the dependent-axes derivation, repairing a duplicate axis
	/// pair as part of the same change.
	pub fn set_dependent_axes_mode(&mut self, mode: DependentAxesMode) -> bool {
		if self.dependent_axes_mode == mode {
			return false;
		}
		self.dependent_axes_mode = mode;
		self.repair_duplicate_axes();
		true
	}

	/// Sets the primary axis label, repairing a duplicate axis pair as
	/// part of the same change.
	pub fn set_primary_axis(&mut self, axis: AxisLabel) -> bool {
		if self.primary_axis == axis {
			return false;
		}
		self.primary_axis = axis;
		self.repair_duplicate_axes();
		true
	}

	/// Sets the secondary axis label, repairing a duplicate axis pair as
	/// part of the same change.
	pub fn set_secondary_axis(&mut self, axis: AxisLabel) -> bool {
		if self.secondary_axis == axis {
			return false;
		}
		self.secondary_axis = axis;
		self.repair_duplicate_axes();
		true
	}

	/// Enables or disables copying of the x translation component.
	pub fn set_copy_translation_x(&mut self, enabled: bool) -> bool {
		if self.copy_translation[0] == enabled {
			return false;
		}
		self.copy_translation[0] = enabled;
		true
	}

	/// Enables or disables copying of the y translation component.
	pub fn set_copy_translation_y(&mut self, enabled: bool) -> bool {
		if self.copy_translation[1] == enabled {
			return false;
		}
		self.copy_translation[1] = enabled;
		true
	}

	/// Enables or disables copying of the z translation component.
	pub fn set_copy_translation_z(&mut self, enabled: bool) -> bool {
		if self.copy_translation[2] == enabled {
			return false;
		}
		self.copy_translation[2] = enabled;
		true
	}

	/// Sets the advisory scheduler rate. Any value is accepted; the rate
	/// is not interpreted here.
	pub fn set_updates_per_second(&mut self, rate: f64) -> bool {
		if self.updates_per_second == rate {
			return false;
		}
		self.updates_per_second = rate;
		true
	}

	/// Copies every field from `other`. Returns whether anything differed.
	///
	/// The axis repair is not re-run: `other` already satisfies the
	/// invariant.
	pub fn copy_from(&mut self, other: &Self) -> bool {
		if self == other {
			return false;
		}
		*self = other.clone();
		true
	}

	/// Forces the secondary axis off the primary while the dependent axes
	/// derive from the secondary axis. Z yields to Y, X and Y yield to Z.
	fn repair_duplicate_axes(&mut self) {
		if self.dependent_axes_mode != DependentAxesMode::FromSecondaryAxis {
			return;
		}
		if self.primary_axis != self.secondary_axis {
			return;
		}
		self.secondary_axis = match self.primary_axis {
			AxisLabel::Z => AxisLabel::Y,
			AxisLabel::X | AxisLabel::Y => AxisLabel::Z,
		};
		warn!(
			primary = self.primary_axis.as_str(),
			secondary = self.secondary_axis.as_str(),
			"duplicate primary and secondary axes, secondary reassigned"
		);
	}
}

impl fmt::Display for ModeConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "ProcessingMode = {}", self.processing_mode)?;
		writeln!(f, "UpdateMode = {}", self.update_mode)?;
		writeln!(f, "UpdatesPerSecond = {}", self.updates_per_second)?;
		writeln!(f, "RotationMode = {}", self.rotation_mode)?;
		writeln!(f, "PrimaryAxisLabel = {}", self.primary_axis)?;
		writeln!(f, "DependentAxesMode = {}", self.dependent_axes_mode)?;
		writeln!(f, "SecondaryAxisLabel = {}", self.secondary_axis)?;
		writeln!(f, "CopyTranslationX = {}", self.copy_translation[0])?;
		writeln!(f, "CopyTranslationY = {}", self.copy_translation[1])?;
		writeln!(f, "CopyTranslationZ = {}", self.copy_translation[2])
	}
}
