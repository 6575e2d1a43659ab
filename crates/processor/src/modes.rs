//! Enumerated mode selectors and their canonical display strings.
//!
//! Every enum maps one-to-one onto a display string and back:
//! `from_name(v.as_str()) == Some(v)` for all variants. Raw discriminants
//! map by declaration order. `parse_or_default` is the lenient surface for
//! persisted text: unrecognized input falls back to the documented default
//! with a warning instead of failing, so a forward-incompatible value never
//! aborts a configuration load.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Transform-composition algorithm selected for the stage.
///
/// The configuration only stores the selection; the numeric stage
/// downstream interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProcessingMode {
	/// Average the rotations of the combine inputs.
	#[default]
	QuaternionAverage,
	/// Derive a pivot from the shaft direction of the input.
	ComputeShaftPivot,
	/// Copy rotation only, subject to the rotation mode.
	ComputeRotation,
	/// Copy translation only, subject to the per-axis flags.
	ComputeTranslation,
	/// Compute the full relative transform between the from/to inputs.
	ComputeFullTransform,
	/// Invert the forward input.
	ComputeInverse,
}

impl ProcessingMode {
	/// All variants in declaration order.
	pub const ALL: [Self; 6] = [
		Self::QuaternionAverage,
		Self::ComputeShaftPivot,
		Self::ComputeRotation,
		Self::ComputeTranslation,
		Self::ComputeFullTransform,
		Self::ComputeInverse,
	];

	/// Canonical display string.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::QuaternionAverage => "Quaternion Average",
			Self::ComputeShaftPivot => "Compute Shaft Pivot",
			Self::ComputeRotation => "Compute Rotation Only",
			Self::ComputeTranslation => "Compute Translation Only",
			Self::ComputeFullTransform => "Compute Full Transform",
			Self::ComputeInverse => "Compute Inverse",
		}
	}
}

/// When the stage recomputes its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UpdateMode {
	/// Recompute only on explicit request.
	#[default]
	Manual,
	/// Recompute whenever an input changes.
	Auto,
}

impl UpdateMode {
	/// All variants in declaration order.
	pub const ALL: [Self; 2] = [Self::Manual, Self::Auto];

	/// Canonical display string.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Manual => "Manual Update",
			Self::Auto => "Auto-Update",
		}
	}
}

/// How much of the input rotation is carried into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RotationMode {
	/// Copy the full orientation.
	#[default]
	CopyAllAxes,
	/// Copy the primary axis only; dependent axes are derived.
	CopySingleAxis,
}

impl RotationMode {
	/// All variants in declaration order.
	pub const ALL: [Self; 2] = [Self::CopyAllAxes, Self::CopySingleAxis];

	/// Canonical display string.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::CopyAllAxes => "Copy All Axes",
			Self::CopySingleAxis => "Copy Single Axis",
		}
	}
}

/// How dependent axes are derived in single-axis rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DependentAxesMode {
	/// Derive from a computed pivot point.
	#[default]
	FromPivot,
	/// Derive from the explicitly chosen secondary axis label.
	FromSecondaryAxis,
}

impl DependentAxesMode {
	/// All variants in declaration order.
	pub const ALL: [Self; 2] = [Self::FromPivot, Self::FromSecondaryAxis];

	/// Canonical display string.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::FromPivot => "From Pivot",
			Self::FromSecondaryAxis => "From Secondary Axis",
		}
	}
}

/// Coordinate axis named by the primary/secondary axis fields.
///
/// There is no type-level default: the primary axis field defaults to Z and
/// the secondary to Y, so the lenient parse takes the fallback per field
/// (see [`AxisLabel::parse_or`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisLabel {
	/// The x axis.
	X,
	/// The y axis.
	Y,
	/// The z axis.
	Z,
}

impl AxisLabel {
	/// All variants in declaration order.
	pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

	/// Canonical display string.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::X => "X Axis",
			Self::Y => "Y Axis",
			Self::Z => "Z Axis",
		}
	}

	/// Parses a canonical display string, falling back to the owning
	/// field's default for unrecognized input.
	pub fn parse_or(name: &str, fallback: Self) -> Self {
		Self::from_name(name).unwrap_or_else(|| {
			warn!(
				value = name,
				fallback = fallback.as_str(),
				"unrecognized axis label"
			);
			fallback
		})
	}
}

macro_rules! name_table {
	($ty:ident) => {
		impl $ty {
			/// Looks up a variant by its canonical display string.
			pub fn from_name(name: &str) -> Option<Self> {
				Self::ALL.into_iter().find(|v| v.as_str() == name)
			}

			/// Maps a raw declaration-order discriminant.
			pub fn from_raw(raw: i64) -> Option<Self> {
				usize::try_from(raw)
					.ok()
					.and_then(|idx| Self::ALL.get(idx).copied())
			}
		}

		impl core::fmt::Display for $ty {
			fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
				f.write_str(self.as_str())
			}
		}
	};
}

macro_rules! parse_or_default {
	($ty:ident, $what:literal) => {
		impl $ty {
			/// Parses a canonical display string, falling back to the
			/// default for unrecognized input.
			pub fn parse_or_default(name: &str) -> Self {
				Self::from_name(name).unwrap_or_else(|| {
					warn!(field = $what, value = name, "unrecognized value, using default");
					Self::default()
				})
			}
		}
	};
}

name_table!(ProcessingMode);
name_table!(UpdateMode);
name_table!(RotationMode);
name_table!(DependentAxesMode);
name_table!(AxisLabel);

parse_or_default!(ProcessingMode, "processing mode");
parse_or_default!(UpdateMode, "update mode");
parse_or_default!(RotationMode, "rotation mode");
parse_or_default!(DependentAxesMode, "dependent axes mode");

#[cfg(test)]
mod tests {
	use super::{AxisLabel, DependentAxesMode, ProcessingMode, RotationMode, UpdateMode};

	#[test]
	fn test_processing_mode_round_trip() {
		for mode in ProcessingMode::ALL {
			assert_eq!(ProcessingMode::from_name(mode.as_str()), Some(mode));
		}
	}

	#[test]
	fn test_update_mode_round_trip() {
		for mode in UpdateMode::ALL {
			assert_eq!(UpdateMode::from_name(mode.as_str()), Some(mode));
		}
	}

	#[test]
	fn test_rotation_mode_round_trip() {
		for mode in RotationMode::ALL {
			assert_eq!(RotationMode::from_name(mode.as_str()), Some(mode));
		}
	}

	#[test]
	fn test_dependent_axes_mode_round_trip() {
		for mode in DependentAxesMode::ALL {
			assert_eq!(DependentAxesMode::from_name(mode.as_str()), Some(mode));
		}
	}

	#[test]
	fn test_axis_label_round_trip() {
		for axis in AxisLabel::ALL {
			assert_eq!(AxisLabel::from_name(axis.as_str()), Some(axis));
		}
	}

	#[test]
	fn test_unrecognized_name_falls_back_to_default() {
		assert_eq!(
			ProcessingMode::parse_or_default("garbage"),
			ProcessingMode::QuaternionAverage
		);
		assert_eq!(UpdateMode::parse_or_default("garbage"), UpdateMode::Manual);
		assert_eq!(
			RotationMode::parse_or_default("garbage"),
			RotationMode::CopyAllAxes
		);
		assert_eq!(
			DependentAxesMode::parse_or_default("garbage"),
			DependentAxesMode::FromPivot
		);
	}

	#[test]
	fn test_axis_parse_falls_back_per_field() {
		assert_eq!(AxisLabel::parse_or("garbage", AxisLabel::Z), AxisLabel::Z);
		assert_eq!(AxisLabel::parse_or("garbage", AxisLabel::Y), AxisLabel::Y);
		assert_eq!(AxisLabel::parse_or("X Axis", AxisLabel::Z), AxisLabel::X);
	}

	#[test]
	fn test_from_raw_maps_declaration_order() {
		assert_eq!(
			ProcessingMode::from_raw(0),
			Some(ProcessingMode::QuaternionAverage)
		);
		assert_eq!(
			ProcessingMode::from_raw(5),
			Some(ProcessingMode::ComputeInverse)
		);
		assert_eq!(ProcessingMode::from_raw(6), None);
		assert_eq!(ProcessingMode::from_raw(-1), None);
		assert_eq!(AxisLabel::from_raw(2), Some(AxisLabel::Z));
	}

	#[test]
	fn test_names_are_case_sensitive() {
		assert_eq!(UpdateMode::from_name("manual update"), None);
		assert_eq!(UpdateMode::from_name("Manual Update"), Some(UpdateMode::Manual));
	}
}
