//! Configuration core for a transform-composition pipeline stage.
//!
//! A [`ProcessorNode`] records which named input/output entities participate
//! in a composition, which computation mode is active, and a small set of
//! mode-dependent constraints. Every mutation that commits state raises one
//! configuration-changed notification; no-op mutations raise none. The
//! numeric transform math lives downstream and only consumes this
//! configuration.
//!
//! Two invariants are maintained at all times:
//! - a multi-valued role never holds the same handle twice, and
//! - the primary and secondary axis labels differ whenever the dependent
//!   axes derive from the secondary axis (repaired, not rejected).

/// Mode configuration state machine.
pub mod config;
/// Structural error types for role-table misuse.
pub mod error;
/// Enumerated mode selectors and their canonical display strings.
pub mod modes;
/// Combined configuration node with notification and observation.
pub mod node;
/// Named-role reference table.
pub mod roles;

pub use config::ModeConfig;
pub use error::{Result, RoleError};
pub use modes::{AxisLabel, DependentAxesMode, ProcessingMode, RotationMode, UpdateMode};
pub use node::ProcessorNode;
pub use roles::{Cardinality, Role, RoleTable, SetSingle};
