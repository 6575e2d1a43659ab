use crate::handle::TransformHandle;

/// Resolve/observe capability provided by the external entity directory.
///
/// The configuration core holds non-owning references; the directory owns
/// the entities and their lifecycle. `observe`/`release` bracket the span
/// during which a handle is referenced by some role, so the directory can
/// forward that entity's change events to the configuration owner. The
/// directory also announces entity removal; the owner translates that into
/// clearing the stored reference, the core never does so on its own.
pub trait TransformDirectory {
	/// Returns whether the handle still resolves to a live entity.
	fn resolve(&self, handle: TransformHandle) -> bool;

	/// Starts forwarding change events for `handle`.
	fn observe(&self, handle: TransformHandle);

	/// Stops forwarding change events for `handle`.
	fn release(&self, handle: TransformHandle);
}
