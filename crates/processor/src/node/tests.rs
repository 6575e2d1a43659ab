//! Unit tests for the combined node: notification discipline, observation
//! bookkeeping, and the mode state machine end to end against a fake
//! directory.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gimbal_primitives::{TransformDirectory, TransformHandle};

use super::ProcessorNode;
use crate::error::RoleError;
use crate::modes::{AxisLabel, DependentAxesMode, ProcessingMode, UpdateMode};
use crate::roles::{Cardinality, Role};

#[derive(Default)]
struct FakeDirectory {
	observed: RefCell<Vec<TransformHandle>>,
	released: RefCell<Vec<TransformHandle>>,
	dead: RefCell<Vec<TransformHandle>>,
}

impl FakeDirectory {
	fn kill(&self, handle: TransformHandle) {
		self.dead.borrow_mut().push(handle);
	}

	fn observe_count(&self, handle: TransformHandle) -> usize {
		self.observed.borrow().iter().filter(|&&h| h == handle).count()
	}

	fn release_count(&self, handle: TransformHandle) -> usize {
		self.released.borrow().iter().filter(|&&h| h == handle).count()
	}

	fn active_observations(&self) -> usize {
		self.observed.borrow().len() - self.released.borrow().len()
	}
}

impl TransformDirectory for FakeDirectory {
	fn resolve(&self, handle: TransformHandle) -> bool {
		!self.dead.borrow().contains(&handle)
	}

	fn observe(&self, handle: TransformHandle) {
		self.observed.borrow_mut().push(handle);
	}

	fn release(&self, handle: TransformHandle) {
		self.released.borrow_mut().push(handle);
	}
}

fn make_node() -> (ProcessorNode, Rc<FakeDirectory>) {
	let directory = Rc::new(FakeDirectory::default());
	(ProcessorNode::new(directory.clone()), directory)
}

fn notifications(node: &ProcessorNode) -> Rc<Cell<u32>> {
	let count = Rc::new(Cell::new(0));
	let inner = count.clone();
	node.subscribe(move || inner.set(inner.get() + 1));
	count
}

fn handle(raw: u64) -> TransformHandle {
	TransformHandle::from_raw(raw)
}

#[test]
fn test_set_single_notifies_once_per_change() {
	let (mut node, _) = make_node();
	let count = notifications(&node);
	node.set_single(Role::FromTransform, Some(handle(1))).unwrap();
	assert_eq!(count.get(), 1);
	node.set_single(Role::FromTransform, Some(handle(2))).unwrap();
	assert_eq!(count.get(), 2);
}

#[test]
fn test_set_single_same_handle_does_not_renotify() {
	let (mut node, _) = make_node();
	let count = notifications(&node);
	node.set_single(Role::FromTransform, Some(handle(1))).unwrap();
	node.set_single(Role::FromTransform, Some(handle(1))).unwrap();
	assert_eq!(count.get(), 1);
	assert_eq!(node.count(Role::FromTransform), 1);
}

#[test]
fn test_set_single_replacement_swaps_observation() {
	let (mut node, directory) = make_node();
	node.set_single(Role::ToTransform, Some(handle(1))).unwrap();
	node.set_single(Role::ToTransform, Some(handle(2))).unwrap();
	assert_eq!(directory.observe_count(handle(1)), 1);
	assert_eq!(directory.release_count(handle(1)), 1);
	assert_eq!(directory.observe_count(handle(2)), 1);
	assert_eq!(directory.release_count(handle(2)), 0);
	assert_eq!(directory.active_observations(), 1);
}

#[test]
fn test_set_single_none_clears_and_releases() {
	let (mut node, directory) = make_node();
	let count = notifications(&node);
	node.set_single(Role::AnchorTransform, Some(handle(5))).unwrap();
	node.set_single(Role::AnchorTransform, None).unwrap();
	assert_eq!(node.first(Role::AnchorTransform), None);
	assert_eq!(directory.release_count(handle(5)), 1);
	assert_eq!(count.get(), 2);
	// clearing again is a no-op
	node.set_single(Role::AnchorTransform, None).unwrap();
	assert_eq!(count.get(), 2);
}

#[test]
fn test_set_single_rejects_multi_role_without_notification() {
	let (mut node, _) = make_node();
	let count = notifications(&node);
	assert_eq!(
		node.set_single(Role::CombineTransform, Some(handle(1))),
		Err(RoleError::InvalidRole {
			role: Role::CombineTransform,
			expected: Cardinality::Single,
		})
	);
	assert_eq!(count.get(), 0);
}

#[test]
fn test_duplicate_combine_add_counts_and_notifies_once() {
	let (mut node, _) = make_node();
	let count = notifications(&node);
	node.add_multi(Role::CombineTransform, Some(handle(4))).unwrap();
	node.add_multi(Role::CombineTransform, Some(handle(4))).unwrap();
	assert_eq!(node.count(Role::CombineTransform), 1);
	assert_eq!(count.get(), 1);
}

#[test]
fn test_add_multi_none_is_silent() {
	let (mut node, directory) = make_node();
	let count = notifications(&node);
	node.add_multi(Role::CombineTransform, None).unwrap();
	assert_eq!(count.get(), 0);
	assert_eq!(directory.active_observations(), 0);
}

#[test]
fn test_remove_at_notifies_and_releases() {
	let (mut node, directory) = make_node();
	let count = notifications(&node);
	node.add_multi(Role::CombineTransform, Some(handle(1))).unwrap();
	node.add_multi(Role::CombineTransform, Some(handle(2))).unwrap();
	node.remove_at(Role::CombineTransform, 0).unwrap();
	assert_eq!(count.get(), 3);
	assert_eq!(directory.release_count(handle(1)), 1);
	assert_eq!(node.first(Role::CombineTransform), Some(handle(2)));
}

#[test]
fn test_remove_at_out_of_range_does_not_notify() {
	let (mut node, _) = make_node();
	let count = notifications(&node);
	assert_eq!(
		node.remove_at(Role::CombineTransform, 0),
		Err(RoleError::IndexOutOfRange {
			role: Role::CombineTransform,
			index: 0,
			len: 0,
		})
	);
	assert_eq!(count.get(), 0);
}

#[test]
fn test_remove_at_applies_to_single_roles_too() {
	let (mut node, _) = make_node();
	let count = notifications(&node);
	node.set_single(Role::OutputTransform, Some(handle(3))).unwrap();
	node.remove_at(Role::OutputTransform, 0).unwrap();
	assert_eq!(node.first(Role::OutputTransform), None);
	assert_eq!(count.get(), 2);
}

#[test]
fn test_resolution_treats_dead_handles_as_absent_without_clearing() {
	let (mut node, directory) = make_node();
	node.add_multi(Role::CombineTransform, Some(handle(1))).unwrap();
	node.add_multi(Role::CombineTransform, Some(handle(2))).unwrap();
	directory.kill(handle(1));
	assert_eq!(node.resolved_count(Role::CombineTransform), 1);
	assert_eq!(node.resolve(Role::CombineTransform, 0), None);
	assert_eq!(node.resolve(Role::CombineTransform, 1), Some(handle(2)));
	// the stored reference stays until the owner removes it
	assert_eq!(node.count(Role::CombineTransform), 2);
	assert_eq!(node.get(Role::CombineTransform, 0), Some(handle(1)));
}

#[test]
fn test_entity_changed_reemits_for_referenced_inputs_only() {
	let (mut node, _) = make_node();
	node.set_single(Role::FromTransform, Some(handle(1))).unwrap();
	node.set_single(Role::OutputTransform, Some(handle(2))).unwrap();
	let count = notifications(&node);
	node.entity_changed(handle(1));
	assert_eq!(count.get(), 1);
	// the output slot is not an input
	node.entity_changed(handle(2));
	assert_eq!(count.get(), 1);
	// unknown handles are ignored
	node.entity_changed(handle(99));
	assert_eq!(count.get(), 1);
}

#[test]
fn test_unsubscribe_stops_delivery() {
	let (mut node, _) = make_node();
	let count = Rc::new(Cell::new(0));
	let inner = count.clone();
	let id = node.subscribe(move || inner.set(inner.get() + 1));
	node.set_processing_mode(ProcessingMode::ComputeInverse);
	assert!(node.unsubscribe(id));
	node.set_processing_mode(ProcessingMode::ComputeRotation);
	assert_eq!(count.get(), 1);
}

#[test]
fn test_mode_setter_notifies_once_and_is_idempotent() {
	let (mut node, _) = make_node();
	let count = notifications(&node);
	node.set_update_mode(UpdateMode::Auto);
	node.set_update_mode(UpdateMode::Auto);
	assert_eq!(node.update_mode(), UpdateMode::Auto);
	assert_eq!(count.get(), 1);
}

#[test]
fn test_dependent_axes_switch_without_conflict() {
	// primary Z, secondary Y: switching the derivation needs no repair
	let (mut node, _) = make_node();
	let count = notifications(&node);
	node.set_dependent_axes_mode(DependentAxesMode::FromSecondaryAxis);
	assert_eq!(node.secondary_axis(), AxisLabel::Y);
	assert_eq!(count.get(), 1);
}

#[test]
fn test_primary_axis_conflict_repairs_in_one_notification() {
	let (mut node, _) = make_node();
	node.set_dependent_axes_mode(DependentAxesMode::FromSecondaryAxis);
	let count = notifications(&node);
	node.set_primary_axis(AxisLabel::Y);
	assert_eq!(node.primary_axis(), AxisLabel::Y);
	assert_eq!(node.secondary_axis(), AxisLabel::Z);
	assert_eq!(count.get(), 1);
}

#[test]
fn test_out_of_domain_raw_value_is_a_silent_keep() {
	let (mut node, _) = make_node();
	let count = notifications(&node);
	node.set_processing_mode_raw(999);
	assert_eq!(node.processing_mode(), ProcessingMode::QuaternionAverage);
	assert_eq!(count.get(), 0);
}

#[test]
fn test_unrecognized_string_keeps_previous_value() {
	let (mut node, _) = make_node();
	node.set_processing_mode(ProcessingMode::ComputeFullTransform);
	let count = notifications(&node);
	node.set_processing_mode_str("garbage");
	assert_eq!(node.processing_mode(), ProcessingMode::ComputeFullTransform);
	assert_eq!(count.get(), 0);
	node.set_processing_mode_str("Compute Inverse");
	assert_eq!(node.processing_mode(), ProcessingMode::ComputeInverse);
	assert_eq!(count.get(), 1);
}

#[test]
fn test_updates_per_second_accepts_any_value() {
	let (mut node, _) = make_node();
	let count = notifications(&node);
	node.set_updates_per_second(0.0);
	node.set_updates_per_second(0.0);
	assert_eq!(node.updates_per_second(), 0.0);
	assert_eq!(count.get(), 1);
}

#[test]
fn test_copy_translation_flags_notify_on_change_only() {
	let (mut node, _) = make_node();
	let count = notifications(&node);
	node.set_copy_translation_x(true); // default, no-op
	assert_eq!(count.get(), 0);
	node.set_copy_translation_y(false);
	node.set_copy_translation_z(false);
	assert_eq!(count.get(), 2);
	assert_eq!(node.config().copy_translation(), [true, false, false]);
}

#[test]
fn test_copy_config_from_batches_into_one_notification() {
	let (mut node, _) = make_node();
	let (mut other, _) = make_node();
	other.set_processing_mode(ProcessingMode::ComputeShaftPivot);
	other.set_update_mode(UpdateMode::Auto);
	other.set_copy_translation_x(false);
	let count = notifications(&node);
	node.copy_config_from(other.config());
	assert_eq!(count.get(), 1);
	assert_eq!(node.processing_mode(), ProcessingMode::ComputeShaftPivot);
	assert_eq!(node.update_mode(), UpdateMode::Auto);
	assert!(!node.copy_translation_x());
	// copying an identical configuration is silent
	node.copy_config_from(other.config());
	assert_eq!(count.get(), 1);
}

#[test]
fn test_sequential_changes_notify_in_call_order() {
	let (mut node, _) = make_node();
	let log = Rc::new(RefCell::new(Vec::new()));
	let inner = log.clone();
	let probe = Rc::new(Cell::new(0u32));
	let tick = probe.clone();
	node.subscribe(move || {
		tick.set(tick.get() + 1);
		inner.borrow_mut().push(tick.get());
	});
	node.set_update_mode(UpdateMode::Auto);
	node.set_update_mode(UpdateMode::Manual);
	// two independent changes, two emissions, even though they cancel out
	assert_eq!(*log.borrow(), vec![1, 2]);
}

#[test]
fn test_named_role_accessors_route_through_the_table() {
	let (mut node, directory) = make_node();
	let count = notifications(&node);
	node.set_from_transform(Some(handle(1)));
	node.set_to_transform(Some(handle(2)));
	node.set_output_transform(Some(handle(3)));
	node.add_combine_transform(Some(handle(4)));
	assert_eq!(node.from_transform(), Some(handle(1)));
	assert_eq!(node.to_transform(), Some(handle(2)));
	assert_eq!(node.output_transform(), Some(handle(3)));
	assert_eq!(node.combine_transform(0), Some(handle(4)));
	assert_eq!(node.combine_transform_count(), 1);
	assert_eq!(count.get(), 4);
	assert_eq!(directory.active_observations(), 4);
	node.remove_combine_transform_at(0).unwrap();
	assert_eq!(node.combine_transform_count(), 0);
	assert_eq!(directory.active_observations(), 3);
}

#[test]
fn test_axis_invariant_survives_arbitrary_sequences() {
	let (mut node, _) = make_node();
	node.set_dependent_axes_mode(DependentAxesMode::FromSecondaryAxis);
	for primary in AxisLabel::ALL {
		node.set_primary_axis(primary);
		for secondary in AxisLabel::ALL {
			node.set_secondary_axis(secondary);
			assert_ne!(
				node.primary_axis(),
				node.secondary_axis(),
				"violated for {primary:?}/{secondary:?}"
			);
		}
	}
}
