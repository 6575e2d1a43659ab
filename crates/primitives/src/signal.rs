//! Configuration-changed broadcast signal.
//!
//! A single level-triggered "something changed" channel: no payload, one
//! emission per state-changing call. Consumers treat it as a dirty flag,
//! not an edit log; independent changes inside one call coalesce into one
//! emission, while separate calls each emit in call order.
//!
//! The signal is single-threaded. Subscribing or removing a subscriber from
//! inside a callback is not supported.

use std::cell::{Cell, RefCell};

/// Identifies one subscription for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Callback = Box<dyn FnMut()>;

/// Payload-free broadcast signal with an interior-mutable subscriber list.
#[derive(Default)]
pub struct ChangeSignal {
	next_id: Cell<u64>,
	subscribers: RefCell<Vec<(SubscriberId, Callback)>>,
}

impl ChangeSignal {
	/// Creates a signal with no subscribers.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a callback; returns the id used to unsubscribe.
	pub fn subscribe(&self, callback: impl FnMut() + 'static) -> SubscriberId {
		let id = SubscriberId(self.next_id.get());
		self.next_id.set(id.0 + 1);
		self.subscribers.borrow_mut().push((id, Box::new(callback)));
		id
	}

	/// Removes a subscription. Returns false when the id was already gone.
	pub fn unsubscribe(&self, id: SubscriberId) -> bool {
		let mut subscribers = self.subscribers.borrow_mut();
		let before = subscribers.len();
		subscribers.retain(|(sid, _)| *sid != id);
		subscribers.len() != before
	}

	/// Number of live subscriptions.
	pub fn subscriber_count(&self) -> usize {
		self.subscribers.borrow().len()
	}

	/// Invokes every subscriber once, in subscription order.
	pub fn emit(&self) {
		for (_, callback) in self.subscribers.borrow_mut().iter_mut() {
			callback();
		}
	}
}

impl core::fmt::Debug for ChangeSignal {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("ChangeSignal")
			.field("subscribers", &self.subscriber_count())
			.finish()
	}
}
