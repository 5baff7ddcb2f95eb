use std::cmp::Ordering;
use std::mem;

use super::StateId;
use super::domain::Domain;
use super::state::State;

/// A frequency-weighted Markov chain over client-defined state values.
///
/// The chain owns an insertion-ordered registry of unique states. Each
/// state wraps one payload (duplicated from the client's value on first
/// registration) together with the frequency table of its outgoing
/// transitions. Everything the engine needs to know about a value —
/// equality, copying, teardown, whether a sequence may continue past it —
/// comes from the [`Domain`] supplied at construction.
///
/// The registry is mutated only while the chain is being built; walk
/// generation (see [`get_random_start`](Self::get_random_start) and
/// [`generate`](Self::generate)) is strictly read-only.
///
/// ## Responsibilities
/// - Register values, keeping exactly one state per distinct value
/// - Accumulate transition observations between registered states
/// - Expose read-only access for inspection and walk generation
/// - Hand every payload back to the domain exactly once on teardown
///
/// ## Invariants
/// - No two registered states compare equal through the domain
/// - Every transition target is itself a registered state
/// - States are never removed or reordered once registered
pub struct MarkovChain<D: Domain> {
	domain: D,
	states: Vec<State<D::Value>>,
}

impl<D: Domain> MarkovChain<D> {
	/// Creates an empty chain around the given domain.
	pub fn new(domain: D) -> Self {
		Self {
			domain,
			states: Vec::new(),
		}
	}

	/// The domain supplied at construction.
	pub fn domain(&self) -> &D {
		&self.domain
	}

	/// Number of registered states.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Looks up the state whose payload compares equal to `value`.
	///
	/// The scan is linear in the number of registered states. Lookup only
	/// happens while a corpus or board is ingested once, and the registry
	/// is bounded by the distinct-state count rather than the input
	/// length, so this stays a build-phase cost.
	pub fn find_state(&self, value: &D::Value) -> Option<StateId> {
		self.states
			.iter()
			.position(|state| self.domain.compare(&state.payload, value) == Ordering::Equal)
			.map(StateId)
	}

	/// Returns the state for `value`, registering it first if needed.
	///
	/// On a hit the existing state is returned untouched and no copy of
	/// the value is made; calling this twice with equal values yields the
	/// same id. On a miss the value is duplicated through the domain and
	/// appended with an empty transition table, preserving insertion
	/// order.
	pub fn add_state(&mut self, value: &D::Value) -> StateId {
		if let Some(id) = self.find_state(value) {
			return id;
		}
		let payload = self.domain.duplicate(value);
		self.states.push(State::new(payload));
		StateId(self.states.len() - 1)
	}

	/// Records one observed transition from `source` to `target`.
	///
	/// Increments the existing entry for `target` or appends a new one
	/// with count 1. Self-transitions are legal. Both ids must come from
	/// this chain; an unknown id is a caller bug and panics.
	pub fn add_transition(&mut self, source: StateId, target: StateId) {
		assert!(
			target.0 < self.states.len(),
			"unknown target state {target:?}"
		);
		self.states[source.0].transitions.record(target);
	}

	/// Payload of a registered state.
	pub fn payload(&self, id: StateId) -> &D::Value {
		&self.states[id.0].payload
	}

	/// Sum of all transition counts out of `source`.
	pub fn transition_total(&self, source: StateId) -> u64 {
		self.states[source.0].transitions.total()
	}

	/// Count recorded for the `source` → `target` transition, 0 if that
	/// transition was never observed.
	pub fn transition_count(&self, source: StateId, target: StateId) -> u64 {
		self.states[source.0].transitions.count_for(target)
	}

	/// Deterministically selects the transition out of `source` covering
	/// `roll`.
	///
	/// Entries are walked in insertion order, accumulating counts; the
	/// first entry whose cumulative count strictly exceeds `roll` wins,
	/// which makes each target exactly as likely as its share of the
	/// recorded observations when rolls are drawn uniformly.
	///
	/// `roll` must lie in `[0, transition_total(source))`; the walk
	/// generator upholds this by never sampling a state without recorded
	/// transitions.
	pub fn pick_transition(&self, source: StateId, roll: u64) -> StateId {
		self.states[source.0].transitions.pick(roll)
	}

	/// Iterates over all states in insertion order.
	pub fn states(&self) -> impl Iterator<Item = (StateId, &D::Value)> {
		self.states
			.iter()
			.enumerate()
			.map(|(index, state)| (StateId(index), &state.payload))
	}
}

impl<D: Domain> Drop for MarkovChain<D> {
	/// Tears the registry down, releasing every payload exactly once.
	fn drop(&mut self) {
		for state in mem::take(&mut self.states) {
			self.domain.release(state.payload);
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::cmp::Ordering;

	use super::*;

	struct NumDomain;

	impl Domain for NumDomain {
		type Value = u32;

		fn compare(&self, a: &u32, b: &u32) -> Ordering {
			a.cmp(b)
		}

		fn duplicate(&self, value: &u32) -> u32 {
			*value
		}

		fn is_terminal(&self, _value: &u32) -> bool {
			false
		}
	}

	#[test]
	fn add_state_is_idempotent() {
		let mut chain = MarkovChain::new(NumDomain);
		let first = chain.add_state(&7);
		let second = chain.add_state(&7);

		assert_eq!(first, second);
		assert_eq!(chain.len(), 1);
	}

	#[test]
	fn states_keep_insertion_order() {
		let mut chain = MarkovChain::new(NumDomain);
		for value in [3, 1, 2, 1, 3] {
			chain.add_state(&value);
		}

		let values: Vec<u32> = chain.states().map(|(_, v)| *v).collect();
		assert_eq!(values, vec![3, 1, 2]);
	}

	#[test]
	fn repeated_transitions_accumulate() {
		let mut chain = MarkovChain::new(NumDomain);
		let a = chain.add_state(&1);
		let b = chain.add_state(&2);

		for _ in 0..5 {
			chain.add_transition(a, b);
		}
		chain.add_transition(a, a);

		assert_eq!(chain.transition_count(a, b), 5);
		assert_eq!(chain.transition_count(a, a), 1);
		assert_eq!(chain.transition_total(a), 6);
		assert_eq!(chain.transition_total(b), 0);
	}

	#[test]
	#[should_panic(expected = "unknown target state")]
	fn unknown_target_panics() {
		let mut chain = MarkovChain::new(NumDomain);
		let a = chain.add_state(&1);
		chain.add_transition(a, StateId(9));
	}

	struct RecordingDomain<'a> {
		released: &'a RefCell<Vec<String>>,
	}

	impl Domain for RecordingDomain<'_> {
		type Value = String;

		fn compare(&self, a: &String, b: &String) -> Ordering {
			a.cmp(b)
		}

		fn duplicate(&self, value: &String) -> String {
			value.clone()
		}

		fn release(&self, value: String) {
			self.released.borrow_mut().push(value);
		}

		fn is_terminal(&self, value: &String) -> bool {
			value.ends_with('.')
		}
	}

	#[test]
	fn drop_releases_each_state_once() {
		let released = RefCell::new(Vec::new());
		{
			let mut chain = MarkovChain::new(RecordingDomain { released: &released });
			chain.add_state(&"a".to_owned());
			chain.add_state(&"b.".to_owned());
			chain.add_state(&"a".to_owned()); // re-registration, no new state

			let a = chain.find_state(&"a".to_owned()).unwrap();
			let b = chain.find_state(&"b.".to_owned()).unwrap();
			chain.add_transition(a, b);
		}

		let mut names = released.borrow().clone();
		names.sort();
		assert_eq!(names, vec!["a".to_owned(), "b.".to_owned()]);
	}
}
