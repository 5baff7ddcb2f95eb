use super::StateId;

/// One observed edge out of a state: a target and the number of times the
/// transition was seen while the chain was built.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Transition {
	pub(crate) target: StateId,
	pub(crate) count: u64,
}

/// Frequency table of the outgoing transitions of a single state.
///
/// Conceptually the weighted edges of one Markov-chain node: each entry
/// pairs a target state with its observation count, and `total` caches
/// the sum of all counts.
///
/// ## Responsibilities
/// - Accumulate transition observations during the build phase
/// - Select a target by cumulative weight given a random draw
///
/// ## Invariants
/// - `total` equals the sum of all entry counts
/// - Every entry count is strictly positive
/// - A target appears in at most one entry
#[derive(Clone, Debug, Default)]
pub(crate) struct TransitionTable {
	entries: Vec<Transition>,
	total: u64,
}

impl TransitionTable {
	/// Records one observation of a transition toward `target`.
	///
	/// - If the target already has an entry, its count is increased.
	/// - Otherwise a new entry is appended with an initial count of 1.
	pub(crate) fn record(&mut self, target: StateId) {
		match self.entries.iter_mut().find(|t| t.target == target) {
			Some(transition) => transition.count += 1,
			None => self.entries.push(Transition { target, count: 1 }),
		}
		self.total += 1;
	}

	/// Selects a target by cumulative weight.
	///
	/// Walks the entries in insertion order and returns the first one
	/// whose cumulative count strictly exceeds `roll`, so a target holding
	/// `count` of the `total` observations is selected for exactly `count`
	/// of the possible rolls.
	///
	/// The caller must keep `roll` below `total`; an out-of-range roll
	/// falls back to the first entry.
	pub(crate) fn pick(&self, roll: u64) -> StateId {
		debug_assert!(roll < self.total, "roll {roll} out of range (total {})", self.total);

		let mut cumulative = 0;
		for transition in &self.entries {
			cumulative += transition.count;
			if cumulative > roll {
				return transition.target;
			}
		}
		self.entries[0].target
	}

	/// Count recorded toward `target`, 0 if the target has no entry.
	pub(crate) fn count_for(&self, target: StateId) -> u64 {
		self.entries
			.iter()
			.find(|t| t.target == target)
			.map_or(0, |t| t.count)
	}

	/// Sum of all entry counts.
	pub(crate) fn total(&self) -> u64 {
		self.total
	}
}

/// One registered state: the client payload plus its outgoing transitions.
///
/// The table may stay empty forever if the state was never observed
/// transitioning to anything.
#[derive(Clone, Debug)]
pub(crate) struct State<T> {
	pub(crate) payload: T,
	pub(crate) transitions: TransitionTable,
}

impl<T> State<T> {
	pub(crate) fn new(payload: T) -> Self {
		Self {
			payload,
			transitions: TransitionTable::default(),
		}
	}
}
