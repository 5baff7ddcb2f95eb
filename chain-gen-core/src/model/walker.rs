use rand::Rng;

use super::StateId;
use super::domain::Domain;
use super::markov_chain::MarkovChain;
use crate::error::ChainError;

impl<D: Domain> MarkovChain<D> {
	/// Picks a uniformly random non-terminal state to start a walk from.
	///
	/// Draws a fresh uniform index over the whole registry and redraws as
	/// long as the index lands on a terminal state, so every non-terminal
	/// state keeps an equal selection probability.
	///
	/// # Errors
	/// [`ChainError::EmptyChain`] if nothing is registered,
	/// [`ChainError::AllTerminal`] if no registered state may legally
	/// start a walk.
	pub fn get_random_start<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<StateId, ChainError> {
		if self.is_empty() {
			return Err(ChainError::EmptyChain);
		}
		if self.states().all(|(_, value)| self.domain().is_terminal(value)) {
			return Err(ChainError::AllTerminal);
		}

		loop {
			let id = StateId(rng.random_range(0..self.len()));
			if !self.domain().is_terminal(self.payload(id)) {
				return Ok(id);
			}
		}
	}

	/// Walks the chain from `start`, rendering every state reached.
	///
	/// Repeats until the current state is terminal or the sequence length
	/// reaches `max_length`: draw a uniform roll over the current state's
	/// transition total, advance to the target selected by
	/// [`pick_transition`](Self::pick_transition) and hand the new
	/// payload to `render`. A non-terminal state without recorded
	/// transitions also ends the walk.
	///
	/// The start state counts toward `max_length` but is never rendered
	/// here; callers present it themselves before the walk. Returns the
	/// number of states rendered. The chain is never mutated, so any
	/// number of walks may run over a fully built chain.
	pub fn generate<R, F>(&self, start: StateId, max_length: usize, rng: &mut R, mut render: F) -> usize
	where
		R: Rng + ?Sized,
		F: FnMut(&D::Value),
	{
		let mut current = start;
		let mut length = 1;

		while length < max_length && !self.domain().is_terminal(self.payload(current)) {
			let total = self.transition_total(current);
			if total == 0 {
				break;
			}

			let next = self.pick_transition(current, rng.random_range(0..total));
			render(self.payload(next));
			current = next;
			length += 1;
		}

		length - 1
	}
}

#[cfg(test)]
mod tests {
	use std::cmp::Ordering;

	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use crate::error::ChainError;
	use crate::model::domain::Domain;
	use crate::model::markov_chain::MarkovChain;

	/// Word-like test domain: values ending with '.' are terminal.
	struct WordLike;

	impl Domain for WordLike {
		type Value = String;

		fn compare(&self, a: &String, b: &String) -> Ordering {
			a.cmp(b)
		}

		fn duplicate(&self, value: &String) -> String {
			value.clone()
		}

		fn is_terminal(&self, value: &String) -> bool {
			value.ends_with('.')
		}
	}

	fn chain_of(pairs: &[(&str, &str)]) -> MarkovChain<WordLike> {
		let mut chain = MarkovChain::new(WordLike);
		for (from, to) in pairs {
			let from = chain.add_state(&(*from).to_owned());
			let to = chain.add_state(&(*to).to_owned());
			chain.add_transition(from, to);
		}
		chain
	}

	#[test]
	fn start_pick_skips_terminal_states() {
		let chain = chain_of(&[("a", "b."), ("a", "a")]);
		let mut rng = StdRng::seed_from_u64(7);

		for _ in 0..50 {
			let start = chain.get_random_start(&mut rng).unwrap();
			assert_eq!(chain.payload(start), "a");
		}
	}

	#[test]
	fn start_pick_fails_on_empty_chain() {
		let chain = MarkovChain::new(WordLike);
		let mut rng = StdRng::seed_from_u64(7);

		assert_eq!(chain.get_random_start(&mut rng), Err(ChainError::EmptyChain));
	}

	#[test]
	fn start_pick_fails_when_everything_is_terminal() {
		let mut chain = MarkovChain::new(WordLike);
		chain.add_state(&"end.".to_owned());
		chain.add_state(&"stop.".to_owned());
		let mut rng = StdRng::seed_from_u64(7);

		assert_eq!(chain.get_random_start(&mut rng), Err(ChainError::AllTerminal));
	}

	#[test]
	fn walk_stops_on_terminal_state() {
		// "a" always moves to "b.", which ends the walk immediately.
		let chain = chain_of(&[("a", "b.")]);
		let start = chain.find_state(&"a".to_owned()).unwrap();
		let mut rng = StdRng::seed_from_u64(7);

		let mut rendered = Vec::new();
		let steps = chain.generate(start, 100, &mut rng, |word| rendered.push(word.clone()));

		assert_eq!(steps, 1);
		assert_eq!(rendered, vec!["b.".to_owned()]);
	}

	#[test]
	fn walk_never_exceeds_max_length() {
		// "a" only ever moves back to itself.
		let chain = chain_of(&[("a", "a")]);
		let start = chain.find_state(&"a".to_owned()).unwrap();
		let mut rng = StdRng::seed_from_u64(7);

		let mut rendered = 0;
		let steps = chain.generate(start, 10, &mut rng, |_| rendered += 1);

		// The start state takes one slot of the budget.
		assert_eq!(steps, 9);
		assert_eq!(rendered, 9);
	}

	#[test]
	fn walk_ends_on_states_without_transitions() {
		// "b" is not terminal, but nothing was ever observed after it.
		let chain = chain_of(&[("a", "b")]);
		let start = chain.find_state(&"a".to_owned()).unwrap();
		let mut rng = StdRng::seed_from_u64(7);

		let steps = chain.generate(start, 10, &mut rng, |_| {});
		assert_eq!(steps, 1);
	}

	#[test]
	fn walk_renders_nothing_from_terminal_start() {
		let chain = chain_of(&[("a", "b.")]);
		let start = chain.find_state(&"b.".to_owned()).unwrap();
		let mut rng = StdRng::seed_from_u64(7);

		let steps = chain.generate(start, 10, &mut rng, |_| panic!("must not render"));
		assert_eq!(steps, 0);
	}

	#[test]
	fn pick_transition_follows_recorded_shares() {
		// Three observations toward "b.", one back to "a"; entries cover
		// rolls in insertion order.
		let chain = chain_of(&[("a", "b."), ("a", "b."), ("a", "b."), ("a", "a")]);
		let a = chain.find_state(&"a".to_owned()).unwrap();

		assert_eq!(chain.transition_total(a), 4);
		for roll in 0..3 {
			assert_eq!(chain.payload(chain.pick_transition(a, roll)), "b.");
		}
		assert_eq!(chain.payload(chain.pick_transition(a, 3)), "a");
	}
}
