use std::cmp::Ordering;
use std::io;
use std::path::Path;

use crate::io::read_file;
use crate::model::StateId;
use crate::model::domain::Domain;
use crate::model::markov_chain::MarkovChain;

/// Domain over whitespace-separated corpus words.
///
/// A word is terminal when it ends a sentence, i.e. ends with `'.'`: no
/// transition is ever recorded out of such a word, and walks stop on
/// reaching one.
#[derive(Clone, Copy, Debug, Default)]
pub struct WordDomain;

impl Domain for WordDomain {
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

impl MarkovChain<WordDomain> {
	/// Feeds a stream of tokens into the chain.
	///
	/// Registers every token and records a transition from the previous
	/// token to it, unless the previous token ended a sentence. The
	/// previous-token link survives line boundaries, so a corpus can be
	/// fed one line at a time. With `limit = Some(n)` at most `n` tokens
	/// are consumed.
	///
	/// Returns the number of tokens consumed.
	pub fn feed_words<'a, I>(&mut self, words: I, limit: Option<usize>) -> usize
	where
		I: IntoIterator<Item = &'a str>,
	{
		let mut previous: Option<StateId> = None;
		let mut consumed = 0;

		for word in words.into_iter().take(limit.unwrap_or(usize::MAX)) {
			let current = self.add_state(&word.to_owned());

			if let Some(previous) = previous {
				if !self.domain().is_terminal(self.payload(previous)) {
					self.add_transition(previous, current);
				}
			}

			previous = Some(current);
			consumed += 1;
		}

		consumed
	}

	/// Reads a whole text file and feeds every whitespace-separated
	/// token, in file order.
	pub fn feed_file<P: AsRef<Path>>(&mut self, path: P, limit: Option<usize>) -> io::Result<usize> {
		let lines = read_file(path)?;
		Ok(self.feed_words(lines.iter().flat_map(|line| line.split_whitespace()), limit))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn consecutive_words_are_linked() {
		let mut chain = MarkovChain::new(WordDomain);
		chain.feed_words("the quick fox".split_whitespace(), None);

		let the = chain.find_state(&"the".to_owned()).unwrap();
		let quick = chain.find_state(&"quick".to_owned()).unwrap();
		assert_eq!(chain.transition_count(the, quick), 1);
		assert_eq!(chain.transition_total(the), 1);
	}

	#[test]
	fn sentence_endings_break_links() {
		let mut chain = MarkovChain::new(WordDomain);
		chain.feed_words("end. start again".split_whitespace(), None);

		let end = chain.find_state(&"end.".to_owned()).unwrap();
		assert_eq!(chain.transition_total(end), 0);

		let start = chain.find_state(&"start".to_owned()).unwrap();
		assert_eq!(chain.transition_total(start), 1);
	}

	#[test]
	fn links_cross_line_boundaries() {
		let mut chain = MarkovChain::new(WordDomain);
		let lines = ["one two", "three"];
		chain.feed_words(lines.iter().flat_map(|line| line.split_whitespace()), None);

		let two = chain.find_state(&"two".to_owned()).unwrap();
		let three = chain.find_state(&"three".to_owned()).unwrap();
		assert_eq!(chain.transition_count(two, three), 1);
	}

	#[test]
	fn word_limit_caps_consumption() {
		let mut chain = MarkovChain::new(WordDomain);
		let consumed = chain.feed_words("a b c d e".split_whitespace(), Some(3));

		assert_eq!(consumed, 3);
		assert_eq!(chain.len(), 3);
		assert!(chain.find_state(&"d".to_owned()).is_none());
	}

	#[test]
	fn repeated_words_share_one_state() {
		let mut chain = MarkovChain::new(WordDomain);
		chain.feed_words("to be or not to be".split_whitespace(), None);

		assert_eq!(chain.len(), 4);
		let to = chain.find_state(&"to".to_owned()).unwrap();
		let be = chain.find_state(&"be".to_owned()).unwrap();
		assert_eq!(chain.transition_count(to, be), 2);
	}
}
