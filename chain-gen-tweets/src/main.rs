use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use chain_gen_core::model::markov_chain::MarkovChain;
use chain_gen_core::text::WordDomain;

/// Maximum number of words in one generated tweet, start word included.
const MAX_TWEET_WORDS: usize = 20;

/// Generate tweet-like sentences from a text corpus.
///
/// Builds a word-level Markov chain out of the corpus, then samples
/// random sentences from it: each tweet starts on a random word that does
/// not end a sentence and follows observed word transitions until a
/// sentence end or the word cap is reached.
#[derive(Parser, Debug)]
#[command(name = "chain-gen-tweets")]
struct Args {
    /// Random seed (the same seed reproduces the same tweets)
    seed: u64,

    /// Number of tweets to generate
    tweet_count: usize,

    /// Path to the text corpus
    corpus: PathBuf,

    /// Read only the first N words of the corpus
    words_to_read: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // One generator for the whole run, seeded once
    let mut rng = StdRng::seed_from_u64(args.seed);

    let mut chain = MarkovChain::new(WordDomain);
    chain.feed_file(&args.corpus, args.words_to_read)?;

    for i in 1..=args.tweet_count {
        // The start word is printed here; the walk prints the rest
        let start = chain.get_random_start(&mut rng)?;
        print!("Tweet {}: {} ", i, chain.payload(start));
        chain.generate(start, MAX_TWEET_WORDS, &mut rng, |word| print!("{} ", word));
        println!();
    }

    Ok(())
}
