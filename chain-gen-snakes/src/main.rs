use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

mod board;

use board::{BoardDomain, build_board};

/// Maximum number of cells in one generated walk, starting cell included.
const MAX_WALK_CELLS: usize = 60;

/// Simulate snakes-and-ladders games as random walks over a Markov chain
/// of the board.
///
/// Every cell links to the next six cells with equal weight, except the
/// twenty snake/ladder cells, which force a single jump. Each walk starts
/// on cell 1 and ends on the last cell or at the length cap.
#[derive(Parser, Debug)]
#[command(name = "chain-gen-snakes")]
struct Args {
    /// Random seed (the same seed reproduces the same walks)
    seed: u64,

    /// Number of walks to generate
    walk_count: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let chain = build_board();

    // Every game starts on the first cell
    let start = chain.find_state(&1).ok_or("board has no cells")?;

    for i in 1..=args.walk_count {
        print!("Random Walk {}:{}", i, BoardDomain::render(1));
        chain.generate(start, MAX_WALK_CELLS, &mut rng, |&cell| {
            print!("{}", BoardDomain::render(cell));
        });
        println!();
    }

    Ok(())
}
