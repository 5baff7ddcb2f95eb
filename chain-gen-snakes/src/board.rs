use std::cmp::Ordering;

use chain_gen_core::model::domain::Domain;
use chain_gen_core::model::markov_chain::MarkovChain;

/// Number of cells on the board; reaching the last cell ends every walk.
pub const BOARD_SIZE: u32 = 100;

/// Highest dice roll; a plain cell links to the next 1..=6 cells.
const DICE_MAX: u32 = 6;

/// Fixed snakes and ladders as (source cell, destination cell) pairs.
/// A pair is a ladder when the destination is higher, a snake otherwise.
const SHORTCUTS: [(u32, u32); 20] = [
    (13, 4),
    (85, 17),
    (95, 67),
    (97, 58),
    (66, 89),
    (87, 31),
    (57, 83),
    (91, 25),
    (28, 50),
    (35, 11),
    (8, 30),
    (41, 62),
    (81, 43),
    (69, 32),
    (20, 39),
    (33, 70),
    (79, 99),
    (23, 76),
    (15, 47),
    (61, 14),
];

/// Domain over board cells, identified by their 1-based number.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardDomain;

impl BoardDomain {
    /// The snake or ladder leaving `cell`, if any.
    fn shortcut_from(cell: u32) -> Option<(u32, u32)> {
        SHORTCUTS.iter().copied().find(|&(from, _)| from == cell)
    }

    /// Formats a cell the way walk output presents it: plain cells point
    /// at their successor, shortcut cells name the snake or ladder, and
    /// the final cell closes the line.
    pub fn render(cell: u32) -> String {
        if let Some((from, to)) = Self::shortcut_from(cell) {
            if to < from {
                return format!(" [{}] -snake to->", cell);
            }
            return format!(" [{}] -ladder to->", cell);
        }
        if cell == BOARD_SIZE {
            return format!(" [{}]", cell);
        }
        format!(" [{}] ->", cell)
    }
}

impl Domain for BoardDomain {
    type Value = u32;

    fn compare(&self, a: &u32, b: &u32) -> Ordering {
        a.cmp(b)
    }

    fn duplicate(&self, value: &u32) -> u32 {
        *value
    }

    fn is_terminal(&self, value: &u32) -> bool {
        *value == BOARD_SIZE
    }
}

/// Builds the full board chain.
///
/// Registers every cell in order, wires shortcut cells as a single forced
/// transition and every other cell to the next `DICE_MAX` cells with
/// equal weight, dropping rolls past the final cell.
pub fn build_board() -> MarkovChain<BoardDomain> {
    let mut chain = MarkovChain::new(BoardDomain);

    let ids: Vec<_> = (1..=BOARD_SIZE).map(|cell| chain.add_state(&cell)).collect();

    for cell in 1..=BOARD_SIZE {
        let from = ids[(cell - 1) as usize];
        if let Some((_, to)) = BoardDomain::shortcut_from(cell) {
            chain.add_transition(from, ids[(to - 1) as usize]);
        } else {
            for roll in 1..=DICE_MAX {
                let target = cell + roll;
                if target > BOARD_SIZE {
                    break;
                }
                chain.add_transition(from, ids[(target - 1) as usize]);
            }
        }
    }

    chain
}
