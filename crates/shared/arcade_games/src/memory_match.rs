use arcade::prng::{shuffle, RandomSource};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Symbol {
    Gift,
    Heart,
    Star,
    Rocket,
    Smile,
    Sun,
    Moon,
    Zap,
}

impl Symbol {
    pub const ALL: [Symbol; 8] = [
        Symbol::Gift,
        Symbol::Heart,
        Symbol::Star,
        Symbol::Rocket,
        Symbol::Smile,
        Symbol::Sun,
        Symbol::Moon,
        Symbol::Zap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Symbol::Gift => "gift",
            Symbol::Heart => "heart",
            Symbol::Star => "star",
            Symbol::Rocket => "rocket",
            Symbol::Smile => "smile",
            Symbol::Sun => "sun",
            Symbol::Moon => "moon",
            Symbol::Zap => "zap",
        }
    }
}

pub const PAIRS: usize = Symbol::ALL.len();
pub const CARDS: usize = PAIRS * 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Card {
    pub symbol: Symbol,
    pub matched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Card already matched, already face up, out of range, or a mismatch is
    /// still showing.
    Ignored,
    /// First card of a pair is face up.
    FirstCard,
    Matched,
    /// The pair stays visible until `hide_mismatch`.
    Mismatch,
    /// The last pair was matched.
    Complete,
}

/// Concentration board: 8 symbols, two cards each.
#[derive(Debug, Clone)]
pub struct MemoryBoard {
    cards: Vec<Card>,
    face_up: Vec<usize>,
    moves: u32,
    matches: u32,
}

impl MemoryBoard {
    pub fn new(rng: &mut dyn RandomSource) -> Self {
        let mut board = Self {
            cards: Vec::with_capacity(CARDS),
            face_up: Vec::with_capacity(2),
            moves: 0,
            matches: 0,
        };
        board.deal(rng);
        board
    }

    /// Reshuffle and clear moves and matches.
    pub fn deal(&mut self, rng: &mut dyn RandomSource) {
        let mut symbols: Vec<Symbol> = Symbol::ALL
            .iter()
            .chain(Symbol::ALL.iter())
            .copied()
            .collect();
        shuffle(rng, &mut symbols);
        self.cards = symbols
            .into_iter()
            .map(|symbol| Card {
                symbol,
                matched: false,
            })
            .collect();
        self.face_up.clear();
        self.moves = 0;
        self.matches = 0;
    }

    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        let Some(card) = self.cards.get(index) else {
            return FlipOutcome::Ignored;
        };
        if self.face_up.len() == 2 || self.face_up.contains(&index) || card.matched {
            return FlipOutcome::Ignored;
        }

        self.face_up.push(index);
        let &[first, second] = self.face_up.as_slice() else {
            return FlipOutcome::FirstCard;
        };

        self.moves += 1;
        if self.cards[first].symbol != self.cards[second].symbol {
            return FlipOutcome::Mismatch;
        }
        self.cards[first].matched = true;
        self.cards[second].matched = true;
        self.face_up.clear();
        self.matches += 1;
        if self.is_complete() {
            FlipOutcome::Complete
        } else {
            FlipOutcome::Matched
        }
    }

    /// Turn a shown mismatch face down again. Returns false if none was showing.
    pub fn hide_mismatch(&mut self) -> bool {
        if self.has_mismatch() {
            self.face_up.clear();
            true
        } else {
            false
        }
    }

    pub fn has_mismatch(&self) -> bool {
        self.face_up.len() == 2
    }

    /// Matched or currently flipped.
    pub fn is_revealed(&self, index: usize) -> bool {
        self.cards.get(index).is_some_and(|c| c.matched) || self.face_up.contains(&index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn matches(&self) -> u32 {
        self.matches
    }

    pub fn is_complete(&self) -> bool {
        self.matches as usize == PAIRS
    }
}
