use crate::model::sequence::Sequence;
use crate::model::symbol::Symbol;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Card counts per colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckComposition {
    pub red: u8,
    pub black: u8,
}

impl DeckComposition {
    pub const fn total(self) -> u8 {
        self.red + self.black
    }

    pub const fn supply(self, symbol: Symbol) -> Option<u8> {
        match symbol {
            Symbol::Red => Some(self.red),
            Symbol::Black => Some(self.black),
            Symbol::Wildcard => None,
        }
    }
}

pub const DECK: DeckComposition = DeckComposition { red: 11, black: 6 };
pub const MAX_SEQUENCE_LEN: usize = DECK.total() as usize;

/// A concrete ordering of the 17 cards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Symbol>,
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(MAX_SEQUENCE_LEN);
        cards.extend(std::iter::repeat_n(Symbol::Red, DECK.red as usize));
        cards.extend(std::iter::repeat_n(Symbol::Black, DECK.black as usize));
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.cards
    }

    /// The first `len` cards off the top; `len` is clamped to the deck size.
    pub fn deal(&self, len: usize) -> Sequence {
        self.cards.iter().copied().take(len).collect()
    }
}
