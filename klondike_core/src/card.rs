use std::fmt;

use crate::layout::Point;
use crate::pile::PileId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Clubs,
    Diamonds,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades];

    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => '\u{2665}',   // ♥
            Suit::Clubs => '\u{2663}',    // ♣
            Suit::Diamonds => '\u{2666}', // ♦
            Suit::Spades => '\u{2660}',   // ♠
        }
    }

    pub fn color(&self) -> CardColor {
        match self {
            Suit::Hearts | Suit::Diamonds => CardColor::Red,
            Suit::Clubs | Suit::Spades => CardColor::Black,
        }
    }

    /// Foundation slot this suit is built on
    pub fn index(&self) -> usize {
        match self {
            Suit::Hearts => 0,
            Suit::Clubs => 1,
            Suit::Diamonds => 2,
            Suit::Spades => 3,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardColor {
    Red,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Ordinal used by the stacking rules: ace is 0, king is 12
    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// The identity of a card, used to look up its face art
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId {
    pub rank: Rank,
    pub suit: Suit,
}

impl CardId {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Whether a card may start a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grip {
    Locked,
    Draggable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Pile(PileId),
    /// Held by the pointer
    Detached,
}

/// One of the 52 physical cards on the table.
///
/// Cards are deliberately not `Clone`: each one lives in exactly one pile
/// (or the drag session) and is moved between them by value.
#[derive(Debug, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    face_up: bool,
    grip: Grip,
    pub position: Point,
    pub location: Location,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            id: CardId::new(rank, suit),
            face_up: false,
            grip: Grip::Locked,
            position: Point::default(),
            location: Location::Detached,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn rank(&self) -> Rank {
        self.id.rank
    }

    pub fn suit(&self) -> Suit {
        self.id.suit
    }

    pub fn color(&self) -> CardColor {
        self.id.suit.color()
    }

    pub fn value(&self) -> u8 {
        self.id.rank.value()
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn grip(&self) -> Grip {
        self.grip
    }

    pub fn is_draggable(&self) -> bool {
        self.grip == Grip::Draggable
    }

    /// Turn the card over. Either direction leaves it draggable; callers
    /// that hide a card for good follow up with [`Card::lock`].
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
        self.grip = Grip::Draggable;
    }

    pub fn lock(&mut self) {
        self.grip = Grip::Locked;
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A fresh, ordered, face-down set of all 52 cards
pub fn standard_population() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for &suit in &Suit::ALL {
        for &rank in &Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}
