use crate::card::{Card, Location};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileId {
    Deck,
    Waste,
    Tableau(usize),
    Foundation(usize),
}

/// An ordered stack of cards; the last card is the top.
#[derive(Debug)]
pub struct Pile {
    id: PileId,
    cards: Vec<Card>,
}

impl Pile {
    pub fn new(id: PileId) -> Self {
        Self {
            id,
            cards: Vec::new(),
        }
    }

    pub fn id(&self) -> PileId {
        self.id
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    pub fn push(&mut self, mut card: Card) {
        card.location = Location::Pile(self.id);
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        let mut card = self.cards.pop()?;
        card.location = Location::Detached;
        Some(card)
    }

    /// Detach every card from `at` upward, keeping their order
    pub fn split_off(&mut self, at: usize) -> Vec<Card> {
        let mut run = self.cards.split_off(at.min(self.cards.len()));
        for card in &mut run {
            card.location = Location::Detached;
        }
        run
    }

    /// Index where the face-up, draggable run at the top begins
    /// (equal to `len()` when the top card is hidden or the pile is empty)
    pub fn face_up_run_start(&self) -> usize {
        self.cards
            .iter()
            .rposition(|c| !(c.is_face_up() && c.is_draggable()))
            .map_or(0, |i| i + 1)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn face_up(rank: Rank, suit: Suit) -> Card {
        let mut card = Card::new(rank, suit);
        card.flip();
        card
    }

    #[test]
    fn test_push_and_pop_track_location() {
        let mut pile = Pile::new(PileId::Tableau(3));
        pile.push(Card::new(Rank::Four, Suit::Clubs));
        assert_eq!(
            pile.top().map(|c| c.location),
            Some(Location::Pile(PileId::Tableau(3)))
        );

        let card = pile.pop().unwrap();
        assert_eq!(card.location, Location::Detached);
        assert!(pile.is_empty());
    }

    #[test]
    fn test_split_off_keeps_order() {
        let mut pile = Pile::new(PileId::Tableau(0));
        pile.push(Card::new(Rank::King, Suit::Spades));
        pile.push(face_up(Rank::Nine, Suit::Hearts));
        pile.push(face_up(Rank::Eight, Suit::Clubs));

        let run = pile.split_off(1);
        assert_eq!(pile.len(), 1);
        assert_eq!(run.len(), 2);
        assert_eq!(run[0].rank(), Rank::Nine);
        assert_eq!(run[1].rank(), Rank::Eight);
        assert!(run.iter().all(|c| c.location == Location::Detached));
    }

    #[test]
    fn test_face_up_run_start() {
        let mut pile = Pile::new(PileId::Tableau(1));
        assert_eq!(pile.face_up_run_start(), 0);

        pile.push(Card::new(Rank::Two, Suit::Spades));
        pile.push(Card::new(Rank::Jack, Suit::Spades));
        assert_eq!(pile.face_up_run_start(), 2);

        pile.push(face_up(Rank::Ten, Suit::Diamonds));
        pile.push(face_up(Rank::Nine, Suit::Spades));
        assert_eq!(pile.face_up_run_start(), 2);
    }
}
