use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::card::{standard_population, Card, Rank};
use crate::layout::{Layout, Point};
use crate::pile::{Pile, PileId};

pub const TABLEAU_COLUMNS: usize = 7;
pub const FOUNDATION_COUNT: usize = 4;
/// Cards turned from the deck per click
pub const DRAW_COUNT: usize = 3;
const CARDS_PER_SUIT: usize = 13;

/// Cards lifted off the table and following the pointer
#[derive(Debug)]
pub struct DragSession {
    cards: Vec<Card>,
    source: PileId,
    /// Pointer position relative to the lead card's origin
    grab: Point,
}

impl DragSession {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Where the cards go back to if the drop is refused
    pub fn source(&self) -> PileId {
        self.source
    }

    pub fn lead(&self) -> &Card {
        &self.cards[0]
    }
}

/// Every pile on the table plus the active drag, if any
#[derive(Debug)]
pub struct GameState {
    layout: Layout,
    deck: Pile,
    waste: Pile,
    tableau: [Pile; TABLEAU_COLUMNS],
    foundations: [Pile; FOUNDATION_COUNT],
    drag: Option<DragSession>,
    rng: StdRng,
    deals: u64,
}

impl GameState {
    pub fn new(layout: Layout) -> Self {
        Self::with_seed(layout, rand::thread_rng().gen())
    }

    pub fn with_seed(layout: Layout, seed: u64) -> Self {
        let mut state = Self::empty(layout, StdRng::seed_from_u64(seed));
        state.deal_new_game();
        state
    }

    pub(crate) fn empty(layout: Layout, rng: StdRng) -> Self {
        Self {
            layout,
            deck: Pile::new(PileId::Deck),
            waste: Pile::new(PileId::Waste),
            tableau: std::array::from_fn(|i| Pile::new(PileId::Tableau(i))),
            foundations: std::array::from_fn(|i| Pile::new(PileId::Foundation(i))),
            drag: None,
            rng,
            deals: 0,
        }
    }

    // ─── Accessors ──────────────────────────────────────────────────

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn deck(&self) -> &Pile {
        &self.deck
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    pub fn tableau(&self) -> &[Pile] {
        &self.tableau
    }

    pub fn foundations(&self) -> &[Pile] {
        &self.foundations
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// How many games have been dealt by this state
    pub fn deals(&self) -> u64 {
        self.deals
    }

    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Deck => Some(&self.deck),
            PileId::Waste => Some(&self.waste),
            PileId::Tableau(i) => self.tableau.get(i),
            PileId::Foundation(i) => self.foundations.get(i),
        }
    }

    fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        match id {
            PileId::Deck => &mut self.deck,
            PileId::Waste => &mut self.waste,
            PileId::Tableau(i) => &mut self.tableau[i],
            PileId::Foundation(i) => &mut self.foundations[i],
        }
    }

    /// Every card on the table, including any being dragged
    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + self.waste.len()
            + self.tableau.iter().map(Pile::len).sum::<usize>()
            + self.foundations.iter().map(Pile::len).sum::<usize>()
            + self.drag.as_ref().map_or(0, |d| d.cards.len())
    }

    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(|f| f.len() == CARDS_PER_SUIT)
    }

    /// Index of the topmost card in `column` whose outline contains `p`
    pub fn tableau_hit(&self, column: usize, p: Point) -> Option<usize> {
        let pile = self.tableau.get(column)?;
        pile.cards()
            .iter()
            .rposition(|c| self.layout.card_rect(c.position).contains(p))
    }

    // ─── Moves ──────────────────────────────────────────────────────

    /// Put `card` on top of `id`, moving it to that pile's resting position
    pub(crate) fn place(&mut self, id: PileId, mut card: Card) {
        card.position = match id {
            PileId::Tableau(column) => self
                .layout
                .tableau_card_origin(column, self.tableau[column].len()),
            other => self.layout.pile_rect(other).origin(),
        };
        self.pile_mut(id).push(card);
    }

    /// Throw away every card, build a fresh shuffled population and deal it
    pub fn deal_new_game(&mut self) {
        self.deck.clear();
        self.waste.clear();
        for pile in self.tableau.iter_mut().chain(self.foundations.iter_mut()) {
            pile.clear();
        }
        self.drag = None;

        let mut population = standard_population();
        population.shuffle(&mut self.rng);
        for card in population {
            self.place(PileId::Deck, card);
        }

        // Column i ends up with 7 - i cards
        for pass in 0..TABLEAU_COLUMNS {
            for column in 0..TABLEAU_COLUMNS - pass {
                if let Some(card) = self.deck.pop() {
                    self.place(PileId::Tableau(column), card);
                }
            }
        }
        for pile in &mut self.tableau {
            if let Some(top) = pile.top_mut() {
                top.flip();
            }
        }

        self.deals += 1;
        info!("dealt game #{} ({} cards left in deck)", self.deals, self.deck.len());
    }

    /// Turn up to three cards onto the waste, or recycle the waste into
    /// the deck once the deck runs out.
    pub fn draw_from_deck(&mut self) {
        if self.deck.is_empty() {
            self.recycle_waste();
            return;
        }

        if let Some(previous) = self.waste.top_mut() {
            if previous.is_face_up() {
                previous.flip();
            }
            previous.lock();
        }

        let mut drawn = 0;
        for _ in 0..DRAW_COUNT {
            match self.deck.pop() {
                Some(card) => {
                    self.place(PileId::Waste, card);
                    drawn += 1;
                }
                None => break,
            }
        }

        if let Some(top) = self.waste.top_mut() {
            top.flip();
            debug!("drew {} card(s), waste shows {}", drawn, top);
        }
    }

    fn recycle_waste(&mut self) {
        if self.waste.is_empty() {
            return;
        }
        let count = self.waste.len();
        while let Some(mut card) = self.waste.pop() {
            if card.is_face_up() {
                card.flip();
            }
            card.lock();
            self.place(PileId::Deck, card);
        }
        debug!("recycled {} waste card(s) into the deck", count);
    }

    /// Move `card` onto its suit's foundation if it is the next rank there.
    /// A refused card is handed back untouched.
    pub fn try_auto_move_to_foundation(&mut self, mut card: Card) -> Result<(), Card> {
        let slot = card.suit().index();
        let accepts = match self.foundations[slot].top() {
            None => card.rank() == Rank::Ace,
            Some(top) => top.value() + 1 == card.value(),
        };
        if !accepts {
            return Err(card);
        }

        card.lock();
        debug!("{} to foundation {}", card, slot);
        self.place(PileId::Foundation(slot), card);
        Ok(())
    }

    /// Try to send the top card of `source` to its foundation
    pub fn auto_move_from(&mut self, source: PileId) -> bool {
        if self.pile(source).is_none() {
            return false;
        }
        let Some(card) = self.pile_mut(source).pop() else {
            return false;
        };
        match self.try_auto_move_to_foundation(card) {
            Ok(()) => true,
            Err(card) => {
                self.pile_mut(source).push(card);
                false
            }
        }
    }

    /// Lift the card at `index` of `column` and everything stacked on it.
    /// The card underneath stays hidden until a legal drop turns it over.
    pub fn start_drag(&mut self, column: usize, index: usize, pointer: Point) -> bool {
        if self.drag.is_some() {
            return false;
        }
        let Some(pile) = self.tableau.get_mut(column) else {
            return false;
        };
        if index < pile.face_up_run_start() || index >= pile.len() {
            return false;
        }

        let cards = pile.split_off(index);
        debug!("picked up {} card(s) from column {}", cards.len(), column);
        self.begin_drag(PileId::Tableau(column), cards, pointer);
        true
    }

    /// Lift the top waste card on its own
    pub fn start_waste_drag(&mut self, pointer: Point) -> bool {
        if self.drag.is_some() {
            return false;
        }
        match self.waste.top() {
            Some(card) if card.is_face_up() => {}
            _ => return false,
        }
        let Some(card) = self.waste.pop() else {
            return false;
        };
        debug!("picked up {} from the waste", card);
        self.begin_drag(PileId::Waste, vec![card], pointer);
        true
    }

    fn begin_drag(&mut self, source: PileId, cards: Vec<Card>, pointer: Point) {
        let grab = pointer - cards[0].position;
        self.drag = Some(DragSession {
            cards,
            source,
            grab,
        });
    }

    /// Move the dragged cards with the pointer, keeping them stacked
    pub fn drag_to(&mut self, pointer: Point) {
        let offset = self.layout.stack_offset();
        if let Some(drag) = &mut self.drag {
            let origin = pointer - drag.grab;
            for (i, card) in drag.cards.iter_mut().enumerate() {
                card.position = Point::new(origin.x, origin.y + offset * i as i32);
            }
        }
    }

    /// Decide whether the dragged cards may rest on `destination`. A legal
    /// drop turns over whatever the drag uncovered at its source.
    pub fn validate_drop(&mut self, destination: usize) -> bool {
        let Some(drag) = &self.drag else {
            return false;
        };
        let Some(column) = self.tableau.get(destination) else {
            return false;
        };

        let source = drag.source;
        let lead = drag.lead();
        let legal = match column.top() {
            None => lead.rank() == Rank::King,
            Some(top) => {
                top.color() != lead.color()
                    && top.value() == lead.value() + 1
                    && source != PileId::Tableau(destination)
            }
        };

        if legal {
            self.flip_next(source);
        }
        legal
    }

    /// Settle the dragged cards onto `destination` or back where they came
    /// from, in their original order.
    pub fn snap(&mut self, legal: bool, destination: usize) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let target = if legal {
            PileId::Tableau(destination)
        } else {
            drag.source
        };
        for card in drag.cards {
            self.place(target, card);
        }
    }

    /// Release the drag over `pointer`'s grid column
    pub fn drop_at(&mut self, pointer: Point) -> bool {
        let destination = self.layout.screen_to_grid(pointer).col;
        let legal = self.validate_drop(destination);
        self.snap(legal, destination);
        debug!(
            "drop on column {}: {}",
            destination,
            if legal { "accepted" } else { "snapped back" }
        );
        legal
    }

    /// Turn over the card a move exposed: the top of a tableau column, or
    /// the waste top for any other source.
    pub fn flip_next(&mut self, source: PileId) {
        let top = match source {
            PileId::Tableau(column) if column < TABLEAU_COLUMNS => self.tableau[column].top_mut(),
            _ => self.waste.top_mut(),
        };
        if let Some(card) = top {
            if !card.is_face_up() {
                card.flip();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardId, Location, Suit};
    use std::collections::HashSet;

    fn blank() -> GameState {
        GameState::empty(Layout::TERMINAL, StdRng::seed_from_u64(7))
    }

    fn face_up(rank: Rank, suit: Suit) -> Card {
        let mut card = Card::new(rank, suit);
        card.flip();
        card
    }

    fn ids(pile: &Pile) -> Vec<CardId> {
        pile.cards().iter().map(|c| c.id()).collect()
    }

    fn origin_of(state: &GameState, column: usize, index: usize) -> Point {
        state.tableau[column].cards()[index].position
    }

    #[test]
    fn test_deal_invariant() {
        let state = GameState::with_seed(Layout::TERMINAL, 42);

        for (i, column) in state.tableau().iter().enumerate() {
            assert_eq!(column.len(), TABLEAU_COLUMNS - i);
            let flags: Vec<bool> = column.cards().iter().map(|c| c.is_face_up()).collect();
            assert_eq!(flags.iter().filter(|f| **f).count(), 1);
            assert_eq!(flags.last(), Some(&true));
            assert!(column.top().unwrap().is_draggable());
        }
        assert_eq!(state.deck().len(), 24);
        assert!(state.waste().is_empty());
        assert!(state.foundations().iter().all(Pile::is_empty));
        assert_eq!(state.total_cards(), 52);

        let mut seen = HashSet::new();
        for pile in [state.deck(), state.waste()]
            .into_iter()
            .chain(state.tableau())
            .chain(state.foundations())
        {
            for card in pile.cards() {
                assert!(seen.insert(card.id()), "duplicate {}", card);
            }
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn test_deal_positions_stack_down_the_column() {
        let state = GameState::with_seed(Layout::TERMINAL, 3);
        let layout = Layout::TERMINAL;
        for (column, pile) in state.tableau().iter().enumerate() {
            for (depth, card) in pile.cards().iter().enumerate() {
                assert_eq!(card.position, layout.tableau_card_origin(column, depth));
                assert_eq!(card.location, Location::Pile(PileId::Tableau(column)));
            }
        }
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = GameState::with_seed(Layout::TERMINAL, 99);
        let b = GameState::with_seed(Layout::TERMINAL, 99);
        assert_eq!(ids(a.deck()), ids(b.deck()));
        assert_eq!(ids(&a.tableau()[0]), ids(&b.tableau()[0]));
    }

    #[test]
    fn test_reset_redeals_full_population() {
        let mut state = GameState::with_seed(Layout::TERMINAL, 5);
        state.draw_from_deck();
        state.draw_from_deck();
        state.deal_new_game();
        assert_eq!(state.deals(), 2);
        assert_eq!(state.total_cards(), 52);
        assert!(state.waste().is_empty());
        assert_eq!(state.deck().len(), 24);
    }

    #[test]
    fn test_draw_turns_three_and_shows_top() {
        let mut state = GameState::with_seed(Layout::TERMINAL, 11);
        let expected: Vec<CardId> = ids(state.deck()).into_iter().rev().take(3).collect();

        state.draw_from_deck();
        assert_eq!(state.deck().len(), 21);
        assert_eq!(ids(state.waste()), expected);
        let top = state.waste().top().unwrap();
        assert!(top.is_face_up() && top.is_draggable());
        assert!(state.waste().cards()[..2].iter().all(|c| !c.is_face_up()));

        state.draw_from_deck();
        assert_eq!(state.waste().len(), 6);
        let demoted = &state.waste().cards()[2];
        assert!(!demoted.is_face_up());
        assert!(!demoted.is_draggable());
    }

    #[test]
    fn test_draw_takes_what_is_left() {
        let mut state = blank();
        state.place(PileId::Deck, Card::new(Rank::Two, Suit::Clubs));
        state.place(PileId::Deck, Card::new(Rank::Five, Suit::Hearts));

        state.draw_from_deck();
        assert!(state.deck().is_empty());
        assert_eq!(state.waste().len(), 2);
        assert_eq!(state.waste().top().unwrap().rank(), Rank::Two);
    }

    #[test]
    fn test_recycle_restores_deck_order() {
        let mut state = GameState::with_seed(Layout::TERMINAL, 21);
        let original = ids(state.deck());

        for _ in 0..8 {
            state.draw_from_deck();
        }
        assert!(state.deck().is_empty());
        assert_eq!(state.waste().len(), 24);

        state.draw_from_deck();
        assert!(state.waste().is_empty());
        assert_eq!(ids(state.deck()), original);
        assert_eq!(state.total_cards(), 52);
        assert!(state.deck().cards().iter().all(|c| !c.is_face_up()));
    }

    #[test]
    fn test_draw_with_both_piles_empty_is_noop() {
        let mut state = blank();
        state.draw_from_deck();
        assert!(state.deck().is_empty());
        assert!(state.waste().is_empty());
    }

    #[test]
    fn test_foundation_accepts_ace_then_ascending() {
        let mut state = blank();
        for rank in Rank::ALL {
            assert!(state
                .try_auto_move_to_foundation(face_up(rank, Suit::Diamonds))
                .is_ok());
        }
        let pile = &state.foundations()[Suit::Diamonds.index()];
        assert_eq!(pile.len(), 13);
        for (i, card) in pile.cards().iter().enumerate() {
            assert_eq!(card.value() as usize, i);
            assert_eq!(card.suit(), Suit::Diamonds);
            assert!(!card.is_draggable());
        }
    }

    #[test]
    fn test_foundation_refuses_gaps() {
        let mut state = blank();
        let refused = state
            .try_auto_move_to_foundation(face_up(Rank::Two, Suit::Hearts))
            .unwrap_err();
        assert_eq!(refused.rank(), Rank::Two);

        assert!(state
            .try_auto_move_to_foundation(face_up(Rank::Ace, Suit::Hearts))
            .is_ok());
        assert!(state
            .try_auto_move_to_foundation(face_up(Rank::Three, Suit::Hearts))
            .is_err());
        // Spades has no ace yet
        assert!(state
            .try_auto_move_to_foundation(face_up(Rank::Two, Suit::Spades))
            .is_err());
    }

    #[test]
    fn test_auto_move_from_hands_back_refused_card() {
        let mut state = blank();
        state.place(PileId::Tableau(2), face_up(Rank::Nine, Suit::Clubs));
        let before = origin_of(&state, 2, 0);

        assert!(!state.auto_move_from(PileId::Tableau(2)));
        assert_eq!(state.tableau()[2].len(), 1);
        assert_eq!(origin_of(&state, 2, 0), before);
        assert!(!state.auto_move_from(PileId::Tableau(12)));
    }

    /// Column 0: hidden K♣, 9♠, 8♥. Column 1: 10♦. Column 2: 10♣. Column 3 empty.
    fn drag_fixture() -> GameState {
        let mut state = blank();
        state.place(PileId::Tableau(0), Card::new(Rank::King, Suit::Clubs));
        state.place(PileId::Tableau(0), face_up(Rank::Nine, Suit::Spades));
        state.place(PileId::Tableau(0), face_up(Rank::Eight, Suit::Hearts));
        state.place(PileId::Tableau(1), face_up(Rank::Ten, Suit::Diamonds));
        state.place(PileId::Tableau(2), face_up(Rank::Ten, Suit::Clubs));
        state
    }

    #[test]
    fn test_start_drag_lifts_the_run() {
        let mut state = drag_fixture();
        let grab = origin_of(&state, 0, 1) + Point::new(2, 1);
        assert!(state.start_drag(0, 1, grab));

        assert_eq!(state.tableau()[0].len(), 1);
        assert!(!state.tableau()[0].top().unwrap().is_face_up());
        let drag = state.drag().unwrap();
        assert_eq!(drag.cards().len(), 2);
        assert_eq!(drag.source(), PileId::Tableau(0));
        assert_eq!(drag.lead().rank(), Rank::Nine);
    }

    #[test]
    fn test_start_drag_refuses_hidden_cards() {
        let mut state = drag_fixture();
        assert!(!state.start_drag(0, 0, Point::default()));
        assert!(!state.start_drag(3, 0, Point::default()));
        assert!(!state.start_drag(9, 0, Point::default()));
        assert!(state.drag().is_none());
    }

    #[test]
    fn test_start_drag_needs_an_unbroken_run() {
        let mut state = blank();
        state.place(PileId::Tableau(4), face_up(Rank::Jack, Suit::Hearts));
        state.place(PileId::Tableau(4), Card::new(Rank::Five, Suit::Clubs));
        state.place(PileId::Tableau(4), face_up(Rank::Four, Suit::Hearts));

        // The jack is face up but a hidden card sits on it
        assert!(!state.start_drag(4, 0, Point::default()));
        assert!(!state.start_drag(4, 3, Point::default()));
        assert!(state.start_drag(4, 2, Point::default()));
        assert_eq!(state.tableau()[4].len(), 2);
    }

    #[test]
    fn test_only_one_drag_at_a_time() {
        let mut state = drag_fixture();
        assert!(state.start_drag(1, 0, Point::default()));
        assert!(!state.start_drag(2, 0, Point::default()));
    }

    #[test]
    fn test_drag_moves_in_lock_step() {
        let mut state = drag_fixture();
        let start = origin_of(&state, 0, 1);
        assert!(state.start_drag(0, 1, start + Point::new(3, 1)));

        state.drag_to(Point::new(60, 30));
        let cards = state.drag().unwrap().cards();
        assert_eq!(cards[0].position, Point::new(57, 29));
        assert_eq!(cards[1].position, Point::new(57, 31));
    }

    #[test]
    fn test_red_on_black_one_higher_is_legal() {
        let mut state = blank();
        state.place(PileId::Tableau(0), face_up(Rank::Seven, Suit::Hearts));
        state.place(PileId::Tableau(1), face_up(Rank::Eight, Suit::Spades));
        assert!(state.start_drag(0, 0, Point::default()));
        assert!(state.validate_drop(1));
    }

    #[test]
    fn test_red_on_red_is_illegal() {
        let mut state = blank();
        state.place(PileId::Tableau(0), face_up(Rank::Seven, Suit::Hearts));
        state.place(PileId::Tableau(1), face_up(Rank::Eight, Suit::Diamonds));
        assert!(state.start_drag(0, 0, Point::default()));
        assert!(!state.validate_drop(1));
    }

    #[test]
    fn test_wrong_rank_is_illegal() {
        let mut state = blank();
        state.place(PileId::Tableau(0), face_up(Rank::Seven, Suit::Hearts));
        state.place(PileId::Tableau(1), face_up(Rank::Nine, Suit::Clubs));
        assert!(state.start_drag(0, 0, Point::default()));
        assert!(!state.validate_drop(1));
        assert!(!state.validate_drop(7));
    }

    #[test]
    fn test_only_kings_on_empty_columns() {
        let mut state = drag_fixture();
        assert!(state.start_drag(0, 1, Point::default()));
        assert!(!state.validate_drop(3));
        state.snap(false, 3);

        let mut state = blank();
        state.place(PileId::Tableau(5), face_up(Rank::King, Suit::Hearts));
        assert!(state.start_drag(5, 0, Point::default()));
        assert!(state.validate_drop(3));
    }

    #[test]
    fn test_drop_on_own_column_snaps_back() {
        let mut state = blank();
        state.place(PileId::Tableau(0), face_up(Rank::Eight, Suit::Spades));
        state.place(PileId::Tableau(0), face_up(Rank::Seven, Suit::Hearts));
        assert!(state.start_drag(0, 1, Point::default()));
        assert!(!state.validate_drop(0));
    }

    #[test]
    fn test_legal_drop_settles_and_turns_over_source() {
        let mut state = drag_fixture();
        let grab = origin_of(&state, 0, 1);
        assert!(state.start_drag(0, 1, grab));

        let over_column_1 = state.layout().tableau_card_origin(1, 0) + Point::new(1, 1);
        state.drag_to(over_column_1);
        assert!(state.drop_at(over_column_1));

        assert!(state.drag().is_none());
        let column = &state.tableau()[1];
        assert_eq!(column.len(), 3);
        assert_eq!(column.cards()[1].rank(), Rank::Nine);
        assert_eq!(column.cards()[2].rank(), Rank::Eight);
        assert_eq!(
            column.cards()[2].position,
            state.layout().tableau_card_origin(1, 2)
        );
        let exposed = state.tableau()[0].top().unwrap();
        assert!(exposed.is_face_up() && exposed.is_draggable());
    }

    #[test]
    fn test_illegal_drop_restores_column_exactly() {
        let mut state = drag_fixture();
        let before = ids(&state.tableau()[0]);
        let positions: Vec<Point> = state.tableau()[0].cards().iter().map(|c| c.position).collect();

        assert!(state.start_drag(0, 1, origin_of(&state, 0, 1)));
        let over_column_2 = state.layout().tableau_card_origin(2, 0);
        state.drag_to(over_column_2);
        assert!(!state.drop_at(over_column_2));

        assert_eq!(ids(&state.tableau()[0]), before);
        let after: Vec<Point> = state.tableau()[0].cards().iter().map(|c| c.position).collect();
        assert_eq!(after, positions);
        assert!(!state.tableau()[0].cards()[0].is_face_up());
        assert_eq!(state.total_cards(), 5);
    }

    #[test]
    fn test_waste_drag_snaps_back_to_waste() {
        let mut state = blank();
        state.place(PileId::Deck, Card::new(Rank::Jack, Suit::Clubs));
        state.place(PileId::Deck, Card::new(Rank::Four, Suit::Hearts));
        state.draw_from_deck();
        let top = state.waste().top().unwrap().id();

        assert!(state.start_waste_drag(Point::new(13, 2)));
        assert_eq!(state.waste().len(), 1);
        assert!(!state.drop_at(Point::new(40, 20)));
        assert_eq!(state.waste().top().unwrap().id(), top);
        assert_eq!(
            state.waste().top().unwrap().position,
            state.layout().pile_rect(PileId::Waste).origin()
        );
    }

    #[test]
    fn test_legal_waste_drop_shows_next_waste_card() {
        let mut state = blank();
        state.place(PileId::Tableau(4), face_up(Rank::Queen, Suit::Spades));
        state.place(PileId::Deck, Card::new(Rank::Jack, Suit::Diamonds));
        state.place(PileId::Deck, Card::new(Rank::Three, Suit::Clubs));
        state.place(PileId::Deck, Card::new(Rank::Jack, Suit::Hearts));
        state.draw_from_deck();

        assert!(state.start_waste_drag(Point::new(13, 2)));
        assert!(state.validate_drop(4));
        state.snap(true, 4);
        assert_eq!(state.tableau()[4].top().unwrap().rank(), Rank::Jack);
        let waste_top = state.waste().top().unwrap();
        assert_eq!(waste_top.rank(), Rank::Three);
        assert!(waste_top.is_face_up());
    }

    #[test]
    fn test_flip_next_falls_back_to_waste() {
        let mut state = blank();
        state.place(PileId::Waste, Card::new(Rank::Six, Suit::Spades));
        state.flip_next(PileId::Deck);
        assert!(state.waste().top().unwrap().is_face_up());

        state.place(PileId::Tableau(6), Card::new(Rank::Two, Suit::Spades));
        state.flip_next(PileId::Tableau(6));
        assert!(state.tableau()[6].top().unwrap().is_face_up());
        // Already face-up: no-op
        state.flip_next(PileId::Tableau(6));
        assert!(state.tableau()[6].top().unwrap().is_face_up());
    }

    #[test]
    fn test_tableau_hit_picks_topmost_card() {
        let state = drag_fixture();
        let layout = Layout::TERMINAL;
        let second = layout.tableau_card_origin(0, 1);
        let third = layout.tableau_card_origin(0, 2);
        assert_eq!(state.tableau_hit(0, second), Some(1));
        assert_eq!(state.tableau_hit(0, third + Point::new(0, 4)), Some(2));
        assert_eq!(state.tableau_hit(0, Point::new(second.x, 60)), None);
        assert_eq!(state.tableau_hit(3, second), None);
    }

    #[test]
    fn test_won_only_with_four_full_foundations() {
        let mut state = blank();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                assert!(!state.is_won());
                assert!(state.try_auto_move_to_foundation(face_up(rank, suit)).is_ok());
            }
        }
        assert!(state.is_won());
    }
}
