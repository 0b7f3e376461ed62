use crate::card::{Card, CardId};
use crate::engine::GameState;
use crate::layout::{Rect, Size};
use crate::pile::PileId;

/// Help text drawn under the reset button
pub const HELP_LINES: [&str; 3] = ["Click or R", "to reset", "Esc quits"];
pub const WIN_MESSAGE: &str = "You Win";
pub const BANNER_SIZE: Size = Size::new(21, 5);

/// What to draw in a rectangle of the render surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    /// Empty pile placeholder
    Outline,
    ResetButton,
    Text(&'static str),
    Face(CardId),
    Back,
    WinBanner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blit {
    pub sprite: Sprite,
    pub rect: Rect,
}

/// One frame's worth of blits, back to front
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    blits: Vec<Blit>,
}

impl Scene {
    pub fn blits(&self) -> &[Blit] {
        &self.blits
    }

    fn push(&mut self, sprite: Sprite, rect: Rect) {
        self.blits.push(Blit { sprite, rect });
    }

    fn push_card(&mut self, game: &GameState, card: &Card) {
        let sprite = if card.is_face_up() {
            Sprite::Face(card.id())
        } else {
            Sprite::Back
        };
        self.push(sprite, game.layout().card_rect(card.position));
    }
}

/// Lay out a frame: outlines, menu, tableau, foundations, deck, waste,
/// dragged cards, then the banner when it is showing.
pub fn compose(game: &GameState, banner_visible: bool, surface: Size) -> Scene {
    let layout = game.layout();
    let mut scene = Scene::default();

    for pile in game.tableau().iter().chain(game.foundations()) {
        scene.push(Sprite::Outline, layout.pile_rect(pile.id()));
    }
    scene.push(Sprite::Outline, layout.pile_rect(PileId::Deck));
    scene.push(Sprite::Outline, layout.pile_rect(PileId::Waste));

    for (i, line) in HELP_LINES.into_iter().enumerate() {
        let origin = layout.help_line_origin(i);
        scene.push(
            Sprite::Text(line),
            Rect::new(origin.x, origin.y, line.chars().count() as i32, 1),
        );
    }
    scene.push(Sprite::ResetButton, layout.reset_button());

    for column in game.tableau() {
        for card in column.cards() {
            scene.push_card(game, card);
        }
    }

    for foundation in game.foundations() {
        if let Some(top) = foundation.top() {
            scene.push_card(game, top);
        }
    }

    if !game.deck().is_empty() {
        scene.push(Sprite::Back, layout.pile_rect(PileId::Deck));
    }

    if let Some(top) = game.waste().top() {
        scene.push_card(game, top);
    }

    if let Some(drag) = game.drag() {
        for card in drag.cards() {
            scene.push_card(game, card);
        }
    }

    if banner_visible {
        let screen = Rect::new(0, 0, surface.width, surface.height);
        scene.push(Sprite::WinBanner, screen.centered(BANNER_SIZE));
    }

    scene
}
