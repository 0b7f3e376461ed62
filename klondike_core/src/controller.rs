use log::{debug, info};

use crate::engine::GameState;
use crate::layout::{Point, Size, TABLEAU_ROW};
use crate::pile::PileId;
use crate::scene::{self, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Reset,
    Other,
}

/// Input events, in render-surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    Key(Key),
    PointerDown(Point),
    PointerUp(Point),
    PointerMove(Point),
}

/// What the pointer is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Idle,
    Dragging,
    /// Pressed on the reset button; released over it confirms
    ResetArmed,
}

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won { banner_visible: bool, countdown: u32 },
    Quit,
}

/// Turns input events into moves on the game state
#[derive(Debug)]
pub struct Controller {
    game: GameState,
    interaction: Interaction,
    phase: Phase,
    /// Ticks between banner toggles once the game is won
    flash_ticks: u32,
}

impl Controller {
    pub fn new(game: GameState, flash_ticks: u32) -> Self {
        Self {
            game,
            interaction: Interaction::Idle,
            phase: Phase::Playing,
            flash_ticks: flash_ticks.max(1),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn should_quit(&self) -> bool {
        self.phase == Phase::Quit
    }

    pub fn is_won(&self) -> bool {
        matches!(self.phase, Phase::Won { .. })
    }

    pub fn handle(&mut self, input: Input) {
        match self.phase {
            Phase::Quit => return,
            // After a win any key or a close request ends the game
            Phase::Won { .. } => {
                if matches!(input, Input::Quit | Input::Key(_)) {
                    self.phase = Phase::Quit;
                }
                return;
            }
            Phase::Playing => {}
        }

        match input {
            Input::Quit | Input::Key(Key::Escape) => {
                info!("quit requested");
                self.phase = Phase::Quit;
            }
            Input::Key(Key::Reset) => self.reset(),
            Input::Key(Key::Other) => {}
            Input::PointerDown(p) => {
                if self.interaction == Interaction::Idle {
                    self.pointer_down(p);
                }
            }
            Input::PointerMove(p) => {
                if self.interaction == Interaction::Dragging {
                    self.game.drag_to(p);
                }
            }
            Input::PointerUp(p) => self.pointer_up(p),
        }
    }

    /// Advance one frame: detect the win and blink the banner
    pub fn tick(&mut self) {
        match self.phase {
            Phase::Playing => {
                if self.game.is_won() {
                    info!("all foundations complete");
                    self.interaction = Interaction::Idle;
                    self.phase = Phase::Won {
                        banner_visible: true,
                        countdown: self.flash_ticks,
                    };
                }
            }
            Phase::Won {
                banner_visible,
                countdown,
            } => {
                let countdown = countdown.saturating_sub(1);
                self.phase = if countdown == 0 {
                    Phase::Won {
                        banner_visible: !banner_visible,
                        countdown: self.flash_ticks,
                    }
                } else {
                    Phase::Won {
                        banner_visible,
                        countdown,
                    }
                };
            }
            Phase::Quit => {}
        }
    }

    pub fn scene(&self, surface: Size) -> Scene {
        let banner_visible = matches!(
            self.phase,
            Phase::Won {
                banner_visible: true,
                ..
            }
        );
        scene::compose(&self.game, banner_visible, surface)
    }

    fn reset(&mut self) {
        self.game.deal_new_game();
        self.interaction = Interaction::Idle;
    }

    fn pointer_down(&mut self, p: Point) {
        let layout = *self.game.layout();
        let cell = layout.screen_to_grid(p);

        if cell.row >= TABLEAU_ROW {
            self.press_tableau(cell.col, p);
            return;
        }

        if layout.pile_rect(PileId::Deck).contains(p) {
            self.game.draw_from_deck();
        }
        if layout.pile_rect(PileId::Waste).contains(p) && !self.game.waste().is_empty() {
            self.press_waste(p);
        }
        if layout.reset_button().contains(p) {
            debug!("reset armed");
            self.interaction = Interaction::ResetArmed;
        }
    }

    fn press_tableau(&mut self, column: usize, p: Point) {
        let Some(index) = self.game.tableau_hit(column, p) else {
            return;
        };
        let Some(pile) = self.game.pile(PileId::Tableau(column)) else {
            return;
        };
        let is_top = index + 1 == pile.len();
        if !pile.cards()[index].is_face_up() {
            return;
        }

        if is_top && self.game.auto_move_from(PileId::Tableau(column)) {
            self.game.flip_next(PileId::Tableau(column));
            return;
        }

        if self.game.start_drag(column, index, p) {
            self.interaction = Interaction::Dragging;
        }
    }

    fn press_waste(&mut self, p: Point) {
        if self.game.auto_move_from(PileId::Waste) {
            self.game.flip_next(PileId::Waste);
        } else if self.game.start_waste_drag(p) {
            self.interaction = Interaction::Dragging;
        }
    }

    fn pointer_up(&mut self, p: Point) {
        match self.interaction {
            Interaction::Dragging => {
                self.game.drop_at(p);
            }
            Interaction::ResetArmed => {
                if self.game.layout().reset_button().contains(p) {
                    self.reset();
                } else {
                    debug!("reset cancelled");
                }
            }
            Interaction::Idle => {}
        }
        self.interaction = Interaction::Idle;
    }
}
