use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use klondike_core::{Controller, GameState, Input, Key, Layout, Point, Size};
use klondike_widgets::{BoxArt, FeltWidget, TableWidget};
use ratatui::Frame;
use tachyonfx::Duration;

use crate::effects::{self, FxManager};
use crate::error::StartupError;

/// Main application state
pub struct App {
    controller: Controller,
    art: BoxArt,
    pub tick: u64,
    pub fx: FxManager,
    frame_time: Duration,
    /// Deal counter seen on the previous tick
    seen_deals: u64,
    was_won: bool,
}

impl App {
    pub fn new(game: GameState, fps: u32, flash_ticks: u32) -> Self {
        Self {
            controller: Controller::new(game, flash_ticks),
            art: BoxArt,
            tick: 0,
            fx: FxManager::default(),
            frame_time: Duration::from_millis((1000 / fps.max(1)).into()),
            seen_deals: 0,
            was_won: false,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.controller.should_quit()
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        frame.render_widget(FeltWidget::new(self.tick), area);

        let scene = self
            .controller
            .scene(Size::new(area.width as i32, area.height as i32));
        frame.render_widget(TableWidget::new(&scene, &self.art), area);

        // Apply all tachyonfx effects on top of rendered content
        let buf = frame.buffer_mut();
        self.fx.process_effects(self.frame_time, buf, area);
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Some(input) = translate(event) {
            self.controller.handle(input);
        }
    }

    pub fn tick(&mut self) {
        self.tick += 1;
        self.controller.tick();

        // Detect new deals and the win and trigger effects
        let deals = self.controller.game().deals();
        if deals != self.seen_deals {
            self.fx.cancel_unique_effect(effects::WIN);
            self.fx
                .add_unique_effect(effects::DEAL, effects::deal_sweep());
            self.seen_deals = deals;
        }

        let won = self.controller.is_won();
        if won && !self.was_won {
            self.fx
                .add_unique_effect(effects::WIN, effects::win_shimmer());
        }
        self.was_won = won;
    }
}

/// Map a terminal event onto the game's input vocabulary
pub fn translate(event: &Event) -> Option<Input> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let input = match key.code {
        // Raw mode swallows SIGINT
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        KeyCode::Esc => Input::Key(Key::Escape),
        KeyCode::Char('r') | KeyCode::Char('R') => Input::Key(Key::Reset),
        _ => Input::Key(Key::Other),
    };
    Some(input)
}

fn translate_mouse(mouse: &MouseEvent) -> Option<Input> {
    let p = Point::new(mouse.column as i32, mouse.row as i32);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Input::PointerDown(p)),
        MouseEventKind::Up(MouseButton::Left) => Some(Input::PointerUp(p)),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            Some(Input::PointerMove(p))
        }
        _ => None,
    }
}

/// Refuse to start on a terminal that cannot show a full deal
pub fn ensure_fits(width: u16, height: u16, layout: &Layout) -> Result<(), StartupError> {
    let min = layout.min_surface();
    if (width as i32) < min.width || (height as i32) < min.height {
        return Err(StartupError::TerminalTooSmall {
            width,
            height,
            min_width: min.width,
            min_height: min.height,
        });
    }
    Ok(())
}
