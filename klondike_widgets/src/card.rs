use klondike_core::{CardColor, CardId, Rect as TableRect};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::canvas::Canvas;
use crate::theme::Theme;

/// Supplies the picture for every card identity plus the shared back
pub trait CardArt {
    fn face(&self, id: CardId) -> CardWidget;
    fn back(&self) -> CardWidget;
}

/// Box-drawn cards in the table theme
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxArt;

impl CardArt for BoxArt {
    fn face(&self, id: CardId) -> CardWidget {
        CardWidget::face(id)
    }

    fn back(&self) -> CardWidget {
        CardWidget::back()
    }
}

/// A visual playing card widget
#[derive(Debug, Clone, Copy)]
pub struct CardWidget {
    /// `None` draws the back
    pub id: Option<CardId>,
}

impl CardWidget {
    pub fn face(id: CardId) -> Self {
        Self { id: Some(id) }
    }

    pub fn back() -> Self {
        Self { id: None }
    }

    /// Draw the card into `rect`, which may lie partly off the canvas
    pub fn draw(&self, canvas: &Canvas, rect: TableRect, buf: &mut Buffer) {
        if rect.width < 4 || rect.height < 3 {
            return;
        }

        let border_style = Style::default().fg(Theme::CARD_BORDER).bg(Theme::CARD_FACE);
        match self.id {
            Some(id) => {
                canvas.fill(buf, rect, ' ', Style::default().bg(Theme::CARD_FACE));
                canvas.rounded_box(buf, rect, border_style);
                draw_face(canvas, rect, buf, id);
            }
            None => {
                draw_back(canvas, rect, buf);
                canvas.rounded_box(buf, rect, border_style);
            }
        }
    }
}

impl Widget for CardWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = TableRect::new(0, 0, area.width as i32, area.height as i32);
        self.draw(&Canvas::new(area), rect, buf);
    }
}

fn suit_color(id: CardId) -> Color {
    match id.suit.color() {
        CardColor::Red => Theme::RED_SUIT,
        CardColor::Black => Theme::BLACK_SUIT,
    }
}

fn draw_face(canvas: &Canvas, rect: TableRect, buf: &mut Buffer, id: CardId) {
    let color = suit_color(id);
    let rank_style = Style::default()
        .fg(color)
        .bg(Theme::CARD_FACE)
        .add_modifier(Modifier::BOLD);
    let suit_style = Style::default().fg(color).bg(Theme::CARD_FACE);

    let rank = id.rank.short_name();
    let suit = id.suit.symbol();
    let rank_len = rank.chars().count() as i32;

    // Top-left: rank then suit
    canvas.text(buf, rect.x + 1, rect.y + 1, rank, rank_style);
    canvas.put(buf, rect.x + 1 + rank_len, rect.y + 1, suit, suit_style);

    // Center pip
    canvas.put(
        buf,
        rect.x + rect.width / 2,
        rect.y + rect.height / 2,
        suit,
        suit_style,
    );

    // Bottom-right: suit then rank, flush against the right border
    let br_y = rect.bottom() - 2;
    let br_x = rect.right() - 1 - rank_len;
    canvas.text(buf, br_x, br_y, rank, rank_style);
    canvas.put(buf, br_x - 1, br_y, suit, suit_style);
}

fn draw_back(canvas: &Canvas, rect: TableRect, buf: &mut Buffer) {
    let style = Style::default().fg(Theme::CARD_BACK_ALT).bg(Theme::CARD_BACK);
    for y in 1..rect.height - 1 {
        for x in 1..rect.width - 1 {
            let pattern = if (x + y) % 2 == 0 { '\u{2593}' } else { '\u{2591}' }; // ▓ ░
            canvas.put(buf, rect.x + x, rect.y + y, pattern, style);
        }
    }
}
