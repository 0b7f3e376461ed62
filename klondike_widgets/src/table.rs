use klondike_core::{Blit, Scene, Sprite};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::banner::BannerWidget;
use crate::canvas::Canvas;
use crate::card::CardArt;
use crate::theme::Theme;

const RESET_LABEL: &str = "Reset";

/// Blits a composed [`Scene`] onto the buffer, back to front
pub struct TableWidget<'a, A: CardArt> {
    pub scene: &'a Scene,
    pub art: &'a A,
}

impl<'a, A: CardArt> TableWidget<'a, A> {
    pub fn new(scene: &'a Scene, art: &'a A) -> Self {
        Self { scene, art }
    }

    fn blit(&self, canvas: &Canvas, blit: &Blit, buf: &mut Buffer) {
        let rect = blit.rect;
        match blit.sprite {
            Sprite::Outline => {
                canvas.rounded_box(buf, rect, Style::default().fg(Theme::OUTLINE));
            }
            Sprite::ResetButton => {
                let style = Style::default()
                    .fg(Theme::BUTTON_FG)
                    .bg(Theme::BUTTON_BG)
                    .add_modifier(Modifier::BOLD);
                canvas.fill(buf, rect, ' ', style);
                let width = RESET_LABEL.len() as i32;
                let x = rect.x + (rect.width - width).max(0) / 2;
                canvas.text(buf, x, rect.y, RESET_LABEL, style);
            }
            Sprite::Text(text) => {
                canvas.text(buf, rect.x, rect.y, text, Style::default().fg(Theme::BRIGHT_TEXT));
            }
            Sprite::Face(id) => self.art.face(id).draw(canvas, rect, buf),
            Sprite::Back => self.art.back().draw(canvas, rect, buf),
            Sprite::WinBanner => {
                if let Some(area) = canvas.clip(rect) {
                    BannerWidget::default().render(area, buf);
                }
            }
        }
    }
}

impl<A: CardArt> Widget for TableWidget<'_, A> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let canvas = Canvas::new(area);
        for blit in self.scene.blits() {
            self.blit(&canvas, blit, buf);
        }
    }
}
