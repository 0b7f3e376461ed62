use klondike_core::scene::WIN_MESSAGE;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Widget};

use crate::theme::Theme;

/// The flashing end-of-game banner
pub struct BannerWidget<'a> {
    pub message: &'a str,
}

impl Default for BannerWidget<'_> {
    fn default() -> Self {
        Self {
            message: WIN_MESSAGE,
        }
    }
}

impl<'a> BannerWidget<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for BannerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Theme::GOLD))
            .style(Style::default().bg(Theme::BANNER_BG));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let width = self.message.chars().count() as u16;
        let x = inner.x + inner.width.saturating_sub(width) / 2;
        let y = inner.y + inner.height / 2;
        buf.set_stringn(
            x,
            y,
            self.message,
            inner.width as usize,
            Style::default()
                .fg(Theme::GOLD)
                .add_modifier(Modifier::BOLD),
        );
    }
}
