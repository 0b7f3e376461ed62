use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Green felt with a slow wave running across it
pub struct FeltWidget {
    pub tick: u64,
}

impl FeltWidget {
    pub fn new(tick: u64) -> Self {
        Self { tick }
    }
}

impl Widget for FeltWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cycle = (self.tick % 360) as f64;
        let (base_r, base_g, base_b) = Theme::FELT_RGB;
        let (base_r, base_g, base_b) = (base_r as i16, base_g as i16, base_b as i16);

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let wave = ((x as f64 * 0.2 + y as f64 * 0.4 + cycle * 0.02).sin() * 3.0) as i16;

                let r = (base_r + wave / 2).clamp(0, 255) as u8;
                let g = (base_g + wave).clamp(0, 255) as u8;
                let b = (base_b + wave / 2).clamp(0, 255) as u8;

                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_bg(Color::Rgb(r, g, b));
                }
            }
        }
    }
}
