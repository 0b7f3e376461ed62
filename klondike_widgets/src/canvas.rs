//! Clipped drawing onto a buffer in table coordinates.
//!
//! Scene rects are signed and may hang off the edge of the terminal (a card
//! being dragged past the border, a deep tableau column), so every write goes
//! through these helpers instead of straight to [`Buffer`].

use klondike_core::Rect as TableRect;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

/// A buffer region with the table origin pinned to its top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    pub area: Rect,
}

impl Canvas {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    /// Write one cell; anything outside the area is dropped
    pub fn put(&self, buf: &mut Buffer, x: i32, y: i32, ch: char, style: Style) {
        if x < 0 || y < 0 || x >= self.area.width as i32 || y >= self.area.height as i32 {
            return;
        }
        let pos = (self.area.x + x as u16, self.area.y + y as u16);
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(ch);
            cell.set_style(style);
        }
    }

    pub fn text(&self, buf: &mut Buffer, x: i32, y: i32, text: &str, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            self.put(buf, x + i as i32, y, ch, style);
        }
    }

    pub fn fill(&self, buf: &mut Buffer, rect: TableRect, ch: char, style: Style) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.put(buf, x, y, ch, style);
            }
        }
    }

    /// Draw a rounded single-line border around `rect`
    pub fn rounded_box(&self, buf: &mut Buffer, rect: TableRect, style: Style) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);
        for x in rect.x + 1..right {
            self.put(buf, x, rect.y, '\u{2500}', style); // ─
            self.put(buf, x, bottom, '\u{2500}', style);
        }
        for y in rect.y + 1..bottom {
            self.put(buf, rect.x, y, '\u{2502}', style); // │
            self.put(buf, right, y, '\u{2502}', style);
        }
        self.put(buf, rect.x, rect.y, '\u{256d}', style); // ╭
        self.put(buf, right, rect.y, '\u{256e}', style); // ╮
        self.put(buf, rect.x, bottom, '\u{2570}', style); // ╰
        self.put(buf, right, bottom, '\u{256f}', style); // ╯
    }

    /// The part of `rect` that lands inside the area, in buffer coordinates
    pub fn clip(&self, rect: TableRect) -> Option<Rect> {
        let left = rect.x.max(0);
        let top = rect.y.max(0);
        let right = rect.right().min(self.area.width as i32);
        let bottom = rect.bottom().min(self.area.height as i32);
        if left >= right || top >= bottom {
            return None;
        }
        Some(Rect::new(
            self.area.x + left as u16,
            self.area.y + top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ))
    }
}
