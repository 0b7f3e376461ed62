use std::ops::{Add, Sub};

use crate::pile::PileId;

/// Grid row holding the deck, waste, menu and foundations
pub const FOUNDATION_ROW: usize = 0;
/// Grid row where the tableau columns start
pub const TABLEAU_ROW: usize = 2;
/// Grid column of the menu / reset control
pub const MENU_COLUMN: usize = 2;
/// First grid column of the foundations
pub const FOUNDATION_COLUMN: usize = 3;

/// A position on the render surface. Dragged cards may hang past the
/// top-left edge, so coordinates are signed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn at(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// A rect of `size` centered inside this one
    pub fn centered(&self, size: Size) -> Rect {
        Rect::new(
            self.x + (self.width - size.width) / 2,
            self.y + (self.height - size.height) / 2,
            size.width,
            size.height,
        )
    }
}

/// A logical slot on the table grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Table geometry: an affine grid of padded tiles, one axis at a time.
///
/// Each axis has its own tile and buffer length because terminal cells are
/// roughly twice as tall as they are wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub tile: Size,
    pub buffer: Size,
    /// Number of grid columns and rows; classification clamps into this
    pub grid: Size,
}

impl Layout {
    /// Metrics for an ordinary terminal: ten cells across, four rows per tile.
    pub const TERMINAL: Layout = Layout {
        tile: Size::new(10, 4),
        buffer: Size::new(1, 1),
        grid: Size::new(7, 16),
    };

    /// Cards are a tile wide and one and a half tiles tall
    pub fn card_size(&self) -> Size {
        Size::new(self.tile.width, self.tile.height * 3 / 2)
    }

    /// Vertical distance between stacked tableau cards
    pub fn stack_offset(&self) -> i32 {
        self.tile.height / 2
    }

    /// The tile-sized rectangle of a grid cell
    pub fn grid_to_screen(&self, cell: Cell) -> Rect {
        Rect::new(
            to_screen(cell.col as i32, self.tile.width, self.buffer.width),
            to_screen(cell.row as i32, self.tile.height, self.buffer.height),
            self.tile.width,
            self.tile.height,
        )
    }

    /// Classify a point into a grid cell. Points in a gutter belong to the
    /// cell before it; points outside the grid land on its boundary.
    pub fn screen_to_grid(&self, p: Point) -> Cell {
        Cell::new(
            to_grid(p.x, self.tile.width, self.buffer.width, self.grid.width),
            to_grid(p.y, self.tile.height, self.buffer.height, self.grid.height),
        )
    }

    pub fn pile_cell(&self, pile: PileId) -> Cell {
        match pile {
            PileId::Deck => Cell::new(0, FOUNDATION_ROW),
            PileId::Waste => Cell::new(1, FOUNDATION_ROW),
            PileId::Foundation(i) => Cell::new(FOUNDATION_COLUMN + i, FOUNDATION_ROW),
            PileId::Tableau(i) => Cell::new(i, TABLEAU_ROW),
        }
    }

    /// The card-sized outline of a pile's resting place
    pub fn pile_rect(&self, pile: PileId) -> Rect {
        self.card_rect(self.grid_to_screen(self.pile_cell(pile)).origin())
    }

    pub fn menu_rect(&self) -> Rect {
        self.card_rect(
            self.grid_to_screen(Cell::new(MENU_COLUMN, FOUNDATION_ROW))
                .origin(),
        )
    }

    pub fn card_rect(&self, origin: Point) -> Rect {
        Rect::at(origin, self.card_size())
    }

    /// Where the `depth`-th card of a tableau column rests
    pub fn tableau_card_origin(&self, column: usize, depth: usize) -> Point {
        let top = self.grid_to_screen(Cell::new(column, TABLEAU_ROW)).origin();
        Point::new(top.x, top.y + self.stack_offset() * depth as i32)
    }

    /// The reset button: inset by one buffer inside the menu slot, a quarter
    /// tile tall
    pub fn reset_button(&self) -> Rect {
        let menu = self.menu_rect();
        Rect::new(
            menu.x + self.buffer.width,
            menu.y,
            menu.width - self.buffer.width * 2,
            (self.tile.height / 4).max(1),
        )
    }

    /// Top-left of the `line`-th line of help text under the reset button
    pub fn help_line_origin(&self, line: usize) -> Point {
        let button = self.reset_button();
        Point::new(button.x, button.bottom() + self.buffer.height + line as i32)
    }

    /// Smallest surface that shows the top row and a freshly dealt tableau
    pub fn min_surface(&self) -> Size {
        let columns = self.grid.width;
        let deepest = self.tableau_card_origin(0, 6);
        Size::new(
            to_screen(columns, self.tile.width, self.buffer.width),
            deepest.y + self.card_size().height,
        )
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::TERMINAL
    }
}

fn to_screen(index: i32, tile: i32, buffer: i32) -> i32 {
    index * tile + (index + 1) * buffer
}

fn to_grid(v: i32, tile: i32, buffer: i32, cells: i32) -> usize {
    let index = (v - buffer).div_euclid(tile + buffer);
    index.clamp(0, (cells - 1).max(0)) as usize
}
