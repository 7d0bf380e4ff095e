// Core value types shared by the frame, the planner and the fill workers.

use std::fmt::{self, Display};

/// Cell value of a fresh frame ("black").
pub const BLACK: u8 = 0xFF;
/// Cell value written by `draw` ("white").
pub const WHITE: u8 = 0x00;

/// Inclusive cell region `(x1..=x2, y1..=y2)`.
/// `x` indexes rows (inside a column), `y` indexes columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

impl Rect {
    pub const fn new(x1: usize, y1: usize, x2: usize, y2: usize) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// `x1 <= x2 < rows` and `y1 <= y2 < cols`.
    pub fn fits(&self, rows: usize, cols: usize) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2 && self.x2 < rows && self.y2 < cols
    }

    /// Cells per column run. Only meaningful for an ordered rect.
    pub fn rows_to_draw(&self) -> usize {
        self.x2 - self.x1 + 1
    }

    /// Width of the column span. Only meaningful for an ordered rect.
    pub fn cols_to_draw(&self) -> usize {
        self.y2 - self.y1 + 1
    }

    pub fn cell_count(&self) -> usize {
        self.rows_to_draw() * self.cols_to_draw()
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        (self.x1..=self.x2).contains(&x) && (self.y1..=self.y2).contains(&y)
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x1-y1: {}-{}, x2-y2: {}-{})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// Inclusive column range `first..=last`, relative to `Rect::y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub first: usize,
    pub last: usize,
}

impl Segment {
    pub const fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }

    pub fn width(&self) -> usize {
        self.last - self.first + 1
    }
}

impl From<(usize, usize)> for Segment {
    fn from((first, last): (usize, usize)) -> Self {
        Self { first, last }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "col {} - {}", self.first, self.last)
    }
}
