use std::collections::BTreeSet;

/// ## Palette
///
/// The only colors a program can name.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    Black,
    White,
    Transparent,
}

impl Color {
    pub const PALETTE: [Color; 9] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Purple,
        Color::Black,
        Color::White,
        Color::Transparent,
    ];

    pub fn from_name(name: &str) -> Option<Color> {
        Color::PALETTE
            .iter()
            .copied()
            .find(|color| color.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn name(self) -> &'static str {
        use Color::*;
        match self {
            Red => "Red",
            Blue => "Blue",
            Green => "Green",
            Yellow => "Yellow",
            Orange => "Orange",
            Purple => "Purple",
            Black => "Black",
            White => "White",
            Transparent => "Transparent",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// ## Square raster of palette colors
///
/// Every write goes through [`Canvas::set`], which also records the cell so a
/// renderer can redraw only what changed.

#[derive(Debug, Clone)]
pub struct Canvas {
    size: usize,
    cells: Vec<Color>,
    modified: BTreeSet<(i32, i32)>,
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::new(0)
    }
}

impl Canvas {
    pub fn new(size: usize) -> Canvas {
        Canvas {
            size,
            cells: vec![Color::White; size * size],
            modified: BTreeSet::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.size + x as usize)
        } else {
            None
        }
    }

    /// `None` outside the canvas.
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|index| self.cells[index])
    }

    /// Returns false and does nothing outside the canvas.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.index(x, y) {
            Some(index) => {
                self.cells[index] = color;
                self.modified.insert((x, y));
                true
            }
            None => false,
        }
    }

    pub fn modified(&self) -> &BTreeSet<(i32, i32)> {
        &self.modified
    }

    /// Hands the changed cells to a renderer and forgets them.
    pub fn drain_modified(&mut self) -> Vec<(i32, i32)> {
        std::mem::take(&mut self.modified).into_iter().collect()
    }

    /// Cells of `color` in the rectangle spanned by two corners, clamped to the canvas.
    pub fn count(&self, color: Color, x1: i32, y1: i32, x2: i32, y2: i32) -> usize {
        if self.size == 0 {
            return 0;
        }
        let max = self.size as i32 - 1;
        let (left, right) = (x1.min(x2).max(0), x1.max(x2).min(max));
        let (top, bottom) = (y1.min(y2).max(0), y1.max(y2).min(max));
        let mut count = 0;
        for y in top..=bottom {
            for x in left..=right {
                if self.get(x, y) == Some(color) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Rows of colors, top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, Color> {
        self.cells.chunks(self.size.max(1))
    }
}
