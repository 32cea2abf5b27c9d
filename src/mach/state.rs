use super::{Canvas, Color, Var};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub spawned: bool,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    color: Color,
    size: i32,
}

impl Default for Brush {
    fn default() -> Self {
        Brush {
            color: Color::Transparent,
            size: 1,
        }
    }
}

impl Brush {
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Even sizes drop to the odd size below so stamps have a center pixel.
    pub fn set_size(&mut self, size: i32) {
        debug_assert!(size > 0);
        self.size = if size % 2 == 0 { size - 1 } else { size };
    }

    pub fn is_transparent(&self) -> bool {
        self.color == Color::Transparent
    }
}

/// ## Everything a program can change
///
/// Rebuilt from scratch for every run.

#[derive(Debug, Clone, Default)]
pub struct State {
    pub canvas: Canvas,
    pub cursor: Cursor,
    pub brush: Brush,
    pub vars: Var,
}

impl State {
    pub fn new(canvas_size: usize) -> State {
        State {
            canvas: Canvas::new(canvas_size),
            ..State::default()
        }
    }

    pub fn canvas_size(&self) -> i32 {
        self.canvas.size() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brush_size_rounds_down_to_odd() {
        let mut brush = Brush::default();
        assert_eq!(brush.size(), 1);
        brush.set_size(4);
        assert_eq!(brush.size(), 3);
        brush.set_size(5);
        assert_eq!(brush.size(), 5);
        brush.set_size(2);
        assert_eq!(brush.size(), 1);
    }

    #[test]
    fn test_new_state() {
        let state = State::new(7);
        assert_eq!(state.canvas_size(), 7);
        assert!(!state.cursor.spawned);
        assert!(state.brush.is_transparent());
    }
}
