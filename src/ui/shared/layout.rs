#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Rectangle from a top-left position and a size.
    pub fn at(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { left: x, top: y, right: x + width, bottom: y + height }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.left >= self.left && other.top >= self.top
            && other.right <= self.right && other.bottom <= self.bottom
    }
}
