//! Small geometry types shared by sprites, frames and the renderer.
//!
//! - [`Rect`] – integer pixel rectangle (crop region in a sprite sheet or a
//!   destination on screen)
//! - [`Vec2`] – float vector used for positions and velocities

use serde::{Deserialize, Serialize};

/// Integer pixel rectangle with its top-left corner at (`x`, `y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Same size, moved so its top-left corner is at (`x`, `y`).
    pub fn at(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn scale_by(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_at_keeps_size() {
        let r = Rect::new(1, 2, 32, 16).at(10, 20);
        assert_eq!(r, Rect::new(10, 20, 32, 16));
    }

    #[test]
    fn test_vec2_length_and_scale() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.scale_by(0.5), Vec2::new(1.5, 2.0));
        assert!(Vec2::ZERO.is_zero());
        assert!(!v.is_zero());
    }

    #[test]
    fn test_vec2_add_assign() {
        let mut v = Vec2::new(1.0, 1.0);
        v += Vec2::new(2.0, -1.0);
        assert_eq!(v, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_vec2_sub() {
        let v = Vec2::new(5.0, 2.0) - Vec2::new(1.0, 4.0);
        assert_eq!(v, Vec2::new(4.0, -2.0));
    }
}
