use bevy_ecs::prelude::Component;

use crate::components::sprite::Sprite;
use crate::geometry::{Rect, Vec2};

/// World-space position of an entity's top-left corner, in pixels.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.pos.x += dx;
        self.pos.y += dy;
    }

    /// Tile the position falls in, for a square grid of `tile_size` pixels.
    pub fn tile_coords(&self, tile_size: u32) -> (i32, i32) {
        let t = tile_size.max(1) as f32;
        ((self.pos.x / t).floor() as i32, (self.pos.y / t).floor() as i32)
    }

    /// Screen rectangle the sprite covers at this position.
    pub fn dest_rect(&self, sprite: &Sprite) -> Rect {
        Rect::new(
            self.pos.x.round() as i32,
            self.pos.y.round() as i32,
            sprite.width,
            sprite.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let mut p = MapPosition::new(10.0, 10.0);
        p.translate(-4.0, 2.5);
        assert_eq!(p.pos, Vec2::new(6.0, 12.5));
    }

    #[test]
    fn test_tile_coords_floor() {
        assert_eq!(MapPosition::new(65.0, 31.9).tile_coords(32), (2, 0));
        assert_eq!(MapPosition::new(-1.0, 0.0).tile_coords(32), (-1, 0));
    }

    #[test]
    fn test_dest_rect_rounds_position() {
        let sprite = Sprite::new("t", Rect::new(0, 0, 32, 32));
        let p = MapPosition::new(10.6, 3.2);
        assert_eq!(p.dest_rect(&sprite), Rect::new(11, 3, 32, 32));
    }
}
