use bevy_ecs::prelude::Component;

use crate::geometry::Rect;

/// Sprite is identified by a texture key, the crop region (`frame`) currently
/// shown from that sprite sheet and its on-screen size.
///
/// Entities with an [`AnimationController`](super::animation::AnimationController)
/// get `frame` and `flip_h` rewritten every tick by the
/// [`animation`](crate::systems::animation::animation) system; static sprites
/// keep whatever they were spawned with.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub tex_key: String,
    pub frame: Rect,
    pub width: i32,
    pub height: i32,
    pub flip_h: bool,
}

impl Sprite {
    /// Sprite drawn at the same size as its source frame.
    pub fn new(tex_key: impl Into<String>, frame: Rect) -> Self {
        Self {
            tex_key: tex_key.into(),
            frame,
            width: frame.w,
            height: frame.h,
            flip_h: false,
        }
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_new_uses_frame_size() {
        let s = Sprite::new("characters", Rect::new(0, 141, 32, 32));
        assert_eq!((s.width, s.height), (32, 32));
        assert!(!s.flip_h);
        let s = s.with_size(64, 48);
        assert_eq!((s.width, s.height), (64, 48));
        assert_eq!(s.frame.w, 32);
    }
}
