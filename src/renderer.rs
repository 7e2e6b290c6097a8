//! Drawing backend seam.
//!
//! The ECS side only produces a [`RenderQueue`]; anything that can put
//! sprites and text on a surface implements [`Renderer`] and receives the
//! queue through [`present_queue`] once per frame. [`LogRenderer`] is the
//! headless backend used by the binary: it logs every call and keeps counts.

use log::{debug, trace};

use crate::geometry::Rect;
use crate::resources::renderqueue::{DrawCommand, RenderQueue};

pub trait Renderer {
    fn clear(&mut self);
    /// Draw the `src` crop of texture `tex_key` into `dest`, mirrored
    /// horizontally when `flip_h` is set.
    fn draw_sprite(&mut self, tex_key: &str, src: Rect, dest: Rect, flip_h: bool);
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32);
    fn present(&mut self);
}

/// Replay and empty `queue` on `renderer`, framed by `clear` and `present`.
pub fn present_queue<R: Renderer + ?Sized>(queue: &mut RenderQueue, renderer: &mut R) {
    renderer.clear();
    for command in queue.drain() {
        match command {
            DrawCommand::Sprite {
                tex_key,
                src,
                dest,
                flip_h,
            } => renderer.draw_sprite(&tex_key, src, dest, flip_h),
            DrawCommand::Text { text, x, y, size } => renderer.draw_text(&text, x, y, size),
        }
    }
    renderer.present();
}

#[derive(Debug, Default)]
pub struct LogRenderer {
    pub frames: u64,
    pub sprites_drawn: u64,
    pub texts_drawn: u64,
    frame_sprites: u32,
    frame_texts: u32,
}

impl Renderer for LogRenderer {
    fn clear(&mut self) {
        self.frame_sprites = 0;
        self.frame_texts = 0;
    }

    fn draw_sprite(&mut self, tex_key: &str, src: Rect, dest: Rect, flip_h: bool) {
        trace!(
            "sprite '{}' src=({}, {}, {}, {}) dest=({}, {}) flip={}",
            tex_key, src.x, src.y, src.w, src.h, dest.x, dest.y, flip_h
        );
        self.frame_sprites += 1;
        self.sprites_drawn += 1;
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, _size: i32) {
        debug!("text @({}, {}): {}", x, y, text);
        self.frame_texts += 1;
        self.texts_drawn += 1;
    }

    fn present(&mut self) {
        self.frames += 1;
        trace!(
            "frame {} presented: {} sprites, {} texts",
            self.frames, self.frame_sprites, self.frame_texts
        );
    }
}
