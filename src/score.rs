//! Score counter and digit renderer.
//!
//! The composite strip is rebuilt only when the score changes; drawing a
//! frame just blits the cached strip at its anchor.

use crate::config::Config;
use crate::pixel::PixelBuf;
use crate::sprite::{self, Sprite};

pub struct Score {
    value: u32,
    glyphs: Vec<Sprite>,
    strip: Sprite,
    anchor: (i32, i32),
}

impl Score {
    pub fn new(cfg: &Config) -> Self {
        let glyphs = sprite::digit_glyphs(cfg);
        let strip = glyphs[0].clone();
        Self {
            value: 0,
            glyphs,
            strip,
            anchor: cfg.score_anchor,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn strip(&self) -> &Sprite {
        &self.strip
    }

    pub fn increment(&mut self) {
        self.value += 1;
        self.strip = self.composite();
    }

    /// One horizontal strip of the score's decimal digits,
    /// most-significant-first, on a transparent surface sized exactly
    /// (digit count x glyph width) by glyph height.
    fn composite(&self) -> Sprite {
        let digits: Vec<usize> = self
            .value
            .to_string()
            .bytes()
            .map(|b| (b - b'0') as usize)
            .collect();

        let gw = self.glyphs[0].width();
        let gh = self.glyphs[0].height();
        let mut strip = Sprite::new(digits.len() as i32 * gw, gh);
        let mut x_offset = 0;
        for d in digits {
            strip.stamp(&self.glyphs[d], x_offset, 0);
            x_offset += gw;
        }
        strip
    }

    pub fn draw(&self, buf: &mut PixelBuf) {
        self.strip.blit(buf, self.anchor.0, self.anchor.1);
    }
}
