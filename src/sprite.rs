//! Sprites and the procedural builders that pre-render them.
//!
//! Every image the game shows is rasterized once at startup: the backdrop,
//! the ground strip, the bird, the pipe, and the ten score digits. Sprites
//! carry per-pixel transparency so blitting composites over whatever is
//! already on the canvas.

use crate::config::Config;
use crate::pixel::{PixelBuf, Rgb};

// ── Palette ─────────────────────────────────────────────────────────────────

const SKY_TOP: Rgb = Rgb(70, 180, 200);
const SKY_BOT: Rgb = Rgb(190, 232, 245);
const HILL_FAR: Rgb = Rgb(120, 195, 75);
const HILL_NEAR: Rgb = Rgb(95, 175, 55);
const GRASS: Rgb = Rgb(84, 168, 55);
const GRASS_LIGHT: Rgb = Rgb(110, 200, 70);
const DIRT: Rgb = Rgb(210, 185, 110);
const DIRT_DARK: Rgb = Rgb(185, 160, 90);
const PIPE_L: Rgb = Rgb(74, 122, 26);
const PIPE_M: Rgb = Rgb(100, 170, 40);
const PIPE_R: Rgb = Rgb(115, 191, 46);
const PIPE_HI: Rgb = Rgb(145, 215, 62);
const CAP_DARK: Rgb = Rgb(60, 100, 20);
const BIRD_BODY: Rgb = Rgb(245, 200, 66);
const BIRD_HI: Rgb = Rgb(255, 225, 100);
const BIRD_WING: Rgb = Rgb(215, 165, 35);
const BIRD_EYE: Rgb = Rgb(255, 255, 255);
const BIRD_PUPIL: Rgb = Rgb(20, 20, 20);
const BIRD_BEAK: Rgb = Rgb(225, 75, 35);
const BIRD_BEAK_HI: Rgb = Rgb(240, 110, 50);
const DIGIT_INK: Rgb = Rgb(255, 255, 255);

// ── Sprite ──────────────────────────────────────────────────────────────────

/// Fixed-size raster with per-pixel transparency.
#[derive(Clone)]
pub struct Sprite {
    w: i32,
    h: i32,
    px: Vec<Option<Rgb>>,
}

impl Sprite {
    pub fn new(w: i32, h: i32) -> Self {
        Self {
            w,
            h,
            px: vec![None; (w * h) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.w
    }

    pub fn height(&self) -> i32 {
        self.h
    }

    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && x < self.w && y < self.h {
            self.px[(y * self.w + x) as usize] = Some(c);
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        if x >= 0 && y >= 0 && x < self.w && y < self.h {
            self.px[(y * self.w + x) as usize]
        } else {
            None
        }
    }

    pub fn fill(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    /// Copy onto the canvas at `(x, y)`, skipping transparent pixels.
    pub fn blit(&self, buf: &mut PixelBuf, x: i32, y: i32) {
        for sy in 0..self.h {
            for sx in 0..self.w {
                if let Some(c) = self.px[(sy * self.w + sx) as usize] {
                    buf.set(x + sx, y + sy, c);
                }
            }
        }
    }

    /// Copy onto the canvas rotated 180 degrees (both axes flipped).
    pub fn blit_rotated(&self, buf: &mut PixelBuf, x: i32, y: i32) {
        for sy in 0..self.h {
            for sx in 0..self.w {
                if let Some(c) = self.px[((self.h - 1 - sy) * self.w + (self.w - 1 - sx)) as usize]
                {
                    buf.set(x + sx, y + sy, c);
                }
            }
        }
    }

    /// Copy another sprite into this one at `(x, y)`, skipping transparency.
    pub fn stamp(&mut self, src: &Sprite, x: i32, y: i32) {
        for sy in 0..src.h {
            for sx in 0..src.w {
                if let Some(c) = src.px[(sy * src.w + sx) as usize] {
                    self.set(x + sx, y + sy, c);
                }
            }
        }
    }
}

/// The playfield images, built once at startup.
pub struct SpriteSet {
    pub background: Sprite,
    pub ground: Sprite,
    pub bird: Sprite,
    pub pipe: Sprite,
}

impl SpriteSet {
    pub fn build(cfg: &Config) -> Self {
        Self {
            background: background(cfg),
            ground: ground(cfg),
            bird: bird(cfg),
            pipe: pipe(cfg),
        }
    }
}

// ── Builders ────────────────────────────────────────────────────────────────

/// Gradient sky with two hill bands above the ground line.
fn background(cfg: &Config) -> Sprite {
    let w = cfg.width;
    let h = cfg.height;
    let horizon = h - cfg.ground_height;
    let mut s = Sprite::new(w, h);

    for y in 0..h {
        let t = (y.min(horizon) as u32 * 256 / horizon.max(1) as u32) as u16;
        let c = Rgb::lerp(SKY_TOP, SKY_BOT, t);
        for x in 0..w {
            s.set(x, y, c);
        }
    }

    // Far hills, then near hills over them.
    for x in 0..w {
        let fx = x as f64 * 0.04;
        let rise = (fx.sin() * 30.0 + (fx * 1.7).sin() * 15.0).abs() + 20.0;
        for y in (horizon - rise as i32)..horizon {
            s.set(x, y, HILL_FAR);
        }
    }
    for x in 0..w {
        let fx = x as f64 * 0.06 + 1.3;
        let rise = (fx.sin() * 18.0 + (fx * 2.3).sin() * 9.0).abs() + 8.0;
        for y in (horizon - rise as i32)..horizon {
            s.set(x, y, HILL_NEAR);
        }
    }
    s
}

/// Grass lip over striped dirt.
fn ground(cfg: &Config) -> Sprite {
    let w = cfg.width;
    let h = cfg.ground_height;
    let mut s = Sprite::new(w, h);

    for x in 0..w {
        for y in 0..4 {
            let alt = (x / 6) % 2 == 0;
            s.set(x, y, if alt { GRASS } else { GRASS_LIGHT });
        }
        for y in 4..8 {
            s.set(x, y, GRASS);
        }
    }
    for y in 8..h {
        for x in 0..w {
            let stripe = (x + (y - 8) * 2) % 24 < 12;
            s.set(x, y, if stripe { DIRT } else { DIRT_DARK });
        }
    }
    s
}

/// Mid-flap bird facing right: tail, body, wing, eye, beak.
fn bird(cfg: &Config) -> Sprite {
    let mut s = Sprite::new(cfg.bird_width, cfg.bird_height);

    // Tail feathers
    s.fill(0, 12, 7, 6, BIRD_WING);

    // Body with clipped corners
    s.fill(6, 6, 30, 19, BIRD_BODY);
    s.fill(9, 4, 24, 2, BIRD_BODY);
    s.fill(9, 25, 24, 2, BIRD_BODY);
    s.fill(10, 4, 20, 3, BIRD_HI);

    // Wing
    s.fill(8, 13, 12, 8, BIRD_WING);
    s.fill(10, 15, 8, 4, BIRD_BODY);

    // Eye
    s.fill(26, 6, 7, 8, BIRD_EYE);
    s.fill(30, 9, 3, 3, BIRD_PUPIL);

    // Beak reaches the sprite's right edge
    s.fill(33, 14, 9, 4, BIRD_BEAK_HI);
    s.fill(33, 18, 9, 3, BIRD_BEAK);

    s
}

fn pipe_shade(x: i32, total_w: i32) -> Rgb {
    if total_w <= 1 {
        return PIPE_M;
    }
    let t = (x as f64 / (total_w - 1) as f64 * 256.0) as u16;
    if t < 64 {
        Rgb::lerp(PIPE_L, PIPE_M, (t * 4).min(256))
    } else if t < 100 {
        Rgb::lerp(PIPE_M, PIPE_HI, ((t - 64) * 7).min(256))
    } else if t < 160 {
        Rgb::lerp(PIPE_HI, PIPE_R, ((t - 100) * 4).min(256))
    } else {
        Rgb::lerp(PIPE_R, PIPE_L, ((t - 160) * 3).min(256))
    }
}

/// Upright pipe with the cap on the gap-facing end. The top segment of a
/// pair renders this rotated 180 degrees, so the cap faces the gap there
/// too.
fn pipe(cfg: &Config) -> Sprite {
    let w = cfg.pipe_width;
    let h = cfg.pipe_height;
    let cap_h = 30;
    let inset = 3;
    let mut s = Sprite::new(w, h);

    // Cap spans the full width
    for x in 0..w {
        let c = pipe_shade(x, w);
        for y in 0..cap_h {
            s.set(x, y, c);
        }
        s.set(x, 0, CAP_DARK);
        s.set(x, 1, CAP_DARK);
        s.set(x, cap_h - 2, CAP_DARK);
        s.set(x, cap_h - 1, CAP_DARK);
    }
    // Barrel is inset, leaving transparent margins beside it
    for x in 0..(w - 2 * inset) {
        let c = pipe_shade(x, w - 2 * inset);
        for y in cap_h..h {
            s.set(inset + x, y, c);
        }
    }
    s
}

// ── Digit glyphs ────────────────────────────────────────────────────────────

#[rustfmt::skip]
const DIGITS: [[u8; 15]; 10] = [
    [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // 0
    [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1], // 1
    [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1], // 2
    [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1], // 3
    [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1], // 4
    [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1], // 5
    [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1], // 6
    [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0], // 7
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1], // 8
    [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1], // 9
];

/// Pre-render the ten digits at the configured glyph size by scaling the
/// 3x5 bitmap font with nearest-neighbor sampling.
pub fn digit_glyphs(cfg: &Config) -> Vec<Sprite> {
    let gw = cfg.digit_width;
    let gh = cfg.digit_height;
    (0..10)
        .map(|d| {
            let bitmap = &DIGITS[d];
            let mut s = Sprite::new(gw, gh);
            for y in 0..gh {
                for x in 0..gw {
                    let col = (x * 3 / gw) as usize;
                    let row = (y * 5 / gh) as usize;
                    if bitmap[row * 3 + col] == 1 {
                        s.set(x, y, DIGIT_INK);
                    }
                }
            }
            s
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_match_configured_size() {
        let cfg = Config::default();
        let glyphs = digit_glyphs(&cfg);
        assert_eq!(glyphs.len(), 10);
        for g in &glyphs {
            assert_eq!(g.width(), 24);
            assert_eq!(g.height(), 36);
        }
    }

    #[test]
    fn glyphs_are_distinct() {
        let cfg = Config::default();
        let glyphs = digit_glyphs(&cfg);
        let ink = |g: &Sprite| {
            let mut cells = Vec::new();
            for y in 0..g.height() {
                for x in 0..g.width() {
                    cells.push(g.get(x, y).is_some());
                }
            }
            cells
        };
        let zero = ink(&glyphs[0]);
        let one = ink(&glyphs[1]);
        assert_ne!(zero, one);
    }

    #[test]
    fn rotated_blit_flips_both_axes() {
        let mut s = Sprite::new(3, 2);
        s.set(0, 0, Rgb(9, 9, 9));

        let mut buf = PixelBuf::new(3, 2);
        s.blit_rotated(&mut buf, 0, 0);
        // The marked corner lands in the opposite corner.
        assert_eq!(buf.get(2, 1), Rgb(9, 9, 9));
        assert_eq!(buf.get(0, 0), Rgb(0, 0, 0));
    }

    #[test]
    fn blit_skips_transparent_pixels() {
        let mut under = PixelBuf::new(2, 1);
        under.set(0, 0, Rgb(1, 1, 1));
        under.set(1, 0, Rgb(2, 2, 2));

        let mut s = Sprite::new(2, 1);
        s.set(1, 0, Rgb(8, 8, 8));
        s.blit(&mut under, 0, 0);

        assert_eq!(under.get(0, 0), Rgb(1, 1, 1));
        assert_eq!(under.get(1, 0), Rgb(8, 8, 8));
    }

    #[test]
    fn blit_clips_at_canvas_edges() {
        let mut buf = PixelBuf::new(4, 4);
        let mut s = Sprite::new(3, 3);
        s.fill(0, 0, 3, 3, Rgb(5, 5, 5));
        s.blit(&mut buf, 2, 2);
        assert_eq!(buf.get(3, 3), Rgb(5, 5, 5));
        assert_eq!(buf.get(1, 1), Rgb(0, 0, 0));
    }

    #[test]
    fn pipe_barrel_leaves_side_margins() {
        let cfg = Config::default();
        let p = pipe(&cfg);
        // Below the cap the outermost columns are transparent.
        assert!(p.get(0, 100).is_none());
        assert!(p.get(cfg.pipe_width - 1, 100).is_none());
        assert!(p.get(cfg.pipe_width / 2, 100).is_some());
        // The cap spans the full width.
        assert!(p.get(0, 10).is_some());
        assert!(p.get(cfg.pipe_width - 1, 10).is_some());
    }
}
