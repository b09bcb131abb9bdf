//! Game objects and the per-frame update sequence.
//!
//! The `Game` struct exclusively owns one bird, one ground strip, one
//! backdrop, one score, and the list of active pipe pairs. A frame advances
//! in a fixed order: pipes move, the collision pass runs, the pipe lifecycle
//! runs (scoring and spawning), then bird physics.

use rand::Rng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::pixel::{PixelBuf, Rect};
use crate::score::Score;
use crate::sprite::SpriteSet;

/// Common surface of everything placed on the playfield: it can paint
/// itself and report the rectangle it occupies. Decorative objects report
/// no rectangle.
pub trait GameObject {
    fn draw(&self, buf: &mut PixelBuf, sprites: &SpriteSet);
    fn bounding_rect(&self) -> Option<Rect>;
}

// ── Backdrop and ground ─────────────────────────────────────────────────────

pub struct Background {
    x: i32,
    y: i32,
}

impl Background {
    fn new() -> Self {
        Self { x: 0, y: 0 }
    }
}

impl GameObject for Background {
    fn draw(&self, buf: &mut PixelBuf, sprites: &SpriteSet) {
        sprites.background.blit(buf, self.x, self.y);
    }

    fn bounding_rect(&self) -> Option<Rect> {
        None
    }
}

pub struct Ground {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl Ground {
    fn new(cfg: &Config) -> Self {
        Self {
            x: 0,
            y: cfg.height - cfg.ground_height,
            w: cfg.width,
            h: cfg.ground_height,
        }
    }

    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

impl GameObject for Ground {
    fn draw(&self, buf: &mut PixelBuf, sprites: &SpriteSet) {
        sprites.ground.blit(buf, self.x, self.y);
    }

    fn bounding_rect(&self) -> Option<Rect> {
        Some(self.rect())
    }
}

// ── Bird ────────────────────────────────────────────────────────────────────

pub struct Bird {
    pub x: f64,
    pub y: f64,
    pub vel: f64,
    w: i32,
    h: i32,
}

impl Bird {
    fn new(cfg: &Config) -> Self {
        Self {
            x: (cfg.width / 2 - cfg.bird_width / 2) as f64,
            y: (cfg.height / 2) as f64,
            vel: 0.0,
            w: cfg.bird_width,
            h: cfg.bird_height,
        }
    }

    /// Upward impulse. Ignored once the bird has risen past the top edge;
    /// it has to fall back into view before it can flap again.
    pub fn flap(&mut self, cfg: &Config) {
        if self.y > 0.0 {
            self.vel = cfg.flap_velocity;
        }
    }

    /// Position first, then velocity, so the first falling frame moves the
    /// bird by zero.
    pub fn update(&mut self, cfg: &Config) {
        self.y += self.vel;
        self.vel += cfg.gravity;
    }

    fn rect(&self) -> Rect {
        Rect::new(self.x as i32, self.y as i32, self.w, self.h)
    }
}

impl GameObject for Bird {
    fn draw(&self, buf: &mut PixelBuf, sprites: &SpriteSet) {
        sprites.bird.blit(buf, self.x as i32, self.y as i32);
    }

    fn bounding_rect(&self) -> Option<Rect> {
        Some(self.rect())
    }
}

// ── Pipes ───────────────────────────────────────────────────────────────────

pub struct PipeSegment {
    pub x: f64,
    pub y: f64,
    pub inverted: bool,
    w: i32,
    h: i32,
}

impl PipeSegment {
    fn new(x: f64, y: f64, inverted: bool, cfg: &Config) -> Self {
        Self {
            x,
            y,
            inverted,
            w: cfg.pipe_width,
            h: cfg.pipe_height,
        }
    }

    fn advance(&mut self, cfg: &Config) {
        self.x -= cfg.scroll_speed;
    }

    fn rect(&self) -> Rect {
        Rect::new(self.x as i32, self.y as i32, self.w, self.h)
    }
}

impl GameObject for PipeSegment {
    fn draw(&self, buf: &mut PixelBuf, sprites: &SpriteSet) {
        if self.inverted {
            sprites.pipe.blit_rotated(buf, self.x as i32, self.y as i32);
        } else {
            sprites.pipe.blit(buf, self.x as i32, self.y as i32);
        }
    }

    fn bounding_rect(&self) -> Option<Rect> {
        Some(self.rect())
    }
}

/// A top (inverted) and bottom segment created together around a shared
/// randomized gap. `scored` latches the midpoint crossing so it fires
/// exactly once per pair.
pub struct PipePair {
    pub top: PipeSegment,
    pub bottom: PipeSegment,
    scored: bool,
}

impl PipePair {
    /// New pair at the right edge. The top offset is drawn uniformly from
    /// the configured range; the bottom sits a fixed gap below it, so the
    /// opening height never varies.
    fn spawn(cfg: &Config, rng: &mut SmallRng) -> Self {
        let top_y = rng.gen_range(cfg.gap_offset_min..=cfg.gap_offset_max) as f64;
        let bottom_y = top_y + (cfg.pipe_gap + cfg.pipe_height) as f64;
        let x = cfg.width as f64;
        Self {
            top: PipeSegment::new(x, top_y, true, cfg),
            bottom: PipeSegment::new(x, bottom_y, false, cfg),
            scored: false,
        }
    }
}

// ── Game ────────────────────────────────────────────────────────────────────

pub struct Game {
    background: Background,
    ground: Ground,
    bird: Bird,
    pipes: Vec<PipePair>,
    score: Score,
    rng: SmallRng,
    colliding: bool,
}

impl Game {
    pub fn new(cfg: &Config, mut rng: SmallRng) -> Self {
        let pipes = vec![PipePair::spawn(cfg, &mut rng)];
        Self {
            background: Background::new(),
            ground: Ground::new(cfg),
            bird: Bird::new(cfg),
            pipes,
            score: Score::new(cfg),
            rng,
            colliding: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.score.value()
    }

    pub fn pipes(&self) -> &[PipePair] {
        &self.pipes
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    /// Whether the bird overlapped a pipe or the ground on the last frame.
    /// Recorded only; nothing in the loop reacts to it yet.
    pub fn colliding(&self) -> bool {
        self.colliding
    }

    pub fn flap(&mut self, cfg: &Config) {
        self.bird.flap(cfg);
    }

    /// Advance one frame: move pipes, run the collision pass, run the pipe
    /// lifecycle, then bird physics.
    pub fn update(&mut self, cfg: &Config) {
        for pair in &mut self.pipes {
            pair.top.advance(cfg);
            pair.bottom.advance(cfg);
        }
        self.colliding = self.check_hits();
        self.handle_pipes(cfg);
        self.bird.update(cfg);
    }

    /// Bird rectangle against both segments of every pair and the ground.
    fn check_hits(&self) -> bool {
        let bird = self.bird.rect();
        let mut hit = false;
        for pair in &self.pipes {
            if bird.intersects(&pair.top.rect()) || bird.intersects(&pair.bottom.rect()) {
                hit = true;
            }
        }
        if bird.intersects(&self.ground.rect()) {
            hit = true;
        }
        hit
    }

    /// Scan every pair once, then apply spawns and removals afterwards so
    /// the list is never reshaped mid-iteration. A pair whose top segment
    /// crosses the midpoint scores and triggers one replacement; pairs
    /// fully off the left edge are dropped.
    fn handle_pipes(&mut self, cfg: &Config) {
        let threshold = cfg.spawn_threshold();
        let mut spawns = 0;
        for pair in &mut self.pipes {
            if !pair.scored && pair.top.x <= threshold {
                pair.scored = true;
                spawns += 1;
            }
        }
        for _ in 0..spawns {
            self.score.increment();
            self.pipes.push(PipePair::spawn(cfg, &mut self.rng));
        }

        let cutoff = cfg.despawn_x();
        self.pipes.retain(|pair| pair.top.x >= cutoff);
    }

    /// Paint the frame back to front: backdrop, bird, pipes, ground, score.
    pub fn draw(&self, buf: &mut PixelBuf, sprites: &SpriteSet) {
        let mut objects: Vec<&dyn GameObject> = vec![&self.background, &self.bird];
        for pair in &self.pipes {
            objects.push(&pair.top);
            objects.push(&pair.bottom);
        }
        objects.push(&self.ground);

        for obj in objects {
            obj.draw(buf, sprites);
        }
        self.score.draw(buf);
    }
}
