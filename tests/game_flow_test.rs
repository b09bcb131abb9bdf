//! Drives whole frames against the library crate: pipe spawn cadence,
//! scoring, and off-screen despawn at the stock configuration.

use flappy_pixel::config::Config;
use flappy_pixel::game::Game;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[test]
fn spawn_score_and_despawn_cycle() {
    let cfg = Config::default();
    let mut game = Game::new(&cfg, SmallRng::seed_from_u64(7));
    assert_eq!(game.pipes().len(), 1);
    assert_eq!(game.score(), 0);

    // 400 -> 199 at 1.5 px/frame takes exactly 134 frames.
    for _ in 0..133 {
        game.update(&cfg);
    }
    assert_eq!(game.score(), 0);
    assert_eq!(game.pipes().len(), 1);

    game.update(&cfg);
    assert_eq!(game.score(), 1);
    assert_eq!(game.pipes().len(), 2);
    assert_eq!(game.pipes()[0].top.x, 199.0);
    assert_eq!(game.pipes()[1].top.x, 400.0);

    // The replacement pair crosses the midpoint 134 frames later.
    for _ in 134..268 {
        game.update(&cfg);
    }
    assert_eq!(game.score(), 2);
    assert_eq!(game.pipes().len(), 3);

    // The first pair lingers until its x falls strictly below -65:
    // frame 310 leaves it exactly on the cutoff, frame 311 removes it.
    for _ in 268..310 {
        game.update(&cfg);
    }
    assert_eq!(game.pipes().len(), 3);
    assert_eq!(game.pipes()[0].top.x, -65.0);

    game.update(&cfg);
    assert_eq!(game.pipes().len(), 2);
    assert_eq!(game.score(), 2);
}

#[test]
fn both_segments_of_a_pair_scroll_in_lockstep() {
    let cfg = Config::default();
    let mut game = Game::new(&cfg, SmallRng::seed_from_u64(3));

    for _ in 0..50 {
        game.update(&cfg);
    }
    let pair = &game.pipes()[0];
    assert_eq!(pair.top.x, 325.0);
    assert_eq!(pair.bottom.x, 325.0);
    assert_eq!(pair.bottom.y - pair.top.y, 550.0);
}

#[test]
fn bird_falls_freely_while_nobody_flaps() {
    let cfg = Config::default();
    let mut game = Game::new(&cfg, SmallRng::seed_from_u64(11));
    let y0 = game.bird().y;

    for _ in 0..40 {
        game.update(&cfg);
    }
    assert_eq!(game.bird().vel, 20.0);
    assert_eq!(game.bird().y, y0 + 0.25 * 40.0 * 39.0);
    // The bird never moves sideways.
    assert_eq!(game.bird().x, 179.0);
}

#[test]
fn flap_resets_the_fall_mid_flight() {
    let cfg = Config::default();
    let mut game = Game::new(&cfg, SmallRng::seed_from_u64(11));

    for _ in 0..30 {
        game.update(&cfg);
    }
    assert_eq!(game.bird().vel, 15.0);

    game.flap(&cfg);
    assert_eq!(game.bird().vel, -8.0);

    game.update(&cfg);
    assert_eq!(game.bird().vel, -7.5);
}
