//! Terminal entrypoint: raw-mode lifecycle, input polling, frame pacing.

use std::io::{self, stdout};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, terminal,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use flappy_pixel::config::Config;
use flappy_pixel::game::Game;
use flappy_pixel::pixel::PixelBuf;
use flappy_pixel::sprite::SpriteSet;

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(
        out,
        terminal::EnterAlternateScreen,
        terminal::SetTitle("Flappy Bird"),
        cursor::Hide,
        terminal::DisableLineWrap,
    )?;

    let result = run(&mut out);

    // Always restore the terminal, even when run() failed.
    let _ = execute!(
        out,
        terminal::LeaveAlternateScreen,
        cursor::Show,
        terminal::EnableLineWrap,
    );
    let _ = terminal::disable_raw_mode();
    result
}

fn run(out: &mut io::Stdout) -> Result<()> {
    let cfg = Config::default();
    let sprites = SpriteSet::build(&cfg);
    let mut game = Game::new(&cfg, SmallRng::from_entropy());
    let mut buf = PixelBuf::new(cfg.width as usize, cfg.height as usize);

    let frame_dur = cfg.frame_duration();
    let (mut cols, mut rows) = terminal::size()?;

    loop {
        let frame_start = Instant::now();

        // Drain pending input without blocking.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Char(' ') | KeyCode::Up => game.flap(&cfg),
                    _ => {}
                },
                Event::Resize(c, r) => {
                    cols = c;
                    rows = r;
                }
                _ => {}
            }
        }

        game.update(&cfg);

        game.draw(&mut buf, &sprites);
        buf.present(out, cols, rows)?;

        // Frame pacing: block out the rest of the frame budget.
        let elapsed = frame_start.elapsed();
        if elapsed < frame_dur {
            thread::sleep(frame_dur - elapsed);
        }
    }
}
