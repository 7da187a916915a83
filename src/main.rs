//! Pixel Pong entry point
//!
//! Native demo loop: a terminal display stands in for the real screen, a
//! fixed 50 Hz loop stands in for the tick interrupt, and a small autopilot
//! feeds move commands the way the button interrupt would, so a full match
//! plays out unattended.

use std::io::Write;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use pixel_pong::consts::*;
use pixel_pong::sim::VDir;
use pixel_pong::{DrawTarget, Pong};

/// Pixels per terminal cell; the 120x88 field lands on a 31x23 grid.
const CELL: i32 = 4;
const COLS: usize = (X_MAX / CELL) as usize + 1;
const ROWS: usize = (Y_MAX / CELL) as usize + 1;

/// Character-grid display. Draw requests are downscaled onto retained
/// cells and the whole grid is repainted once per frame.
struct TerminalDisplay {
    cells: [[char; COLS]; ROWS],
}

impl TerminalDisplay {
    fn new() -> Self {
        Self {
            cells: [[' '; COLS]; ROWS],
        }
    }

    /// Repaint the grid in place with a framed border.
    fn present(&self) {
        let mut frame = String::new();
        frame.push_str("\x1b[H");
        frame.push('+');
        frame.push_str(&"-".repeat(COLS));
        frame.push_str("+\r\n");
        for row in &self.cells {
            frame.push('|');
            frame.extend(row.iter());
            frame.push_str("|\r\n");
        }
        frame.push('+');
        frame.push_str(&"-".repeat(COLS));
        frame.push('+');

        print!("{frame}");
        let _ = std::io::stdout().flush();
    }
}

impl DrawTarget for TerminalDisplay {
    fn draw(&mut self, text: &str, x: i32, y: i32, _level: u8) {
        // Trail cleanup can reach past the field edges; those cells don't exist
        if x < 0 || y < 0 || y > Y_MAX {
            return;
        }
        let row = (y / CELL) as usize;
        for (i, ch) in text.chars().enumerate() {
            let col = (x / CELL) as usize + i;
            if col < COLS {
                self.cells[row][col] = ch;
            }
        }
    }
}

/// Stand-in for the button interrupt: nudge the player paddle toward the
/// ball, at most one command per tick, with a deadband so it settles.
fn autopilot(pong: &mut Pong<TerminalDisplay>) {
    let ball_y = pong.state().ball.y as i32;
    let player_y = pong.state().player.y;
    if ball_y < player_y - PLAYER_STEP / 2 {
        pong.on_input(VDir::Up);
    } else if ball_y > player_y + PLAYER_STEP / 2 {
        pong.on_input(VDir::Down);
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("ignoring unparsable seed {raw:?}");
            fallback_seed()
        }),
        None => fallback_seed(),
    };
    let max_ticks: u64 = args.next().and_then(|raw| raw.parse().ok()).unwrap_or(60_000);

    let mut pong = Pong::new(seed, TerminalDisplay::new());
    print!("\x1b[2J");

    let tick_interval = Duration::from_millis(1000 / TICK_HZ as u64);
    let mut ticks = 0u64;
    while !pong.finished() && ticks < max_ticks {
        pong.on_tick();
        autopilot(&mut pong);
        pong.display_mut().present();
        ticks += 1;
        std::thread::sleep(tick_interval);
    }
    println!();

    let state = pong.state();
    log::info!(
        "final score {}-{} after {} ticks",
        state.match_state.player_score,
        state.match_state.opponent_score,
        state.time_ticks
    );
    if let Ok(snapshot) = serde_json::to_string(state) {
        log::debug!("final state: {snapshot}");
    }
}

fn fallback_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0x5EED)
}
