//! Terminal 2048 runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a framebuffer-based renderer. The session
//! state machine (in progress / won / lost) lives here, layered on top of
//! the engine's pure observations.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::GameState;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::scores::Leaderboard;
use tui_2048::term::{GameView, TerminalRenderer, Viewport};
use tui_2048::types::{GameAction, GameStatus};

/// High-score file, one `name,score` record per line, in the working directory.
const SCORE_FILE: &str = "highscores.txt";

fn main() -> Result<()> {
    let player = prompt_player_name()?;
    let score_path = PathBuf::from(SCORE_FILE);
    let mut scores = Leaderboard::load(&score_path);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &player, &score_path, &mut scores);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Ok(final_score) = &result {
        println!("Final score: {}", final_score);
        if let Some(best) = scores.best() {
            println!("Best: {} ({})", best.score, best.name);
        }
    }
    result.map(|_| ())
}

fn run(
    term: &mut TerminalRenderer,
    player: &str,
    score_path: &Path,
    scores: &mut Leaderboard,
) -> Result<u32> {
    let mut game = GameState::new(entropy_seed());
    let mut status = GameStatus::InProgress;
    let view = GameView::default();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, status, scores, Viewport::new(w, h));
        term.draw(&fb)?;

        // Block for the next key; resize events just trigger a redraw.
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(game.score());
        }

        match handle_key_event(key) {
            Some(GameAction::Shift(direction)) => {
                if status.is_terminal() {
                    continue;
                }
                if game.shift(direction) {
                    // The engine never spawns on its own: spawn only after
                    // a changed move, then fold the observations into the
                    // session status.
                    game.spawn_tile();
                    status = game.status_after_move();
                    if status.is_terminal() {
                        record_score(scores, player, game.score(), score_path);
                    }
                }
            }
            Some(GameAction::Restart) => {
                // Derive the next seed from the RNG stream so a session
                // stays reproducible from its initial seed.
                game = GameState::new(game.rng_state());
                status = GameStatus::InProgress;
            }
            None => {
                // Unrecognized key: ignored, no move attempted.
            }
        }
    }
}

/// Persist a finished game's score. Save failures degrade silently; the
/// session still reports the final score on exit.
fn record_score(scores: &mut Leaderboard, player: &str, score: u32, path: &Path) {
    if scores.qualifies(score) {
        scores.submit(player, score);
        let _ = scores.save(path);
    }
}

/// Optional player name prompt, answered before the terminal enters raw mode.
fn prompt_player_name() -> Result<String> {
    print!("Player name (enter for \"player\"): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let name = line.trim();
    Ok(if name.is_empty() {
        "player".to_string()
    } else {
        name.to_string()
    })
}

/// Wall-clock seed for the default binary; the engine itself stays
/// deterministic given a seed.
fn entropy_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
