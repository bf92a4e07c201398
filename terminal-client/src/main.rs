mod config;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use common::games::snake::{
    ControlEvent, GamePhase, SessionStatus, SnakeGameModel, SnakeSession, TextView,
};
use common::log;
use common::logger::{self, LogTarget};

use config::get_config_manager;

#[derive(Parser)]
#[command(name = "snake_duel", about = "Two-player snake on one keyboard, one line per tick")]
struct Args {
    /// Config file (defaults to snake_duel_config.yaml next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixes where eaten apples reappear
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Writes the current config (defaults if missing) to the config file and exits
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "SnakeDuel".to_string());
    logger::init_logger(prefix, LogTarget::Stderr);

    let config_manager = get_config_manager(args.config);
    let config = config_manager.get_config()?;
    if args.write_config {
        config_manager.set_config(&config)?;
        log!("Config written");
        return Ok(());
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting {}x{} duel, apple seed {}",
        config.game.field_width,
        config.game.field_height,
        rng.seed()
    );

    let model = SnakeGameModel::new(config.game.clone(), rng)?;
    let mut session = SnakeSession::new(model, TextView::new(std::io::stdout()));
    let keys = config.keys;

    println!("Keys: {}", keys.describe());
    println!("Each line is one tick. Type start (or a space) to begin.");
    session.draw()?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;

        let events = keys.events_for_line(&line);
        for &event in &events {
            if session.handle_event(event)? == SessionStatus::Quit {
                return Ok(());
            }
        }
        // A start line only shows the opening frame.
        if events.contains(&ControlEvent::Start) {
            continue;
        }

        match session.tick()? {
            SessionStatus::RoundOver(winners) => {
                let model = session.model();
                println!(
                    "Round over: {}. Apples eaten {} - {}. Type start to play again.",
                    winners,
                    model.snake_one().apples_eaten(),
                    model.snake_two().apples_eaten()
                );
            }
            SessionStatus::Quit => return Ok(()),
            SessionStatus::Continue => {
                if session.model().phase() == GamePhase::NotStarted {
                    println!("Type start (or a space) to begin.");
                }
            }
        }
        std::io::stdout().flush()?;
    }

    Ok(())
}
