use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use snake::bootstrap;
use snake::config::Config;
use snake::game::{self, GameLoop};
use snake::term::TermManager;

fn main() -> Result<()> {
    let config = Config::parse();

    // Nothing to attach to
    let Some(_guard) = bootstrap::attach(&config, &std::io::stdout())? else {
        return Ok(());
    };

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = GameLoop::new(rng)?;
    let mut term = TermManager::setup()?;

    // The terminal is restored when `term` drops, also on error
    game::run(&mut game, &mut term)
}
