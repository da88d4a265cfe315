use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

use std::io::{stdout, IsTerminal};

use connect4_heuristic::{
    computer::ComputerPlayer,
    game::{Game, Options},
    player::HumanPlayer,
};

fn main() -> Result<()> {
    // logs go to stderr so they never mix with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = Options {
        color: stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        ..Options::default()
    };

    let human = HumanPlayer::stdio(options.human);
    let computer = ComputerPlayer::new(options.computer, options.human, StdRng::from_entropy());
    let mut game = Game::new(Box::new(human), Box::new(computer))?;

    game.run(&mut stdout(), &options)?;
    Ok(())
}
