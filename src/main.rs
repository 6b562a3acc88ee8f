//! Plays one game of tic-tac-toe: X searches its moves with a simulated Grover
//! search, O plays uniformly at random.

use clap::Parser;
use qttt::grover::search_circuit;
use qttt::{Game, GameStatus, SearchConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "qttt", version, about = "Tic-tac-toe against a Grover-search player")]
struct Cli {
    /// Qubits in the search register (at least 4 to index nine cells)
    #[arg(long, default_value_t = qttt::core::DEFAULT_NUM_QUBITS)]
    qubits: usize,

    /// Samples drawn per move decision
    #[arg(long, default_value_t = qttt::core::DEFAULT_SHOTS)]
    shots: u64,

    /// Oracle + diffusion rounds per move decision
    #[arg(long, default_value_t = qttt::core::DEFAULT_ROUNDS)]
    rounds: usize,

    /// Seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Print X's search circuit before each of its moves
    #[arg(long)]
    show_circuit: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let mut config = SearchConfig::new()
        .with_num_qubits(cli.qubits)
        .with_shots(cli.shots)
        .with_rounds(cli.rounds);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut game = Game::new(config)?;
    println!("\nCurrent board:\n{}", game.board());

    while !game.status().is_terminal() {
        let player = game.current_player();
        println!("Player {}'s turn.", player);
        if cli.show_circuit && player == qttt::Player::X {
            let circuit = search_circuit(config.num_qubits, &game.board().valid_moves(), config.rounds)?;
            println!("{}", circuit);
        }
        game.step();
        println!("\nCurrent board:\n{}", game.board());
    }

    match game.status() {
        GameStatus::Aborted(reason) => {
            println!("{}", reason);
            println!("Game over!");
        }
        status => println!("{}", status),
    }
    Ok(())
}
