use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    generate_bomb_position, init_logging, CellState, GameConfig, GameController, GameSession,
    GameState,
};
use serde_json::json;

/// Play a full game with uniformly random shots on the player's side.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Computer thinking time in milliseconds")]
    delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = GameConfig::from_env();
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(ms) = cli.delay_ms {
        config.computer_delay_ms = ms;
    }
    let seed = config.seed_or_random();

    let controller = GameController::new(seed)?;
    let mut session = GameSession::new(controller, config.computer_delay());
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));

    session.randomize_player_fleet().await?;
    session.confirm_ready().await?;

    loop {
        let snapshot = session.snapshot().await;
        if snapshot.state == GameState::Finished {
            break;
        }
        let target = generate_bomb_position(&snapshot.computer_grid, &mut rng)?;
        session.player_attack(target.x as i32, target.y as i32).await?;
        // The reply may already have run; waiting is a no-op then.
        session.wait_for_computer().await;
    }

    let snapshot = session.snapshot().await;
    let result = json!({
        "seed": seed,
        "winner": snapshot.winner,
        "player_shots": snapshot.computer_grid.count(CellState::Resolved),
        "computer_shots": snapshot.player_grid.count(CellState::Resolved),
        "player_remaining": snapshot.player_remaining,
        "computer_remaining": snapshot.computer_remaining,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
