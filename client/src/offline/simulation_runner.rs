use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, Opponent, simulate_games};
use common::log;

pub fn run_simulation(
    difficulty: Difficulty,
    opponent: Opponent,
    games: u32,
    mut rng: SessionRng,
) -> Result<(), String> {
    log!(
        "Simulating {} games at difficulty {} against {:?} opponent (seed {})",
        games,
        difficulty,
        opponent,
        rng.seed()
    );

    let stats = simulate_games(difficulty, opponent, games, &mut rng).map_err(|e| e.to_string())?;

    println!("Games:          {}", stats.games);
    println!("Computer wins:  {}", stats.bot_wins);
    println!("Opponent wins:  {}", stats.opponent_wins);
    println!("Draws:          {}", stats.draws);
    println!("Non-loss rate:  {:.1}%", stats.non_loss_rate() * 100.0);
    Ok(())
}
