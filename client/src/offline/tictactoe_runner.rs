use std::io::Write;
use std::time::Duration;

use common::games::tictactoe::{GameStatus, TicTacToeSession};
use common::log;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::{GameCommand, HELP_TEXT, parse_command};
use crate::render::{render_board, render_history};

pub struct RunnerSettings {
    pub bot_delay: Duration,
}

enum Flow {
    Continue,
    Quit,
}

/// Drives one interactive session until the player quits or stdin closes.
pub async fn run_tictactoe_game(
    session: &mut TicTacToeSession,
    settings: &RunnerSettings,
) -> Result<(), String> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{} | difficulty {}", session.mode(), session.difficulty());
    println!("Type 'help' for commands.");
    print_position(session);

    loop {
        if session.is_bot_turn() {
            if !bot_pause(settings.bot_delay, tokio::signal::ctrl_c()).await {
                log!("Interrupted, leaving game");
                break;
            }
            let index = session.make_bot_move()?;
            println!("\nComputer plays cell {}", index + 1);
            print_position(session);
            continue;
        }

        prompt(session)?;

        let line = tokio::select! {
            line = lines.next_line() => {
                line.map_err(|e| format!("Failed to read input: {}", e))?
            }
            _ = tokio::signal::ctrl_c() => {
                log!("Interrupted, leaving game");
                None
            }
        };

        let Some(line) = line else {
            println!();
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(command) => {
                if let Flow::Quit = apply_command(session, command) {
                    break;
                }
            }
            Err(message) => println!("{}", message),
        }
    }

    Ok(())
}

/// Waits out the bot delay; `false` when `interrupt` fires first.
async fn bot_pause<F: Future>(delay: Duration, interrupt: F) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(delay) => true,
        _ = interrupt => false,
    }
}

fn apply_command(session: &mut TicTacToeSession, command: GameCommand) -> Flow {
    match command {
        GameCommand::Place(index) => match session.make_human_move(index) {
            Ok(()) => print_position(session),
            Err(message) => println!("{}", message),
        },
        GameCommand::History => println!("{}", render_history(session.state())),
        GameCommand::Jump(move_number) => match session.jump_to(move_number) {
            Ok(()) => print_position(session),
            Err(message) => println!("{}", message),
        },
        GameCommand::Restart => {
            session.restart();
            print_position(session);
        }
        GameCommand::Mode(mode) => {
            session.set_mode(mode);
            println!("Mode: {}", mode);
            print_position(session);
        }
        GameCommand::Difficulty(difficulty) => {
            session.set_difficulty(difficulty);
            println!("Difficulty: {}", difficulty);
        }
        GameCommand::Help => println!("{}", HELP_TEXT),
        GameCommand::Quit => return Flow::Quit,
    }
    Flow::Continue
}

fn print_position(session: &TicTacToeSession) {
    println!("\n{}\n", render_board(session.state()));
    println!("{}", session.state().status_text());
    if session.status() != GameStatus::InProgress {
        println!("Type 'restart' for a new game, 'jump <n>' to revisit a move or 'quit'.");
    }
}

fn prompt(session: &TicTacToeSession) -> Result<(), String> {
    let label = if session.status().is_over() {
        "game over".to_string()
    } else {
        format!("{} to move", session.state().current_mark())
    };
    print!("[{}] > ", label);
    std::io::stdout()
        .flush()
        .map_err(|e| format!("Failed to write prompt: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_interrupt_cuts_bot_pause_short() {
        let finished = tokio::time::timeout(
            Duration::from_secs(5),
            bot_pause(Duration::from_secs(3600), std::future::ready(())),
        )
        .await;
        assert_eq!(finished, Ok(false));
    }

    #[tokio::test]
    async fn test_bot_pause_completes_without_interrupt() {
        let completed = bot_pause(Duration::from_millis(1), std::future::pending::<()>()).await;
        assert!(completed);
    }
}
