//! Plays one game of War and prints the result.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use warrs::{Game, GameOptions, GameResult, Outcome, RoundResult, Seat, Suit};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let suits: Vec<String> = Suit::ALL.iter().map(ToString::to_string).collect();
    println!("Card suits: {}", suits.join(", "));

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    let mut game = Game::new(GameOptions::default(), seed);

    if let Err(err) = game.setup() {
        error!(%err, "setup failed");
        return ExitCode::FAILURE;
    }

    while game.result().is_none() {
        match game.play_round() {
            Ok(round) => println!("{}", format_round(&game, &round)),
            Err(err) => {
                error!(%err, "round failed");
                return ExitCode::FAILURE;
            }
        }
    }

    if let Some(result) = game.result() {
        print_final(&game, &result);
    }

    ExitCode::SUCCESS
}

fn name(game: &Game, seat: Seat) -> &str {
    game.player(seat).name()
}

fn format_round(game: &Game, round: &RoundResult) -> String {
    let outcome = match round.outcome {
        Outcome::Winner(seat) => format!("{} wins the round", name(game, seat)),
        Outcome::Tie => "Tie, no points".to_string(),
    };

    format!(
        "Round {}: {} plays {} | {} plays {} -> {} | Score {} {} - {} {}",
        round.round,
        name(game, Seat::One),
        round.card(Seat::One),
        name(game, Seat::Two),
        round.card(Seat::Two),
        outcome,
        name(game, Seat::One),
        round.score(Seat::One),
        name(game, Seat::Two),
        round.score(Seat::Two),
    )
}

fn print_final(game: &Game, result: &GameResult) {
    println!("\nFinal score after {} rounds:", result.rounds);
    for seat in Seat::BOTH {
        println!("  {}: {}", name(game, seat), result.score(seat));
    }
    println!("  Ties: {}", result.ties);

    match result.outcome {
        Outcome::Winner(seat) => println!("{} wins the game!", name(game, seat)),
        Outcome::Tie => println!("The game is a tie!"),
    }
}
