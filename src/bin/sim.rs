use broadside::{
    init_logging, play_match, Game, Player, RandomAgent, Side, TurnRule,
};
use clap::Parser;
use log::info;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;

/// Play automated matches between two random agents and print one JSON
/// summary per match.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1)]
    games: u32,
    #[arg(long, default_value_t = 400, help = "Abort a match after this many moves")]
    max_moves: usize,
    #[arg(long, help = "A hit grants the shooter another shot")]
    extra_turn_on_hit: bool,
    #[arg(long, default_value = "player1")]
    player1: String,
    #[arg(long, default_value = "player2")]
    player2: String,
    #[arg(long, help = "Log both final boards")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let base_seed = match cli.seed {
        Some(s) => {
            info!("using fixed seed {} (games are reproducible)", s);
            s
        }
        None => rand::rng().random(),
    };
    let turn_rule = if cli.extra_turn_on_hit {
        TurnRule::ExtraTurnOnHit
    } else {
        TurnRule::Alternate
    };

    for i in 0..cli.games {
        let seed = base_seed.wrapping_add(u64::from(i));
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::with_turn_rule(
            Player::new(cli.player1.as_str()),
            Player::new(cli.player2.as_str()),
            turn_rule,
        );
        let report = play_match(
            &mut game,
            &mut RandomAgent::new(),
            &mut RandomAgent::new(),
            &mut rng,
            cli.max_moves,
        )?;

        if cli.verbose {
            for side in Side::BOTH {
                info!("{} board:\n{}", game.player(side), game.board(side));
            }
        }

        let result = json!({
            "seed": seed,
            "winner": report.winner_name,
            "moves": report.moves,
            "player1": {"shots": report.shots[0], "hits": report.hits[0]},
            "player2": {"shots": report.shots[1], "hits": report.hits[1]},
        });
        println!("{}", serde_json::to_string(&result)?);
    }
    Ok(())
}
