use clap::Parser;
use colored::Colorize;
use railbird::cards::Board;
use railbird::cards::Hole;
use railbird::equity::Estimator;
use railbird::equity::Session;

/// Estimate a hero's chance of winning a live hold'em hand.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// hero hole cards, e.g. "Ad Kd"
    #[arg(long)]
    hole: String,
    /// community cards in reveal order, e.g. "Qd Jd Td"
    #[arg(long, default_value = "")]
    board: String,
    /// players still in the hand, hero included
    #[arg(long)]
    players: usize,
    /// monte carlo deals per estimate
    #[arg(long, default_value_t = railbird::TRIALS)]
    trials: usize,
    /// fix the rng for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
    /// emit the estimate as json instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    railbird::log();
    let args = Args::parse();
    let hole = Hole::try_from(args.hole.as_str())?;
    let board = Board::try_from(args.board.as_str())?;
    let mut session = Session::new();
    session.reset(args.players);
    session.deal(hole)?;
    for card in board.cards().iter().copied() {
        session.reveal(card)?;
    }
    let mut estimator = match args.seed {
        Some(seed) => Estimator::seeded(args.trials, seed),
        None => Estimator::new(args.trials),
    };
    log::info!(
        "estimating {} on the {} against {} rivals over {} deals",
        hole,
        session.street(),
        session.active().saturating_sub(1),
        estimator.trials(),
    );
    match estimator.estimate(&session)? {
        None => println!("no data"),
        Some(estimate) => {
            let p = estimate.probability();
            if args.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "probability": p,
                        "wins": estimate.wins(),
                        "trials": estimate.trials(),
                    })
                );
            } else {
                let percent = format!("{:.0}%", p * 100.0);
                let percent = match p {
                    p if p < 0.25 => percent.red(),
                    p if p < 0.50 => percent.yellow(),
                    _ => percent.green(),
                };
                println!("P[win] = {}", percent);
            }
        }
    }
    Ok(())
}
