//! Bot-vs-bot simulation: two seeded random fleets, two shuffled bots,
//! alternating shots until one fleet is sunk. Prints a JSON summary.

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{Board, Bot, GameConfig};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde::Serialize;

#[cfg(feature = "std")]
#[derive(Serialize)]
struct SideReport {
    hits: usize,
    shots: usize,
    sunk: bool,
}

#[cfg(feature = "std")]
#[derive(Serialize)]
struct SimReport {
    winner: &'static str,
    turns: usize,
    first: SideReport,
    second: SideReport,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    broadside::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let config = GameConfig::default();

    let mut board1 = Board::new(&config);
    let mut board2 = Board::new(&config);
    board1.randomize_ships(&mut rng1).map_err(|e| anyhow::anyhow!(e))?;
    board2.randomize_ships(&mut rng2).map_err(|e| anyhow::anyhow!(e))?;
    let mut bot1 = Bot::new(&config, &mut rng1);
    let mut bot2 = Bot::new(&config, &mut rng2);

    let mut turns = 0;
    let winner = loop {
        turns += 1;
        bot1.shoot(&mut board2).map_err(|e| anyhow::anyhow!(e))?;
        if board2.all_ships_sunk() {
            break "first";
        }
        bot2.shoot(&mut board1).map_err(|e| anyhow::anyhow!(e))?;
        if board1.all_ships_sunk() {
            break "second";
        }
    };

    let report = SimReport {
        winner,
        turns,
        first: SideReport {
            hits: board2.hits(),
            shots: board2.shots_fired(),
            sunk: board1.all_ships_sunk(),
        },
        second: SideReport {
            hits: board1.hits(),
            shots: board1.shots_fired(),
            sunk: board2.all_ships_sunk(),
        },
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
