use std::collections::HashSet;

use broadside::{
    Board, Bot, BotError, GameConfig, Orientation, ShotOutcome, BOARD_SIZE, TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_bot_covers_every_cell_once_then_errors() {
    let config = GameConfig::default();
    let mut rng = SmallRng::seed_from_u64(5);
    let mut board = Board::new(&config);
    board.randomize_ships(&mut rng).unwrap();
    let mut bot = Bot::new(&config, &mut rng);
    assert_eq!(bot.remaining(), BOARD_SIZE * BOARD_SIZE);

    let mut seen = HashSet::new();
    let mut hits = 0;
    for _ in 0..BOARD_SIZE * BOARD_SIZE {
        let shot = bot.shoot(&mut board).unwrap();
        assert!(seen.insert((shot.x, shot.y)), "repeated target {:?}", shot);
        assert_ne!(shot.outcome, ShotOutcome::AlreadyFired);
        if shot.outcome.is_hit() {
            hits += 1;
        }
    }
    assert_eq!(seen.len(), BOARD_SIZE * BOARD_SIZE);
    assert_eq!(hits, TOTAL_SHIP_CELLS);
    assert!(board.all_ships_sunk());
    assert_eq!(bot.remaining(), 0);

    let before = board.clone();
    assert_eq!(bot.shoot(&mut board), Err(BotError::OutOfTargets));
    assert_eq!(board, before);
}

#[test]
fn test_bot_consumes_targets_back_to_front() {
    let config = GameConfig::default();
    let mut rng = SmallRng::seed_from_u64(11);
    let mut bot = Bot::new(&config, &mut rng);
    let mut board = Board::new(&config);
    let expected: Vec<_> = bot.targets().iter().rev().take(3).copied().collect();
    let fired: Vec<_> = (0..3)
        .map(|_| {
            let s = bot.shoot(&mut board).unwrap();
            (s.x, s.y)
        })
        .collect();
    assert_eq!(fired, expected);
}

#[test]
fn test_bot_reports_board_outcomes() {
    let config = GameConfig::new(2, vec![broadside::ShipType::new("Patrol", 2)]).unwrap();
    let mut rng = SmallRng::seed_from_u64(2);
    let mut board = Board::new(&config);
    board.place_ship(0, 0, 2, Orientation::Horizontal).unwrap();
    // someone else already fired at (1, 0)
    board.shoot(1, 0).unwrap();

    let mut bot = Bot::new(&config, &mut rng);
    let mut outcomes = Vec::new();
    while let Ok(shot) = bot.shoot(&mut board) {
        outcomes.push(((shot.x, shot.y), shot.outcome));
    }
    outcomes.sort_by_key(|&(pos, _)| pos);
    assert_eq!(
        outcomes,
        vec![
            ((0, 0), ShotOutcome::Hit),
            ((0, 1), ShotOutcome::Miss),
            ((1, 0), ShotOutcome::AlreadyFired),
            ((1, 1), ShotOutcome::Miss),
        ]
    );
}

#[test]
fn test_bot_size_mismatch_surfaces_board_error() {
    let big = GameConfig::default();
    let small = GameConfig::new(1, vec![]).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    let mut bot = Bot::new(&big, &mut rng);
    let mut board = Board::new(&small);
    let mut errors = 0;
    for _ in 0..BOARD_SIZE * BOARD_SIZE {
        if let Err(BotError::Board(_)) = bot.shoot(&mut board) {
            errors += 1;
        }
    }
    assert_eq!(errors, BOARD_SIZE * BOARD_SIZE - 1);
    assert_eq!(bot.shoot(&mut board), Err(BotError::OutOfTargets));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn bot_never_repeats(seed in any::<u64>(), size in 1..=12usize) {
        let config = GameConfig::new(size, vec![]).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut bot = Bot::new(&config, &mut rng);
        let mut board = Board::new(&config);
        let mut seen = HashSet::new();
        while let Ok(shot) = bot.shoot(&mut board) {
            prop_assert!(seen.insert((shot.x, shot.y)));
            prop_assert_eq!(shot.outcome, ShotOutcome::Miss);
        }
        prop_assert_eq!(seen.len(), size * size);
        prop_assert_eq!(board.shots_fired(), size * size);
    }
}
