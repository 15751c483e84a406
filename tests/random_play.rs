//! Randomized games checking rules invariants on every position.
//!
//! Each game is driven by a seeded RNG so failures are reproducible.

use go_rules::board::{Board, Color};
use go_rules::engine::{BoardEngine, EngineConfig, RuleSet};
use go_rules::error::MoveError;
use go_rules::scoring::{Owner, count_score, determine_owner, find_territory};

const SIZE: usize = 7;
const GAMES: u64 = 40;
const MOVES_PER_GAME: usize = 120;

fn random_point(rng: &mut fastrand::Rng) -> (usize, usize) {
    (rng.usize(0..SIZE), rng.usize(0..SIZE))
}

/// Number of empty points in regions bordered by both colors or by none.
fn neutral_points(board: &Board) -> usize {
    let size = board.size();
    let mut seen = vec![false; size * size];
    let mut neutral = 0;
    for y in 0..size {
        for x in 0..size {
            if !board.is_empty_at(x, y) || seen[y * size + x] {
                continue;
            }
            let region = find_territory(board, (x, y));
            for &(rx, ry) in &region {
                seen[ry * size + rx] = true;
            }
            if determine_owner(board, &region) == Owner::Neutral {
                neutral += region.len();
            }
        }
    }
    neutral
}

fn every_group_has_liberty(board: &Board) -> bool {
    (0..SIZE).all(|y| {
        (0..SIZE).all(|x| board.is_empty_at(x, y) || board.has_liberty(&board.group((x, y))))
    })
}

#[test]
fn test_random_games_strict_rules() {
    for seed in 0..GAMES {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut game = BoardEngine::with_config(EngineConfig {
            size: SIZE,
            rules: RuleSet::Strict,
        })
        .unwrap();

        for _ in 0..MOVES_PER_GAME {
            let (x, y) = random_point(&mut rng);
            let color = game.to_move();
            let before = game.board().clone();

            if !before.is_empty_at(x, y) {
                assert_eq!(
                    game.play(x, y).unwrap_err(),
                    MoveError::OccupiedCell { x, y }
                );
                assert_eq!(game.board(), &before, "seed {seed}: occupied move mutated board");
                continue;
            }

            let predicted_suicide = game.is_suicide(x, y, color).unwrap();
            assert_eq!(game.board(), &before, "seed {seed}: is_suicide mutated board");

            match game.play(x, y) {
                Ok(result) => {
                    assert!(!predicted_suicide, "seed {seed}: legal move predicted suicide");
                    assert_eq!(&result.board, game.board());
                    for (cx, cy) in result.captured() {
                        assert_eq!(before.get(cx, cy), Some(color.opposite()));
                        assert_eq!(game.get(cx, cy), None);
                    }
                    let removed = before.count(color.opposite()) - game.board().count(color.opposite());
                    assert_eq!(removed, result.capture_count());
                    assert_eq!(game.to_move(), color.opposite());
                }
                Err(MoveError::SuicideMove { .. }) => {
                    assert!(predicted_suicide, "seed {seed}: suicide not predicted");
                    assert_eq!(game.board(), &before);
                    assert_eq!(game.to_move(), color);
                    game.pass().unwrap();
                }
                Err(e) => panic!("seed {seed}: unexpected error {e}"),
            }

            assert!(
                every_group_has_liberty(game.board()),
                "seed {seed}: group without liberties left on board\n{}",
                game.board()
            );
        }
    }
}

#[test]
fn test_random_positions_score_invariants() {
    for seed in 0..GAMES {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut game = BoardEngine::new(SIZE).unwrap();

        let moves = rng.usize(0..MOVES_PER_GAME);
        for _ in 0..moves {
            let (x, y) = random_point(&mut rng);
            let color = if rng.bool() { Color::Black } else { Color::White };
            let _ = game.apply_move(x, y, color);
        }

        let board = game.board().clone();
        let score = count_score(&board);
        assert_eq!(
            score.black + score.white + neutral_points(&board),
            SIZE * SIZE,
            "seed {seed}: scores do not cover the board\n{board}"
        );
        assert_eq!(game.count_score(), score, "seed {seed}: scoring is not idempotent");
        assert_eq!(game.board(), &board, "seed {seed}: scoring mutated the board");
    }
}

#[test]
fn test_random_groups_are_closed() {
    let mut rng = fastrand::Rng::with_seed(7);
    let mut game = BoardEngine::new(SIZE).unwrap();
    for _ in 0..MOVES_PER_GAME {
        let (x, y) = random_point(&mut rng);
        let _ = game.play(x, y);
    }

    let board = game.board();
    for y in 0..SIZE {
        for x in 0..SIZE {
            let Ok(group) = game.find_group(x, y) else {
                continue;
            };
            let color = board.get(x, y);
            for &p in &group {
                assert_eq!(board.get(p.0, p.1), color);
                for n in board.neighbors(p) {
                    if board.get(n.0, n.1) == color {
                        assert!(group.contains(&n), "{n:?} missing from group at ({x}, {y})");
                    }
                }
            }
        }
    }
}
