//! Session tests - move budget, scoring policy, and observers

use std::sync::{Arc, Mutex};

use match3::core::rng::SequenceGenerator;
use match3::core::{Game, GameRules, GemGenerator, Grid, ScorePolicy};
use match3::types::{Effect, Gem, Position, MAX_MOVES_ALLOWED};

fn letters(rows: &[&str]) -> Grid<char> {
    Grid::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap()
}

fn rules(policy: ScorePolicy) -> GameRules {
    GameRules {
        width: 3,
        height: 3,
        max_moves: MAX_MOVES_ALLOWED,
        policy,
    }
}

/// A 3x3 board where swapping (0,2) and (1,2) completes the top row, and the
/// refill sequence makes the new top row complete again once
fn cascading_game(policy: ScorePolicy) -> Game<char, SequenceGenerator<char>> {
    let grid = letters(&["AAB", "BCA", "CBC"]);
    // first refill: BBB on top of "BCB"/"CBC" -> one more row run of B
    let gen = SequenceGenerator::new(vec!['B', 'B', 'B', 'C', 'A', 'C']);
    Game::with_grid(grid, gen, rules(policy))
}

#[test]
fn test_latest_policy_keeps_last_match_score() {
    let mut game = cascading_game(ScorePolicy::Latest);
    let outcome = game.make_move(Position::new(0, 2), Position::new(1, 2)).unwrap();
    assert!(outcome.accepted);
    assert_eq!(outcome.passes, 2);
    assert_eq!(game.score(), 3000);
    assert_eq!(game.tally().matches(), 2);
    assert_eq!(game.tally().refills(), 2);
}

#[test]
fn test_cumulative_policy_sums_matches() {
    let mut game = cascading_game(ScorePolicy::Cumulative);
    game.make_move(Position::new(0, 2), Position::new(1, 2)).unwrap();
    assert_eq!(game.score(), 6000);
}

#[test]
fn test_listener_sees_effects_in_order() {
    let mut game = cascading_game(ScorePolicy::Latest);
    let seen: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    game.add_listener(move |effect: &Effect<char>| {
        let kind = match effect {
            Effect::Match(_) => "match",
            Effect::Refill => "refill",
        };
        sink.lock().unwrap().push(kind);
    });

    game.make_move(Position::new(0, 2), Position::new(1, 2)).unwrap();
    assert_eq!(*seen.lock().unwrap(), vec!["match", "refill", "match", "refill"]);
}

#[test]
fn test_budget_counts_rejected_moves() {
    let mut game: Game<Gem, _> = Game::new(GemGenerator::new(21), GameRules::default());
    let diagonal = (Position::new(0, 0), Position::new(1, 1));
    for used in 1..=MAX_MOVES_ALLOWED {
        let outcome = game.make_move(diagonal.0, diagonal.1).unwrap();
        assert!(!outcome.accepted);
        assert_eq!(game.moves_used(), used);
    }
    assert_eq!(game.moves_left(), 0);
    assert!(game.make_move(diagonal.0, diagonal.1).is_none());
}

#[test]
fn test_same_seed_same_game() {
    let a: Game<Gem, _> = Game::new(GemGenerator::new(99), GameRules::default());
    let b: Game<Gem, _> = Game::new(GemGenerator::new(99), GameRules::default());
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.hint(), b.hint());
}
