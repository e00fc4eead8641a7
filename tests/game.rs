//! Driving the engine through the `Game` facade.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use gopher_chess::board::{
    GameStatus, MoveParseError, SearchIterationInfo, SearchLimits, START_FEN,
};
use gopher_chess::engine::GameError;
use gopher_chess::{Color, Game};

fn quick() -> SearchLimits {
    SearchLimits::move_time(Duration::from_secs(5)).with_max_depth(3)
}

#[test]
fn new_game_starts_at_initial_position() {
    let game = Game::new();
    assert_eq!(game.fen(), START_FEN);
    assert_eq!(game.legal_moves().len(), 20);
    assert_eq!(game.status(), GameStatus::Ongoing);
    assert_eq!(game.evaluate(), 0);
}

#[test]
fn play_and_undo() {
    let mut game = Game::new();
    let m = game.play("d2d4").unwrap();
    assert_eq!(m.to_string(), "d2d4");
    assert_eq!(game.board().side_to_move(), Color::Black);

    assert!(matches!(
        game.play("d7d4"),
        Err(GameError::Move(MoveParseError::IllegalMove { .. }))
    ));
    assert!(matches!(
        game.play("zz"),
        Err(GameError::Move(MoveParseError::InvalidLength { len: 2 }))
    ));

    assert_eq!(game.undo().unwrap(), m);
    assert_eq!(game.fen(), START_FEN);
}

#[test]
fn position_with_moves_from_fen() {
    let mut game = Game::new();
    game.set_position_with_moves(
        Some("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"),
        &["O-O", "e8c8"],
    )
    .unwrap();
    assert_eq!(game.fen(), "2kr3r/8/8/8/8/8/8/R4RK1 w - - 2 2");
}

#[test]
fn search_does_not_play() {
    let mut game = Game::new();
    game.set_limits(quick());
    let result = game.search();
    assert!(result.best_move.is_some());
    assert_eq!(game.fen(), START_FEN);
}

#[test]
fn think_and_play_makes_the_move() {
    let mut game = Game::new();
    game.set_limits(quick());
    let result = game.think_and_play();
    let played = game.board().last_move();
    assert_eq!(played, result.best_move);
    assert_eq!(game.board().side_to_move(), Color::Black);
}

#[test]
fn think_and_play_delivers_mate() {
    let mut game = Game::new();
    game.set_limits(quick());
    game.set_position("6k1/5ppp/8/8/8/8/8/R6K w - - 0 1").unwrap();
    let result = game.think_and_play();
    assert_eq!(result.best_move.map(|m| m.to_string()), Some("a1a8".into()));
    assert_eq!(
        game.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );

    // Nothing left to play
    let after = game.think_and_play();
    assert_eq!(after.best_move, None);
    assert_eq!(game.board().history().len(), 1);
}

#[test]
fn info_callback_sees_every_depth() {
    let depths = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&depths);

    let mut game = Game::new();
    game.set_limits(quick());
    game.set_info_callback(Some(Arc::new(move |info: &SearchIterationInfo| {
        sink.lock().unwrap().push(info.depth);
    })));
    let result = game.search();

    let seen = depths.lock().unwrap().clone();
    assert_eq!(seen, (1..=result.depth).collect::<Vec<_>>());
}

#[test]
fn self_play_stays_consistent() {
    let mut game = Game::new();
    game.set_limits(SearchLimits::move_time(Duration::from_secs(5)).with_max_depth(2));
    for _ in 0..12 {
        if game.status().is_over() {
            break;
        }
        let result = game.think_and_play();
        assert!(result.best_move.is_some());
        assert_eq!(game.board().hash(), game.board().calculate_hash());
    }
    while game.undo().is_ok() {}
    assert_eq!(game.fen(), START_FEN);
}
