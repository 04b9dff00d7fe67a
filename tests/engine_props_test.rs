//! Property tests for move sequences.

use proptest::prelude::*;
use timed_tictactoe::{GameEngine, Player, Square};

proptest! {
    /// While the game is running, X is to move after an even number of
    /// applied moves and O after an odd number.
    #[test]
    fn prop_turn_follows_move_count(moves in prop::collection::vec(0usize..9, 0..20)) {
        let mut engine = GameEngine::default();
        let mut applied = 0usize;
        for index in moves {
            let report = engine.apply_move(index);
            if report.applied() {
                applied += 1;
            }
            if engine.is_active() {
                let expected = if applied % 2 == 0 { Player::X } else { Player::O };
                prop_assert_eq!(engine.current_player(), expected);
            }
        }
        prop_assert_eq!(engine.board().occupied(), applied);
    }

    /// Squares never change once marked, and every game ends on at most
    /// one scoreboard entry.
    #[test]
    fn prop_marks_are_permanent(moves in prop::collection::vec(0usize..9, 0..20)) {
        let mut engine = GameEngine::default();
        for index in moves {
            let before = engine.board().clone();
            engine.apply_move(index);
            for (old, new) in before.squares().iter().zip(engine.board().squares()) {
                if *old != Square::Empty {
                    prop_assert_eq!(old, new);
                }
            }
        }
        prop_assert!(engine.scores().games() <= 1);
        prop_assert_eq!(engine.scores().games() as usize, engine.history().len());
        prop_assert_eq!(engine.is_active(), engine.history().is_empty());
    }

    /// A win is reported exactly when a line is complete.
    #[test]
    fn prop_check_win_matches_status(moves in prop::collection::vec(0usize..9, 0..20)) {
        let mut engine = GameEngine::default();
        for index in moves {
            engine.apply_move(index);
        }
        prop_assert_eq!(engine.check_win(), engine.winning_line().is_some());
        if engine.check_draw() {
            prop_assert!(!engine.check_win());
            prop_assert_eq!(engine.scores().draws(), 1);
        }
    }
}
