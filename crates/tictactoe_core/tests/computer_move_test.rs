//! Tests for the random computer move against live game states.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_core::{GameState, Mark, MarkAssignment, choose_move, empty_cells};

#[test]
fn test_computer_pick_always_applies() {
    // Whatever the seed, the pick lands on an empty cell, so placing it
    // never fails.
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new(MarkAssignment::with_human(Mark::X));
        game.place_mark(5, Mark::X).unwrap();

        let position = choose_move(game.board(), &mut rng).unwrap();
        assert!(empty_cells(game.board()).contains(&position));
        game.place_mark(position, Mark::O).unwrap();
    }
}

#[test]
fn test_random_game_always_terminates() {
    // Alternate random picks until the state goes terminal; nine
    // half-moves is the hard ceiling.
    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new(MarkAssignment::with_human(Mark::X));
        let mut mark = Mark::X;
        let mut half_moves = 0;

        while !game.outcome().is_terminal() {
            let position = choose_move(game.board(), &mut rng).unwrap();
            game.place_mark(position, mark).unwrap();
            mark = mark.opponent();
            half_moves += 1;
            assert!(half_moves <= 9);
        }
    }
}
