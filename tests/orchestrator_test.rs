//! Full games through the orchestrator.

use negamax_tictactoe::{
    FirstEmptyPlayer, HumanPlayer, Mark, Orchestrator, OrchestratorError, Outcome, PerfectPlayer,
    PlayerError, RandomPlayer,
};
use std::io::Cursor;

fn play(x: Box<dyn negamax_tictactoe::Player>, o: Box<dyn negamax_tictactoe::Player>) -> (Outcome, String) {
    let mut orchestrator = Orchestrator::new(x, o, Vec::new());
    let record = orchestrator.run().expect("game completes");
    let output = String::from_utf8(orchestrator.into_output()).expect("utf8 output");
    (*record.outcome(), output)
}

#[test]
fn test_self_play_is_a_draw() {
    let (outcome, output) = play(
        Box::new(PerfectPlayer::new("x")),
        Box::new(PerfectPlayer::new("o")),
    );
    assert!(outcome.is_draw());
    assert!(output.ends_with("it's a draw!\n"));
}

#[test]
fn test_self_play_is_deterministic() {
    let mut first = Orchestrator::new(
        Box::new(PerfectPlayer::new("x")),
        Box::new(PerfectPlayer::new("o")),
        Vec::new(),
    );
    let mut second = Orchestrator::new(
        Box::new(PerfectPlayer::new("x")),
        Box::new(PerfectPlayer::new("o")),
        Vec::new(),
    );
    let a = first.run().unwrap();
    let b = second.run().unwrap();
    assert_eq!(a.history(), b.history());
    assert_eq!(a.history().len(), 9);
}

#[test]
fn test_perfect_x_never_loses_to_random() {
    for seed in 0..8 {
        let (outcome, _) = play(
            Box::new(PerfectPlayer::new("perfect")),
            Box::new(RandomPlayer::seeded("random", seed)),
        );
        assert_ne!(outcome, Outcome::Winner(Mark::O), "seed {seed}");
    }
}

#[test]
fn test_perfect_o_never_loses_to_random() {
    for seed in 0..8 {
        let (outcome, _) = play(
            Box::new(RandomPlayer::seeded("random", seed)),
            Box::new(PerfectPlayer::new("perfect")),
        );
        assert_ne!(outcome, Outcome::Winner(Mark::X), "seed {seed}");
    }
}

#[test]
fn test_perfect_punishes_first_empty() {
    let (outcome, output) = play(
        Box::new(PerfectPlayer::new("perfect")),
        Box::new(FirstEmptyPlayer::new("greedy")),
    );
    assert_eq!(outcome, Outcome::Winner(Mark::X));
    assert!(output.ends_with("...and the winner is: X\n"));
}

#[test]
fn test_human_malformed_input_aborts_game() {
    let human = HumanPlayer::new("me", Cursor::new(b"four\n".to_vec()), Vec::new(), false);
    let mut orchestrator = Orchestrator::new(
        Box::new(human),
        Box::new(PerfectPlayer::new("perfect")),
        Vec::new(),
    );
    let err = orchestrator.run().unwrap_err();
    assert!(matches!(
        err,
        OrchestratorError::Player(PlayerError::MalformedInput(ref input)) if input == "four"
    ));
}

#[test]
fn test_human_moves_are_applied() {
    // Human X walks into a loss on the top row; O blocks and then wins.
    let human = HumanPlayer::new("me", Cursor::new(b"0\n1\n3\n".to_vec()), Vec::new(), false);
    let (outcome, _) = play(Box::new(human), Box::new(PerfectPlayer::new("perfect")));
    assert_eq!(outcome, Outcome::Winner(Mark::O));
}
