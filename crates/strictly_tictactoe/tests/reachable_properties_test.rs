//! Properties checked over every board reachable by legal play.

use std::collections::{HashSet, VecDeque};
use strictly_tictactoe::{
    Board, Outcome, Player, Search, SearchConfig, actions, initial_state, minimax, outcome, player,
    result, terminal, utility, validate, winner,
};

/// Breadth-first walk of the game graph from the empty board.
fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([initial_state()]);
    let mut boards = Vec::new();

    while let Some(board) = queue.pop_front() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if terminal(&board) {
            continue;
        }
        for action in actions(&board) {
            queue.push_back(result(&board, action).expect("enumerated action is legal"));
        }
    }
    boards
}

#[test]
fn test_reachable_state_count() {
    // Distinct positions of tic-tac-toe, empty board included.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_turn_follows_move_parity() {
    for board in reachable_boards() {
        let expected = if board.filled() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        assert_eq!(player(&board), expected, "board\n{}", board);
    }
}

#[test]
fn test_successor_hands_turn_to_opponent() {
    for board in reachable_boards().into_iter().filter(|b| !terminal(b)) {
        let mover = player(&board);
        for action in actions(&board) {
            let next = result(&board, action).unwrap();
            assert_eq!(player(&next), mover.opponent());
        }
    }
}

#[test]
fn test_actions_are_exactly_the_empty_squares() {
    for board in reachable_boards() {
        let actions = actions(&board);
        let unique: HashSet<_> = actions.iter().collect();
        assert_eq!(unique.len(), actions.len());
        assert_eq!(actions.len() + board.filled(), 9);
        for action in &actions {
            assert!(board.is_empty(action.position().unwrap()));
        }
    }
}

#[test]
fn test_occupied_squares_are_rejected() {
    for board in reachable_boards() {
        let legal = actions(&board);
        for row in 0..4 {
            for col in 0..4 {
                let action = strictly_tictactoe::Action::new(row, col);
                if !legal.contains(&action) {
                    assert!(result(&board, action).is_err(), "{} accepted", action);
                }
            }
        }
    }
}

#[test]
fn test_terminal_iff_winner_or_full() {
    for board in reachable_boards() {
        let expected = winner(&board).is_some() || actions(&board).is_empty();
        assert_eq!(terminal(&board), expected);
        assert_eq!(terminal(&board), outcome(&board) != Outcome::InProgress);
    }
}

#[test]
fn test_terminal_boards_score_and_have_no_action() {
    for board in reachable_boards().into_iter().filter(terminal) {
        assert!([-1, 0, 1].contains(&utility(&board)));
        assert_eq!(minimax(&board), None);
    }
}

#[test]
fn test_reachable_boards_validate() {
    for board in reachable_boards() {
        assert_eq!(validate(&board), Ok(()), "board\n{}", board);
    }
}

#[test]
fn test_minimax_move_is_legal_and_keeps_value() {
    let mut search = Search::default();
    for board in reachable_boards().into_iter().filter(|b| !terminal(b)) {
        let root = *search.evaluate(&board).value();
        let action = search.best_action(&board).expect("non-terminal board has a move");
        let next = result(&board, action).expect("minimax returned an illegal action");
        assert_eq!(*search.evaluate(&next).value(), root, "board\n{}", board);
    }
}

#[test]
fn test_pruned_and_exhaustive_values_agree() {
    let mut pruned = Search::default();
    let mut full = Search::new(SearchConfig::exhaustive());
    for board in reachable_boards().into_iter().filter(|b| b.filled() >= 2) {
        assert_eq!(
            pruned.evaluate(&board).value(),
            full.evaluate(&board).value(),
            "board\n{}",
            board
        );
    }
}
