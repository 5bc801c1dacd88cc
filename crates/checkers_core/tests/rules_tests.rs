//! Whole-game rule invariants
//!
//! Plays short games between the search and itself and checks the board
//! bookkeeping after every move.

use checkers_core::{Board, Color, Game, Outcome, Rank, best_move, best_move_alpha_beta};

fn assert_consistent(board: &Board) {
    let on_grid = board.piece_count();
    let counted = board.remaining(Color::White) as usize + board.remaining(Color::Red) as usize;
    assert_eq!(on_grid, counted, "piece counters out of sync:\n{}", board);

    for color in [Color::White, Color::Red] {
        let kings = board.pieces(color).filter(|p| p.rank == Rank::King).count();
        assert_eq!(kings, board.kings(color) as usize, "king counter out of sync:\n{}", board);
        for p in board.pieces(color) {
            assert_eq!(board.piece_at(p.square()), Some(p));
            // Men never stand on their own crowning row
            if p.rank == Rank::Man {
                assert_ne!(p.row, color.crowning_row(), "uncrowned man:\n{}", board);
            }
        }
    }
}

#[test]
fn test_self_play_keeps_board_consistent() {
    let mut game = Game::new();

    for _ply in 0..80 {
        if game.outcome() != Outcome::InProgress {
            break;
        }
        let side = game.turn();
        let (_, next) = best_move(game.board(), 2, side).expect("side to move has a move");
        assert_consistent(&next);

        // Kings are never demoted, they only disappear by capture
        for color in [Color::White, Color::Red] {
            if next.kings(color) < game.board().kings(color) {
                assert!(next.remaining(color) < game.board().remaining(color));
            }
        }
        game.install_board(next);
    }
}

#[test]
fn test_search_result_is_a_legal_successor() {
    let mut game = Game::new();
    for _ply in 0..20 {
        if game.outcome() != Outcome::InProgress {
            break;
        }
        let side = game.turn();
        let legal = game.board().successors(side);
        let (_, chosen) = best_move_alpha_beta(game.board(), 3, side).unwrap();
        assert!(legal.contains(&chosen));
        game.install_board(chosen);
    }
}

#[test]
fn test_winner_reported_when_side_is_wiped_out() {
    let board = Board::from_diagram(
        "........
         ........
         ........
         ........
         .r......
         ..w.....
         ........
         ........",
    )
    .unwrap();
    let mut game = Game::with_board(board, Color::White);
    assert_eq!(game.winner(), None);

    assert!(game.select_cell(5, 2));
    assert!(game.select_cell(3, 0));
    assert_eq!(game.winner(), Some(Color::White));
    assert_eq!(game.outcome(), Outcome::Won(Color::White));
}
