//! Tests for the minimax engine against every possible human opponent.

use tictactoe_core::{AI_WIN, Board, HUMAN_WIN, Mark, Minimax, Outcome, Side};

/// Plays out every legal human reply sequence against the engine and
/// returns the number of finished games, failing on any human win.
fn explore(engine: &Minimax, board: &mut Board, to_move: Side) -> usize {
    match board.outcome() {
        Outcome::Win(mark) => {
            assert_ne!(mark, Side::Human.mark(), "engine lost on\n{board}");
            return 1;
        }
        Outcome::Draw => return 1,
        Outcome::InProgress => {}
    }

    match to_move {
        Side::Ai => {
            let before = *board;
            let pos = engine
                .best_move(board)
                .expect("non-terminal board must yield a move");
            assert_eq!(*board, before, "search must restore the board");
            board.make_move(pos, Side::Ai.mark()).unwrap();
            let games = explore(engine, board, Side::Human);
            board.undo_move(pos);
            games
        }
        Side::Human => {
            let mut games = 0;
            for pos in board.available_moves() {
                board.make_move(pos, Side::Human.mark()).unwrap();
                games += explore(engine, board, Side::Ai);
                board.undo_move(pos);
            }
            games
        }
    }
}

#[test]
fn test_engine_never_loses_moving_first() {
    let engine = Minimax::new();
    let games = explore(&engine, &mut Board::new(), Side::Ai);
    assert!(games > 0);
}

#[test]
fn test_engine_never_loses_moving_second() {
    let engine = Minimax::new();
    let games = explore(&engine, &mut Board::new(), Side::Human);
    assert!(games > 0);
}

#[test]
fn test_first_move_on_empty_board() {
    // Every opening is a draw under perfect play, so index 0 is kept.
    let engine = Minimax::new();
    let mut board = Board::new();
    let outcome = engine.search(&mut board);
    assert_eq!(outcome.best_move, Some(0));
    assert_eq!(outcome.score, Some(0));
    assert_eq!(board, Board::new());
    assert!(outcome.stats.nodes > 500_000);
}

#[test]
fn test_forced_win_completes_row() {
    let mut board: Board = "XX.|OO.|...".parse().unwrap();
    let engine = Minimax::new();
    assert_eq!(engine.best_move(&mut board), Some(2));
}

#[test]
fn test_lost_position_still_blocks_by_tie_break() {
    // O forks after any reply, so every move loses; the block at 2 is
    // kept only because it is the lowest index.
    let mut board: Board = "OO.|X..|...".parse().unwrap();
    let engine = Minimax::new();
    let scores = engine.move_scores(&mut board);
    assert!(scores.iter().all(|s| s.score == HUMAN_WIN), "{scores:?}");
    assert_eq!(engine.best_move(&mut board), Some(2));
}

#[test]
fn test_block_saves_the_game() {
    // O threatens 2. Blocking there also gives X a fork on 5 and 6.
    let mut board: Board = "OO.|.X.|..X".parse().unwrap();
    let engine = Minimax::new();
    let scores = engine.move_scores(&mut board);
    for score in &scores {
        if score.position == 2 {
            assert_eq!(score.score, AI_WIN);
        } else {
            assert_eq!(score.score, HUMAN_WIN, "move {}", score.position);
        }
    }
    assert_eq!(engine.best_move(&mut board), Some(2));
}

#[test]
fn test_symmetric_wins_pick_lowest_index() {
    // X can finish the top row at 2 or the left column at 6;
    // O has no threat of its own.
    let mut board: Board = "XX.|XOO|.O.".parse().unwrap();
    let engine = Minimax::new();
    let scores = engine.move_scores(&mut board);
    let winning: Vec<usize> = scores
        .iter()
        .filter(|s| s.score == AI_WIN)
        .map(|s| s.position)
        .collect();
    assert!(winning.contains(&2) && winning.contains(&6), "{scores:?}");
    assert_eq!(engine.best_move(&mut board), Some(2));
}

#[test]
fn test_engine_as_o_never_loses() {
    // Mirror setup: the engine plays O. Its opponent's mark is X.
    let engine = Minimax::with_ai_mark(Mark::O);

    fn walk(engine: &Minimax, board: &mut Board, ai_to_move: bool) {
        if let Some(winner) = board.check_winner() {
            assert_eq!(winner, engine.ai_mark(), "engine lost on\n{board}");
            return;
        }
        if board.is_full() {
            return;
        }
        if ai_to_move {
            let pos = engine.best_move(board).unwrap();
            board.make_move(pos, engine.ai_mark()).unwrap();
            walk(engine, board, false);
            board.undo_move(pos);
        } else {
            for pos in board.available_moves() {
                board.make_move(pos, engine.human_mark()).unwrap();
                walk(engine, board, true);
                board.undo_move(pos);
            }
        }
    }

    walk(&engine, &mut Board::new(), false);
}
