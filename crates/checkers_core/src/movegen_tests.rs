use super::*;

fn board(diagram: &str) -> Board {
    Board::from_diagram(diagram).expect("valid test diagram")
}

#[test]
fn test_startpos_moves() {
    let pos = Board::startpos();
    // Four front men, the edge one has a single step
    assert_eq!(pos.successors(Color::Red).len(), 7);
    assert_eq!(pos.successors(Color::White).len(), 7);
    assert_eq!(
        pos.legal_steps(sq(2, 1)).keys().copied().collect::<Vec<_>>(),
        vec![sq(3, 0), sq(3, 2)]
    );
    // Back rows are blocked by their own men
    assert!(pos.legal_moves(sq(0, 1)).is_empty());
}

#[test]
fn test_single_jump_over_adjacent_man() {
    let pos = board(
        "........
         ........
         ........
         ........
         .r......
         ..w.....
         ........
         ........",
    );
    let jumps = pos.legal_jumps(sq(5, 2));
    assert_eq!(jumps, BTreeMap::from([(sq(3, 0), sq(4, 1))]));
    assert_eq!(
        pos.legal_moves(sq(5, 2)),
        MoveMap::from([(sq(3, 0), vec![sq(4, 1)])])
    );
}

#[test]
fn test_jump_needs_empty_landing_and_opponent() {
    let pos = board(
        "........
         ........
         ........
         w.......
         .r.w....
         ..w.....
         ........
         ........",
    );
    // Landing on (3,0) is taken and (4,3) holds a friendly man
    assert!(pos.legal_jumps(sq(5, 2)).is_empty());
    assert!(pos.legal_moves(sq(5, 2)).is_empty());
}

#[test]
fn test_men_do_not_jump_backwards() {
    let pos = board(
        "........
         ........
         ........
         ..w.....
         .r......
         ........
         ........
         ........",
    );
    // Each man has the other one behind it
    assert!(pos.legal_jumps(sq(3, 2)).is_empty());
    assert!(pos.legal_jumps(sq(4, 1)).is_empty());

    let pos = board(
        "........
         ........
         ........
         ..w.....
         .R......
         ........
         ........
         ........",
    );
    assert_eq!(
        pos.legal_jumps(sq(4, 1)),
        BTreeMap::from([(sq(2, 3), sq(3, 2))])
    );
}

#[test]
fn test_jumps_preferred_over_steps() {
    let pos = board(
        "........
         ........
         ........
         ........
         ...r....
         ..W.....
         ........
         ........",
    );
    let moves = pos.legal_moves(sq(5, 2));
    assert_eq!(moves, MoveMap::from([(sq(3, 4), vec![sq(4, 3)])]));
    assert_eq!(pos.legal_steps(sq(5, 2)).len(), 3);
}

#[test]
fn test_double_jump_is_one_chain() {
    let pos = board(
        "........
         ........
         ...r....
         ........
         .r......
         W.......
         ........
         ........",
    );
    let chains = pos.jump_chains(sq(5, 0));
    assert_eq!(chains.get(&sq(3, 2)), Some(&vec![sq(4, 1)]));
    assert_eq!(chains.get(&sq(1, 4)), Some(&vec![sq(4, 1), sq(2, 3)]));
    assert_eq!(chains.len(), 2);

    // Only the completed chain is a legal whole move
    let next = pos.successors(Color::White);
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].remaining(Color::Red), 0);
    assert_eq!(next[0].piece_at(sq(1, 4)).map(|p| p.rank), Some(Rank::King));
}

#[test]
fn test_chain_branches_both_ways() {
    let pos = board(
        "........
         r.......
         .w......
         ........
         .w.w....
         ........
         ........
         ........",
    );
    let chains = pos.jump_chains(sq(1, 0));
    assert_eq!(chains.get(&sq(3, 2)), Some(&vec![sq(2, 1)]));
    assert_eq!(chains.get(&sq(5, 0)), Some(&vec![sq(2, 1), sq(4, 1)]));
    assert_eq!(chains.get(&sq(5, 4)), Some(&vec![sq(2, 1), sq(4, 3)]));
    assert_eq!(pos.successors(Color::Red).len(), 2);
}

#[test]
fn test_crowning_ends_the_chain() {
    let pos = board(
        "........
         ........
         ........
         ........
         ........
         r.......
         .w.w....
         ........",
    );
    let chains = pos.jump_chains(sq(5, 0));
    assert_eq!(chains, MoveMap::from([(sq(7, 2), vec![sq(6, 1)])]));

    let next = pos.successors(Color::Red);
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].kings(Color::Red), 1);
    assert_eq!(next[0].remaining(Color::White), 1);
}

#[test]
fn test_captured_piece_not_jumped_twice() {
    let pos = board(
        "........
         ........
         ........
         ..r.....
         ...W....
         ........
         ........
         ........",
    );
    // King jumps (3,2) to (2,1); it may not come back over the same man
    let chains = pos.jump_chains(sq(4, 3));
    assert_eq!(chains, MoveMap::from([(sq(2, 1), vec![sq(3, 2)])]));
}

#[test]
fn test_mandatory_capture_is_total() {
    let pos = board(
        "........
         ........
         ........
         ........
         .r......
         ..w...w.
         ........
         ........",
    );
    assert!(pos.side_has_jump(Color::White));
    assert_eq!(pos.forced_pieces(Color::White), BTreeSet::from([sq(5, 2)]));

    let next = pos.successors(Color::White);
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].remaining(Color::Red), 0);
    // The free man still stands where it was
    assert!(next[0].piece_at(sq(5, 6)).is_some());
}

#[test]
fn test_successors_keep_counts_consistent() {
    let pos = Board::startpos();
    for child in pos.successors(Color::Red) {
        for grandchild in child.successors(Color::White) {
            for leaf in grandchild.successors(Color::Red) {
                let total = leaf.remaining(Color::White) as usize + leaf.remaining(Color::Red) as usize;
                assert_eq!(leaf.piece_count(), total);
            }
        }
    }
}

#[test]
fn test_shorter_chain_to_shared_landing_is_kept() {
    let pos = board(
        "........
         ........
         .r.r.r..
         ........
         .r.r....
         ..W.....
         ........
         ........",
    );
    // The longest path to (1,6) takes four men
    assert_eq!(
        pos.jump_chains(sq(5, 2)).get(&sq(1, 6)),
        Some(&vec![sq(4, 1), sq(2, 1), sq(2, 3), sq(2, 5)])
    );

    let next = pos.successors(Color::White);
    // Over (4,3) and (2,5) only, finishing on the same square
    let short = next
        .iter()
        .find(|b| b.remaining(Color::Red) == 3 && b.piece_at(sq(1, 6)).is_some())
        .expect("two-capture chain ending on (1,6)");
    for at in [sq(4, 1), sq(2, 1), sq(2, 3)] {
        assert!(short.piece_at(at).is_some());
    }

    for (i, child) in next.iter().enumerate() {
        let king = child.pieces(Color::White).next().unwrap().square();
        assert!(child.legal_jumps(king).is_empty());
        assert!(!next[..i].contains(child));
    }
}
