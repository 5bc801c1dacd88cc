use super::*;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;

#[test]
fn test_self_play() {
    let mut engine1 = MinimaxEngine::new();
    let mut engine2 = MinimaxEngine::new();

    let config = MatchConfig {
        num_games: 2,
        depth: 2,
        max_moves: 50,
        verbose: false,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut engine1, &mut engine2);

    // Self-play should complete without panic
    assert_eq!(result.total_games(), 2);
}

#[test]
fn test_random_games_finish() {
    let mut engine1 = RandomEngine::seeded(11);
    let mut engine2 = RandomEngine::seeded(12);

    let config = MatchConfig {
        num_games: 4,
        depth: 1,
        max_moves: 400,
        verbose: false,
        ..Default::default()
    };

    let result = MatchRunner::new(config).run_match(&mut engine1, &mut engine2);
    assert_eq!(result.total_games(), 4);
}

#[test]
fn test_zero_move_limit_is_draw() {
    let mut engine1 = RandomEngine::seeded(1);
    let mut engine2 = RandomEngine::seeded(2);
    let config = MatchConfig {
        max_moves: 0,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    assert_eq!(runner.play_game(&mut engine1, &mut engine2), GameResult::Draw);
}

#[test]
fn test_search_beats_random() {
    let mut search = MinimaxEngine::new();
    let mut random = RandomEngine::seeded(7);
    let result = quick_match(&mut search, &mut random, 2, 3);
    assert_eq!(result.total_games(), 2);
    // Material search never loses to random moves at this depth
    assert_eq!(result.losses, 0);
}
