use battleship_engine::{
    AiConfig, AiMode, Board, Coordinate, Difficulty, Fleet, GameError, Grid, PlacementRules,
    PlacementStrategy, ShotOutcome, Species, TargetingAi, BOARD_SIZE, SHIPS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn c(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

/// Standard fleet laid out with gaps between every ship.
fn layout() -> Vec<Vec<Coordinate>> {
    vec![
        (1..=5).map(|col| c(2, col)).collect(),
        (0..4).map(|col| c(5, col)).collect(),
        (0..3).map(|col| c(7, col)).collect(),
        (5..8).map(|col| c(9, col)).collect(),
        vec![c(0, 8), c(1, 8)],
    ]
}

fn standard_board() -> Board {
    let grid = Grid::new(BOARD_SIZE).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    let fleet = Fleet::place(
        grid,
        &SHIPS,
        &PlacementStrategy::Manual(layout()),
        &PlacementRules::default(),
        &mut rng,
    )
    .unwrap();
    Board::new(fleet)
}

fn smart_ai() -> TargetingAi {
    TargetingAi::new(AiConfig::default(), Grid::new(BOARD_SIZE).unwrap(), &SHIPS, 1)
}

#[test]
fn test_hunt_uses_one_parity_class() {
    let board = standard_board();
    let mut ai = smart_ai();
    let candidates = ai.hunt_candidates(board.record());
    assert_eq!(candidates.len(), 50);
    assert!(candidates.iter().all(|c| c.parity() == 0));
    assert_eq!(ai.mode_for(board.record()), AiMode::Hunt);
}

#[test]
fn test_opening_shot_is_densest_lowest_cell() {
    let board = standard_board();
    let mut ai = smart_ai();
    let counts = ai.placement_counts(board.record());
    let max = counts.iter().copied().max().unwrap();
    assert_eq!(counts[4 * BOARD_SIZE + 4], max);
    assert_eq!(counts[5 * BOARD_SIZE + 5], max);
    assert_eq!(counts[4 * BOARD_SIZE + 5], max);
    // (4,4) and (5,5) tie in parity class 0; the lower coordinate wins.
    assert_eq!(ai.choose(board.record()).unwrap(), c(4, 4));
}

#[test]
fn test_single_hit_queues_neighbours() {
    let mut board = standard_board();
    let mut ai = smart_ai();
    assert_eq!(board.receive_shot(c(2, 3)).unwrap(), ShotOutcome::Hit);
    assert_eq!(ai.mode_for(board.record()), AiMode::Target);
    assert_eq!(
        ai.pending_targets(board.record()),
        vec![c(1, 3), c(3, 3), c(2, 2), c(2, 4)]
    );
    assert_eq!(ai.choose(board.record()).unwrap(), c(1, 3));
}

#[test]
fn test_two_hits_in_line_extend_the_line() {
    let mut board = standard_board();
    let mut ai = smart_ai();
    board.receive_shot(c(2, 3)).unwrap();
    board.receive_shot(c(2, 4)).unwrap();
    assert_eq!(ai.pending_targets(board.record()), vec![c(2, 2), c(2, 5)]);
    assert_eq!(ai.choose(board.record()).unwrap(), c(2, 2));
}

#[test]
fn test_line_skips_tried_ends() {
    let mut board = standard_board();
    let mut ai = smart_ai();
    board.receive_shot(c(2, 3)).unwrap();
    board.receive_shot(c(2, 4)).unwrap();
    board.receive_shot(c(2, 2)).unwrap();
    assert_eq!(ai.pending_targets(board.record()), vec![c(2, 1), c(2, 5)]);
}

#[test]
fn test_sink_returns_to_hunt() {
    let mut board = standard_board();
    let mut ai = smart_ai();
    board.receive_shot(c(0, 8)).unwrap();
    assert_eq!(ai.mode_for(board.record()), AiMode::Target);
    assert!(board.receive_shot(c(1, 8)).unwrap().is_sunk());

    assert_eq!(ai.mode_for(board.record()), AiMode::Hunt);
    assert!(ai.pending_targets(board.record()).is_empty());
    assert_eq!(ai.afloat(), &[5, 4, 3, 3]);

    // Ships may not touch, so the ring around the destroyer is ruled out.
    let candidates = ai.hunt_candidates(board.record());
    for cell in [c(0, 7), c(2, 8), c(1, 9), c(0, 9), c(1, 7)] {
        assert!(!candidates.contains(&cell), "{:?} should be excluded", cell);
    }
}

#[test]
fn test_exhaustive_hunt_counts_untried_cells() {
    let mut board = standard_board();
    board.receive_shot(c(0, 8)).unwrap();
    board.receive_shot(c(1, 8)).unwrap();
    // 98 untried cells, 93 of them open once the ring around the destroyer is ruled out.
    let with_threshold = |threshold: usize| {
        let config = AiConfig { exhaustive_threshold: threshold, ..AiConfig::default() };
        let mut ai = TargetingAi::new(config, Grid::new(BOARD_SIZE).unwrap(), &SHIPS, 1);
        ai.hunt_candidates(board.record())
    };

    let parity_only = with_threshold(95);
    assert!(parity_only.iter().all(|c| c.parity() == 0));

    let everything = with_threshold(98);
    assert_eq!(everything.len(), 93);
    assert!(everything.contains(&c(0, 1)));
}

#[test]
fn test_touching_ships_keep_the_halo() {
    let mut board = standard_board();
    let config = AiConfig::default().ships_may_touch(true);
    let mut ai = TargetingAi::new(config, Grid::new(BOARD_SIZE).unwrap(), &SHIPS, 1);
    board.receive_shot(c(0, 8)).unwrap();
    board.receive_shot(c(1, 8)).unwrap();
    let candidates = ai.hunt_candidates(board.record());
    assert!(candidates.contains(&c(0, 7)) || candidates.contains(&c(1, 9)));
}

#[test]
fn test_touching_ships_fall_back_and_stay_on_target() {
    let grid = Grid::new(BOARD_SIZE).unwrap();
    let species = [Species::new("Cruiser", 3), Species::new("Destroyer", 2)];
    let mut rng = SmallRng::seed_from_u64(0);
    let fleet = Fleet::place(
        grid,
        &species,
        &PlacementStrategy::Manual(vec![vec![c(1, 3), c(2, 3), c(3, 3)], vec![c(2, 4), c(3, 4)]]),
        &PlacementRules::default().allow_adjacent(true),
        &mut rng,
    )
    .unwrap();
    let mut board = Board::new(fleet);
    let mut ai = TargetingAi::new(AiConfig::default().ships_may_touch(true), grid, &species, 2);

    board.receive_shot(c(2, 3)).unwrap();
    board.receive_shot(c(2, 4)).unwrap();
    assert_eq!(ai.pending_targets(board.record()), vec![c(2, 2), c(2, 5)]);

    // Both line ends miss: back to the neighbours of every live hit.
    assert_eq!(board.receive_shot(c(2, 2)).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.receive_shot(c(2, 5)).unwrap(), ShotOutcome::Miss);
    assert_eq!(
        ai.pending_targets(board.record()),
        vec![c(1, 3), c(3, 3), c(1, 4), c(3, 4)]
    );

    // Sinking the destroyer leaves the cruiser hit still live.
    assert!(board.receive_shot(c(3, 4)).unwrap().is_sunk());
    assert_eq!(ai.mode_for(board.record()), AiMode::Target);
    assert_eq!(ai.pending_targets(board.record()), vec![c(1, 3), c(3, 3)]);
    assert_eq!(ai.afloat(), &[3]);

    board.receive_shot(c(1, 3)).unwrap();
    assert!(board.receive_shot(c(3, 3)).unwrap().is_sunk());
    assert_eq!(ai.mode_for(board.record()), AiMode::Hunt);
    assert_eq!(ai.choose(board.record()), Err(GameError::NoCandidatesRemaining));
}

#[test]
fn test_random_difficulty_never_targets() {
    let mut board = standard_board();
    let mut ai = TargetingAi::new(
        AiConfig::with_difficulty(Difficulty::Random),
        Grid::new(BOARD_SIZE).unwrap(),
        &SHIPS,
        3,
    );
    board.receive_shot(c(2, 3)).unwrap();
    assert_eq!(ai.mode_for(board.record()), AiMode::Hunt);
    assert_eq!(ai.hunt_candidates(board.record()).len(), 99);
    let pick = ai.choose(board.record()).unwrap();
    assert!(!board.record().contains(pick));
}

#[test]
fn test_suggestion_is_stable_until_fired() {
    let board = standard_board();
    let mut ai = smart_ai();
    let first = ai.choose(board.record()).unwrap();
    assert_eq!(ai.choose(board.record()).unwrap(), first);
}

#[test]
fn test_no_candidates_when_board_exhausted() {
    let grid = Grid::new(2).unwrap();
    let species = [Species::new("Dinghy", 1)];
    let mut rng = SmallRng::seed_from_u64(5);
    let fleet = Fleet::place(grid, &species, &PlacementStrategy::Random, &PlacementRules::default(), &mut rng).unwrap();
    let mut board = Board::new(fleet);
    let mut ai = TargetingAi::new(AiConfig::with_difficulty(Difficulty::Random), grid, &species, 9);
    for cell in grid.cells() {
        board.receive_shot(cell).unwrap();
    }
    assert_eq!(ai.choose(board.record()), Err(GameError::NoCandidatesRemaining));
}

#[test]
fn test_ai_never_repeats_a_shot() {
    for difficulty in [Difficulty::Random, Difficulty::Parity, Difficulty::Smart] {
        let mut board = standard_board();
        let mut ai = TargetingAi::new(
            AiConfig::with_difficulty(difficulty),
            Grid::new(BOARD_SIZE).unwrap(),
            &SHIPS,
            11,
        );
        let mut shots = 0;
        while !board.is_defeated() {
            let pick = ai.choose(board.record()).unwrap();
            board.receive_shot(pick).unwrap();
            shots += 1;
            assert!(shots <= BOARD_SIZE * BOARD_SIZE);
        }
    }
}
