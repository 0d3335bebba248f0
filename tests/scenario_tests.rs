//! Rule scenarios and state-law tests exercised through the public API.

use chronomachy::board::{
    Color, Direction, Era, GameState, Piece, ALL_ERAS, ERA_COUNT, INITIAL_SUPPLY,
};
use chronomachy::movegen::enumerate_all_moves;

fn piece(symbol: char, era: Era, x: i8, y: i8) -> Piece {
    let color = Color::from_symbol(symbol).expect("symbol in a pool");
    Piece { symbol, color, era, x, y }
}

#[test]
fn scenario_a_spatial_move_north() {
    let mut game = GameState::empty();
    game.spawn(piece('A', Era::Past, 3, 3));

    assert!(game.can_move('A', Direction::North));
    game.move_piece('A', Direction::North);

    assert_eq!(game.find_piece('A').unwrap().position(), (2, 3));
    assert_eq!(game.timeline.board(Era::Past).get(3, 3), None);
    assert_eq!(game.timeline.board(Era::Past).get(2, 3), Some('A'));
    assert!(game.is_consistent());
}

#[test]
fn scenario_b_squeeze_at_the_edge() {
    let mut game = GameState::empty();
    game.spawn(piece('1', Era::Present, 1, 0));
    game.spawn(piece('A', Era::Present, 0, 0));
    game.set_focus(Color::Black, Era::Present);

    let before = game.player(Color::White).pieces.len();
    game.move_piece('1', Direction::North);

    assert!(game.find_piece('A').is_none());
    assert_eq!(game.player(Color::White).pieces.len(), before - 1);
    assert_eq!(game.find_piece('1').unwrap().position(), (0, 0));
    assert_eq!(game.timeline.board(Era::Present).get(0, 0), Some('1'));
    assert!(game.is_consistent());
}

#[test]
fn scenario_c_paradox_removes_both_contacting_pieces() {
    let mut game = GameState::empty();
    game.spawn(piece('A', Era::Future, 3, 1));
    game.spawn(piece('1', Era::Future, 2, 1));
    game.spawn(piece('2', Era::Future, 1, 1));

    game.move_piece('A', Direction::North);

    assert!(game.find_piece('1').is_none());
    assert!(game.find_piece('2').is_none());
    assert_eq!(game.player(Color::Black).pieces.len(), 0);
    assert_eq!(game.find_piece('A').unwrap().position(), (2, 1));
    assert!(game.is_consistent());
}

#[test]
fn scenario_d_backward_travel_with_full_supply() {
    let mut game = GameState::empty();
    game.spawn(piece('A', Era::Present, 1, 2));
    assert_eq!(game.player(Color::White).supply, INITIAL_SUPPLY);
    let expected_clone = game.player(Color::White).pool[0];

    assert!(game.can_move('A', Direction::Backward));
    game.move_piece('A', Direction::Backward);

    let player = game.player(Color::White);
    assert_eq!(player.supply, INITIAL_SUPPLY - 1);
    assert_eq!(player.pieces.len(), 2);

    let traveler = game.find_piece('A').unwrap();
    assert_eq!(traveler.era, Era::Past);
    assert_eq!(traveler.position(), (1, 2));

    let clone = game.find_piece(expected_clone).unwrap();
    assert_eq!(clone.era, Era::Present);
    assert_eq!(clone.position(), (1, 2));
    assert_eq!(game.timeline.board(Era::Present).get(1, 2), Some(expected_clone));
    assert!(game.is_consistent());
}

#[test]
fn scenario_e_no_piece_in_focus_yields_focus_switches_only() {
    let mut game = GameState::empty();
    game.spawn(piece('A', Era::Present, 2, 2));
    game.spawn(piece('B', Era::Future, 1, 1));
    // White's focus defaults to the past, which holds nothing of white's.

    let pool = enumerate_all_moves(&game, Color::White);
    assert_eq!(pool.len(), ERA_COUNT - 1);
    for candidate in &pool {
        assert_eq!(candidate.piece, None);
        assert_eq!(candidate.first, None);
        assert_eq!(candidate.second, None);
        assert_ne!(candidate.focus, Era::Past);
    }
}

#[test]
fn piece_count_change_per_move_is_bounded() {
    // Squeeze: defender loses exactly one.
    let mut game = GameState::empty();
    game.spawn(piece('A', Era::Past, 1, 3));
    game.spawn(piece('1', Era::Past, 1, 2));
    game.move_piece('1', Direction::East);
    assert_eq!(game.player(Color::White).pieces.len(), 0);
    assert_eq!(game.player(Color::Black).pieces.len(), 1);

    // Paradox: one side loses exactly two.
    let mut game = GameState::empty();
    game.spawn(piece('A', Era::Past, 0, 0));
    game.spawn(piece('1', Era::Past, 0, 1));
    game.spawn(piece('2', Era::Past, 0, 2));
    game.move_piece('A', Direction::East);
    assert_eq!(game.player(Color::Black).pieces.len(), 0);
    assert_eq!(game.player(Color::White).pieces.len(), 1);

    // Backward travel: the traveler's side gains exactly one.
    let mut game = GameState::empty();
    game.spawn(piece('A', Era::Future, 2, 2));
    game.move_piece('A', Direction::Backward);
    assert_eq!(game.player(Color::White).pieces.len(), 2);

    // Plain step and forward travel: unchanged.
    let mut game = GameState::empty();
    game.spawn(piece('A', Era::Past, 2, 2));
    game.move_piece('A', Direction::North);
    game.move_piece('A', Direction::Forward);
    assert_eq!(game.player(Color::White).pieces.len(), 1);
}

#[test]
fn supply_decreases_only_on_backward_travel() {
    let mut game = GameState::empty();
    game.spawn(piece('A', Era::Future, 2, 2));
    let start = game.player(Color::White).supply;

    game.move_piece('A', Direction::North);
    game.move_piece('A', Direction::West);
    assert_eq!(game.player(Color::White).supply, start);

    game.move_piece('A', Direction::Backward);
    assert_eq!(game.player(Color::White).supply, start - 1);

    game.move_piece('A', Direction::Forward);
    assert_eq!(game.player(Color::White).supply, start - 1);
}

#[test]
fn supply_never_goes_negative_and_gates_backward_travel() {
    let mut game = GameState::empty();
    game.spawn(piece('A', Era::Future, 0, 3));
    game.player_mut(Color::White).supply = 1;

    assert!(game.can_move('A', Direction::Backward));
    game.move_piece('A', Direction::Backward);
    assert_eq!(game.player(Color::White).supply, 0);
    assert!(!game.can_move('A', Direction::Backward));
}

#[test]
fn win_condition_matches_distinct_era_count() {
    let mut game = GameState::empty();
    assert!(game.is_winning(Color::Black));

    game.spawn(piece('1', Era::Present, 0, 0));
    game.spawn(piece('2', Era::Present, 0, 1));
    game.spawn(piece('3', Era::Present, 0, 2));
    assert!(game.is_winning(Color::Black));

    game.spawn(piece('4', Era::Past, 0, 3));
    assert!(!game.is_winning(Color::Black));
}

#[test]
fn every_legal_single_move_preserves_consistency() {
    // From the standard start, apply each legal direction for each piece on
    // a fresh copy and verify the board/piece invariant afterwards.
    let game = GameState::new();
    for color in [Color::White, Color::Black] {
        for p in &game.player(color).pieces {
            for dir in [
                Direction::North,
                Direction::South,
                Direction::East,
                Direction::West,
                Direction::Forward,
                Direction::Backward,
            ] {
                if !game.can_move(p.symbol, dir) {
                    continue;
                }
                let mut sim = game.clone();
                sim.move_piece(p.symbol, dir);
                assert!(sim.is_consistent(), "{:?} broke consistency for {}", dir, p.symbol);
                for player in &sim.players {
                    for q in &player.pieces {
                        assert!((0..4).contains(&q.x) && (0..4).contains(&q.y));
                    }
                }
            }
        }
    }
}

#[test]
fn chain_push_depth_is_bounded_by_the_board() {
    // Three opposing pieces in a row: pushing the line squeezes the far one
    // off the edge and shifts the rest by one.
    let mut game = GameState::empty();
    game.spawn(piece('A', Era::Past, 3, 2));
    game.spawn(piece('1', Era::Past, 2, 2));
    game.spawn(piece('B', Era::Past, 1, 2));
    game.spawn(piece('2', Era::Past, 0, 2));

    game.move_piece('A', Direction::North);

    assert!(game.find_piece('2').is_none());
    assert_eq!(game.find_piece('B').unwrap().position(), (0, 2));
    assert_eq!(game.find_piece('1').unwrap().position(), (1, 2));
    assert_eq!(game.find_piece('A').unwrap().position(), (2, 2));
    assert!(game.is_consistent());
}

#[test]
fn all_eras_share_one_coordinate_system() {
    let mut game = GameState::empty();
    game.spawn(piece('A', Era::Past, 1, 3));
    game.move_piece('A', Direction::Forward);
    game.move_piece('A', Direction::Forward);
    let p = game.find_piece('A').unwrap();
    assert_eq!(p.era, Era::Future);
    assert_eq!(p.position(), (1, 3));
    for era in ALL_ERAS {
        let expected = if era == Era::Future { Some('A') } else { None };
        assert_eq!(game.timeline.board(era).get(1, 3), expected);
    }
}
