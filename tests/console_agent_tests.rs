use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    parse_coordinate, Agent, Board, BoardError, ConsoleAgent, Coordinate, InputError, OpponentView,
    Orientation, Vessel,
};

#[test]
fn test_parse_is_one_based() {
    assert_eq!(parse_coordinate("1 1"), Ok(Coordinate::new(0, 0)));
    assert_eq!(parse_coordinate("  6   2 \n"), Ok(Coordinate::new(5, 1)));
}

#[test]
fn test_parse_leaves_range_to_the_board() {
    assert_eq!(parse_coordinate("0 7"), Ok(Coordinate::new(-1, 6)));
}

#[test]
fn test_parse_rejects_malformed_input() {
    assert_eq!(parse_coordinate(""), Err(InputError::WrongCount(0)));
    assert_eq!(parse_coordinate("3"), Err(InputError::WrongCount(1)));
    assert_eq!(parse_coordinate("1 2 3"), Err(InputError::WrongCount(3)));
    assert_eq!(parse_coordinate("a 2"), Err(InputError::NotANumber("a".to_string())));
    assert_eq!(parse_coordinate("2 -1"), Err(InputError::NotANumber("-1".to_string())));
    assert_eq!(
        parse_coordinate("1 99999999999"),
        Err(InputError::NotANumber("99999999999".to_string()))
    );
}

#[test]
fn test_agent_reprompts_until_valid() {
    let input = Cursor::new("hello\n4\n2 5\n");
    let mut agent = ConsoleAgent::new(input, Vec::new());
    let board = Board::new();
    let mut rng = SmallRng::seed_from_u64(0);

    let target = agent.next_target(&mut rng, OpponentView::new(&board)).unwrap();
    assert_eq!(target, Coordinate::new(1, 4));

    let output = String::from_utf8(agent.into_output()).unwrap();
    assert_eq!(output.matches("Shot coordinates:").count(), 3);
    assert!(output.contains("Two coordinates separated by a space are required"));
}

#[test]
fn test_agent_fails_on_closed_input() {
    let mut agent = ConsoleAgent::new(Cursor::new("x y\n"), Vec::new());
    let board = Board::new();
    let mut rng = SmallRng::seed_from_u64(0);
    assert!(agent.next_target(&mut rng, OpponentView::new(&board)).is_err());
}

#[test]
fn test_agent_reports_rejections() {
    let mut agent = ConsoleAgent::new(Cursor::new(""), Vec::new());
    agent.report_invalid(&BoardError::AlreadyTargeted(Coordinate::new(1, 1)));
    let output = String::from_utf8(agent.into_output()).unwrap();
    assert!(output.contains("has already been fired upon"));
    assert!(output.contains("Try again"));
}

#[test]
fn test_rejection_names_the_typed_cell() {
    let mut board = Board::from_vessels([Vessel::new(
        1,
        Coordinate::new(0, 0),
        Orientation::Horizontal,
    )
    .unwrap()])
    .unwrap();
    board.shot(Coordinate::new(2, 3)).unwrap();

    let mut agent = ConsoleAgent::new(Cursor::new("3 4\n7 1\n"), Vec::new());
    let mut rng = SmallRng::seed_from_u64(0);

    let target = agent.next_target(&mut rng, OpponentView::new(&board)).unwrap();
    let err = board.shot(target).unwrap_err();
    agent.report_invalid(&err);

    let target = agent.next_target(&mut rng, OpponentView::new(&board)).unwrap();
    let err = board.shot(target).unwrap_err();
    agent.report_invalid(&err);

    let output = String::from_utf8(agent.into_output()).unwrap();
    assert!(output.contains("Sorry, cell 3 4 has already been fired upon. Try again."));
    assert!(output.contains("Sorry, shot at 7 1 is outside the battlefield. Try again."));
    assert!(!output.contains("(2, 3)"));
}
