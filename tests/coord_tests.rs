use battleship_engine::{distance, is_valid, parse_position, BoardError, Coordinate};
use proptest::prelude::*;

#[test]
fn parses_letter_number() {
    let actual = parse_position("A1");
    assert_eq!(actual, Coordinate::new(0, 1));
    assert_eq!(parse_position("h8"), Coordinate::new(7, 8));
}

#[test]
fn rejects_invalid_positions() {
    assert_eq!(parse_position("H20"), None);
    assert_eq!(parse_position("Test123"), None);
    assert_eq!(parse_position(""), None);
    assert_eq!(parse_position("A"), None);
    assert_eq!(parse_position("I1"), None);
    assert_eq!(parse_position("A0"), None);
    assert_eq!(parse_position("A9"), None);
    assert_eq!(parse_position("1A"), None);
    assert!(parse_position("A1").is_some());
}

#[test]
fn typed_parse_errors() {
    assert_eq!("H20".parse::<Coordinate>(), Err(BoardError::InvalidInputFormat));
    assert_eq!("?1".parse::<Coordinate>(), Err(BoardError::InvalidInputFormat));
    assert_eq!("J1".parse::<Coordinate>(), Err(BoardError::OutOfBounds));
    assert_eq!("B9".parse::<Coordinate>(), Err(BoardError::OutOfBounds));
}

#[test]
fn bounds() {
    assert!(is_valid(0, 1));
    assert!(is_valid(7, 8));
    assert!(!is_valid(-1, 1));
    assert!(!is_valid(8, 1));
    assert!(!is_valid(0, 0));
    assert!(!is_valid(0, 9));
    assert!(Coordinate::new(8, 1).is_none());
}

#[test]
fn distance_along_shared_line() {
    let a1 = parse_position("A1").unwrap();
    let a5 = parse_position("A5").unwrap();
    let d1 = parse_position("D1").unwrap();
    let b2 = parse_position("B2").unwrap();
    assert_eq!(distance(&a1, &a5), Some(4));
    assert_eq!(distance(&d1, &a1), Some(3));
    assert_eq!(distance(&a1, &a1), Some(0));
    assert_eq!(distance(&a1, &b2), None);
}

#[test]
fn serializes_as_text() {
    let c = parse_position("C7").unwrap();
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, "\"C7\"");
    let back: Coordinate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
    assert!(serde_json::from_str::<Coordinate>("\"Z9\"").is_err());
}

proptest! {
    #[test]
    fn display_parses_back(col in 0u8..8, row in 1u8..=8) {
        let c = Coordinate::new(col, row).unwrap();
        prop_assert_eq!(parse_position(&c.to_string()), Some(c));
        prop_assert_eq!(parse_position(&c.to_string().to_lowercase()), Some(c));
    }

    #[test]
    fn parse_never_panics(s in "\\PC{0,6}") {
        if let Some(c) = parse_position(&s) {
            prop_assert_eq!(s.chars().count(), 2);
            prop_assert!(is_valid(c.column() as i32, c.row() as i32));
        }
    }
}
