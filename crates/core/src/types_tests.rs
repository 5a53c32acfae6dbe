use super::*;

#[test]
fn square_construction_bounds() {
    assert!(Square::new(0, 0).is_some());
    assert!(Square::new(7, 7).is_some());
    assert!(Square::new(-1, 0).is_none());
    assert!(Square::new(0, 8).is_none());
    assert!(Square::new(8, 3).is_none());
}

#[test]
fn square_coordinates_round_trip() {
    for sq in Square::all() {
        assert_eq!(Square::new(sq.file(), sq.rank()), Some(sq));
        let parsed: Square = sq.to_string().parse().unwrap();
        assert_eq!(parsed, sq);
    }
}

#[test]
fn square_display() {
    assert_eq!(Square::new(0, 0).unwrap().to_string(), "a1");
    assert_eq!(Square::new(4, 3).unwrap().to_string(), "e4");
    assert_eq!(Square::new(7, 7).unwrap().to_string(), "h8");
}

#[test]
fn square_parse_rejects_garbage() {
    assert!("".parse::<Square>().is_err());
    assert!("e9".parse::<Square>().is_err());
    assert!("i4".parse::<Square>().is_err());
    assert!("e44".parse::<Square>().is_err());
}

#[test]
fn square_offset_stays_in_bounds() {
    let a1 = Square::new(0, 0).unwrap();
    assert_eq!(a1.offset(1, 1), Square::new(1, 1));
    assert_eq!(a1.offset(-1, 0), None);
    assert_eq!(a1.offset(0, -1), None);
}

#[test]
fn move_display_coordinate_notation() {
    let e2 = Square::new(4, 1).unwrap();
    let e4 = Square::new(4, 3).unwrap();
    assert_eq!(Move::new(e2, e4).to_string(), "e2e4");

    let e7 = Square::new(4, 6).unwrap();
    let e8 = Square::new(4, 7).unwrap();
    assert_eq!(
        Move::promoting(e7, e8, PieceKind::Queen).to_string(),
        "e7e8q"
    );
}

#[test]
fn dark_and_light_squares() {
    assert!(Square::new(0, 0).unwrap().is_dark()); // a1
    assert!(!Square::new(7, 0).unwrap().is_dark()); // h1
    assert!(Square::new(7, 7).unwrap().is_dark()); // h8
    assert!(!Square::new(3, 4).unwrap().is_dark()); // d5 is light
}
