use battleship_engine::{BitBoard, Coordinate, Grid};

fn c(s: &str) -> Coordinate {
    s.parse().unwrap()
}

#[test]
fn test_indices_ascending() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());
    assert_eq!(BitBoard::<u16, 4>::CELLS, 16);
    bb |= !BitBoard::<u16, 4>::new();
    assert!(bb.is_full());
    assert_eq!(bb.indices().count(), 16);

    let grid: Grid = [c("C1"), c("A1"), c("A2")].into_iter().collect();
    assert_eq!(grid.indices().collect::<Vec<_>>(), vec![0, 2, 8]);
}

#[test]
fn test_intersects() {
    let carrier: Grid = ["A1", "A2", "A3", "A4", "A5"].iter().map(|s| c(s)).collect();
    let crossing: Grid = ["A3", "B3", "C3"].iter().map(|s| c(s)).collect();
    let beside: Grid = ["B1", "B2", "B3"].iter().map(|s| c(s)).collect();
    assert!(carrier.intersects(&crossing));
    assert!(crossing.intersects(&beside));
    assert!(!carrier.intersects(&beside));
    assert!(!carrier.intersects(&Grid::new()));
}

#[test]
fn test_coordinate_insert_and_iter() {
    let mut grid = Grid::new();
    assert!(grid.insert(c("B3")));
    assert!(!grid.insert(c("B3")));
    assert!(grid.insert(c("A1")));
    assert!(grid.contains(c("B3")));
    assert!(!grid.contains(c("C3")));
    assert_eq!(grid.coords().collect::<Vec<_>>(), vec![c("A1"), c("B3")]);
    assert_eq!(grid.free_coords().count(), 62);
}

#[test]
fn test_full_board_and_complement() {
    let full: Grid = Coordinate::all().collect();
    assert!(full.is_full());
    assert_eq!(full.count_ones(), 64);
    assert!((!full).is_empty());

    let one: Grid = [c("H8")].into_iter().collect();
    assert!(one.intersects(&full));
    assert_eq!((!one).count_ones(), 63);
    let mut merged = one;
    merged |= !one;
    assert_eq!(merged, full);
}
