use broadside::{BoardError, Cell, GameConfig, Grid, ShipType, Shot};

#[test]
fn test_get_set_row_major() {
    let mut grid = Grid::<Cell>::new(4);
    assert_eq!(grid.size(), 4);
    assert_eq!(grid.count(Cell::Ship), 0);

    grid.set(3, 1, Cell::Ship).unwrap();
    assert_eq!(grid.get(3, 1), Some(Cell::Ship));
    assert_eq!(grid.get(1, 3), Some(Cell::Empty));
    assert_eq!(grid.get(4, 0), None);

    // (3, 1) is the eighth cell in row-major order
    let (pos, value) = grid.iter().nth(7).unwrap();
    assert_eq!(pos, (3, 1));
    assert_eq!(value, Cell::Ship);
}

#[test]
fn test_set_out_of_bounds() {
    let mut grid = Grid::<Shot>::new(3);
    assert_eq!(
        grid.set(0, 3, Shot::Fired),
        Err(BoardError::OutOfBounds { x: 0, y: 3 })
    );
    assert_eq!(grid.count(Shot::Fired), 0);
}

#[test]
fn test_positions_and_clear_all() {
    let mut grid = Grid::<Shot>::new(3);
    grid.set(0, 2, Shot::Fired).unwrap();
    grid.set(2, 0, Shot::Fired).unwrap();
    let fired: Vec<_> = grid.positions(Shot::Fired).collect();
    assert_eq!(fired, vec![(2, 0), (0, 2)]);

    grid.clear_all();
    assert_eq!(grid.count(Shot::Fired), 0);
}

#[test]
fn test_config_validation() {
    assert_eq!(GameConfig::default().grid_size(), 10);
    assert_eq!(GameConfig::default().total_ship_cells(), 17);
    assert_eq!(GameConfig::with_grid_size(0), Err(BoardError::InvalidConfig));
    assert_eq!(GameConfig::with_grid_size(27), Err(BoardError::InvalidConfig));
    assert!(GameConfig::with_grid_size(26).is_ok());
    assert_eq!(
        GameConfig::new(6, vec![ShipType::new("Raft", 0)]),
        Err(BoardError::InvalidConfig)
    );
    let small = GameConfig::new(3, vec![ShipType::new("Dinghy", 3)]).unwrap();
    assert_eq!(small.total_ship_cells(), 3);
}
