use mazepulse::{
    domain::{
        heading::Heading,
        maze::{Cell, Level, Maze},
        tile::Tile,
    },
    error::MazeError,
};
use pretty_assertions::assert_eq;

#[test]
fn test_builtin_level() {
    let level = Level::builtin().unwrap();
    assert_eq!(level.name, "Twelve Steps Down");
    assert_eq!(level.maze.width(), 12);
    assert_eq!(level.maze.height(), 12);
    assert_eq!(level.game.start, Cell::new(9, 5));
    assert_eq!(level.game.start_heading, Heading::West);
    assert_eq!(level.game.goal, Cell::new(1, 5));
    assert_eq!(level.maze.tile_at(Cell::new(5, 3)), Tile::Twister);
    assert_eq!(level.maze.tile_at(Cell::new(5, 8)), Tile::SecretWall);
}

#[test]
fn test_outside_the_grid_is_wall() {
    let maze = Maze::from_rows(&["999", "909", "999"]).unwrap();
    assert_eq!(maze.tile_at(Cell::new(3, 1)), Tile::Wall);
    assert_eq!(maze.tile_at(Cell::new(1, 40)), Tile::Wall);
    assert_eq!(maze.tile_near(Cell::new(0, 0), -1, 0), Tile::Wall);
    assert_eq!(maze.tile_near(Cell::new(1, 1), 0, 0), Tile::Floor);
}

#[test]
fn test_interior_skips_the_border() {
    let maze = Maze::from_rows(&["9999", "9009", "9009", "9999"]).unwrap();
    let cells: Vec<Cell> = maze.interior().collect();
    assert_eq!(
        cells,
        vec![Cell::new(1, 1), Cell::new(1, 2), Cell::new(2, 1), Cell::new(2, 2)]
    );
}

#[test]
fn test_grid_errors() {
    let empty: [&str; 0] = [];
    let cases: Vec<(Vec<&str>, MazeError)> = vec![
        (vec![""], MazeError::Empty),
        (vec!["999", "99", "999"], MazeError::Ragged { row: 1, expected: 3, found: 2 }),
        (vec!["999", "949", "999"], MazeError::UnknownTile { row: 1, col: 1, found: '4' }),
        (vec!["999", "9x9", "999"], MazeError::UnknownTile { row: 1, col: 1, found: 'x' }),
        (vec!["999", "909", "909"], MazeError::OpenBorder { row: 2, col: 1 }),
        (vec!["989", "909", "999"], MazeError::OpenBorder { row: 0, col: 1 }),
    ];

    assert_eq!(Maze::from_rows(&empty), Err(MazeError::Empty));
    for (rows, expected) in cases {
        assert_eq!(Maze::from_rows(&rows), Err(expected), "{rows:?}");
    }
}

#[test]
fn test_level_errors() {
    let grid = "9999\n9009\n9999\n";
    let cases = [
        (format!("* 1,2\n{grid}"), MazeError::MissingStart),
        (format!("@ 1,1 N\n{grid}"), MazeError::MissingGoal),
        (format!("@ 1,1 Q\n* 1,2\n{grid}"), MazeError::BadMetadata { line: 1 }),
        (format!("@ 1,1 N\n* one,two\n{grid}"), MazeError::BadMetadata { line: 2 }),
        (format!("@ 1,1 N\n* 7,7\n{grid}"), MazeError::OutOfBounds { row: 7, col: 7 }),
        (format!("@ 0,0 N\n* 1,2\n{grid}"), MazeError::NotOpen { row: 0, col: 0 }),
    ];

    for (text, expected) in cases {
        assert_eq!(Level::parse(&text).map(|_| ()), Err(expected), "{text}");
    }
}

#[test]
fn test_level_ignores_blank_lines_and_extra_comments() {
    let text = "# First\n\n# Second\n@ 1,1 E\n* 1,2\n\n9999\n9009\n9999\n";
    let level = Level::parse(text).unwrap();
    assert_eq!(level.name, "First");
    assert_eq!(level.game.start_heading, Heading::East);
}
