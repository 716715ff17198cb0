//! The maze grid, the fixed game record, and the level text format.
//!
//! ## Level format
//!   ```text
//!   # Level name
//!   @ 9,5 W     start row,col and heading
//!   * 1,5       goal row,col
//!   999999      rows of tile digits
//!   ```
//!
//! Every border cell must be a blocking wall. The engine relies on that
//! and never walks off the grid; reads outside it still answer `Tile::Wall`.

use crate::domain::heading::Heading;
use crate::domain::tile::Tile;
use crate::error::MazeError;

const BUILTIN_LEVEL: &str = include_str!("../../levels/default.txt");

/// A grid position, row-major.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// Neighbour by a (row, col) delta. None when it would leave the
    /// non-negative quadrant.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Cell> {
        Some(Cell {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    pub fn step(self, heading: Heading) -> Option<Cell> {
        let (dr, dc) = heading.offset();
        self.offset(dr, dc)
    }

    pub fn manhattan(self, other: Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// Immutable tile grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Maze {
    /// Build from digit rows. Validates shape, codes and the wall border.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Maze, MazeError> {
        let height = rows.len();
        if height == 0 {
            return Err(MazeError::Empty);
        }
        let width = rows[0].as_ref().chars().count();
        if width == 0 {
            return Err(MazeError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::Ragged { row, expected: width, found });
            }
            for (col, ch) in line.chars().enumerate() {
                let tile = ch
                    .to_digit(10)
                    .and_then(|d| Tile::from_code(d as u8))
                    .ok_or(MazeError::UnknownTile { row, col, found: ch })?;
                let on_border = row == 0 || col == 0 || row == height - 1 || col == width - 1;
                if on_border && !tile.is_blocking() {
                    return Err(MazeError::OpenBorder { row, col });
                }
                tiles.push(tile);
            }
        }

        Ok(Maze { width, height, tiles })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at `cell`; anything outside the grid reads as a blocking wall.
    #[inline]
    pub fn tile_at(&self, cell: Cell) -> Tile {
        if cell.row < self.height && cell.col < self.width {
            self.tiles[cell.row * self.width + cell.col]
        } else {
            Tile::Wall
        }
    }

    /// Tile one step from `cell` by a (row, col) delta.
    pub fn tile_near(&self, cell: Cell, dr: isize, dc: isize) -> Tile {
        cell.offset(dr, dc).map_or(Tile::Wall, |c| self.tile_at(c))
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Cells inside the one-cell wall border.
    pub fn interior(&self) -> impl Iterator<Item = Cell> + '_ {
        let rows = 1..self.height.saturating_sub(1);
        rows.flat_map(move |row| (1..self.width.saturating_sub(1)).map(move |col| Cell::new(row, col)))
    }
}

/// Start and goal of one game.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Game {
    pub start: Cell,
    pub start_heading: Heading,
    pub goal: Cell,
}

/// A maze together with its game record.
#[derive(Clone, Debug)]
pub struct Level {
    pub name: String,
    pub maze: Maze,
    pub game: Game,
}

impl Level {
    /// The level compiled into the binary.
    pub fn builtin() -> Result<Level, MazeError> {
        Level::parse(BUILTIN_LEVEL)
    }

    pub fn parse(text: &str) -> Result<Level, MazeError> {
        let mut name = String::new();
        let mut start: Option<(Cell, Heading)> = None;
        let mut goal: Option<Cell> = None;
        let mut rows: Vec<&str> = Vec::new();

        for (line_no, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(rest) = line.strip_prefix('#') {
                if name.is_empty() {
                    name = rest.trim().to_string();
                }
            } else if let Some(rest) = line.strip_prefix('@') {
                let mut parts = rest.split_whitespace();
                let cell = parts.next().and_then(parse_cell);
                let heading = parts.next().and_then(Heading::from_letter);
                match (cell, heading) {
                    (Some(c), Some(h)) => start = Some((c, h)),
                    _ => return Err(MazeError::BadMetadata { line: line_no + 1 }),
                }
            } else if let Some(rest) = line.strip_prefix('*') {
                goal = Some(parse_cell(rest.trim()).ok_or(MazeError::BadMetadata { line: line_no + 1 })?);
            } else {
                rows.push(line);
            }
        }

        let maze = Maze::from_rows(&rows)?;
        let (start, start_heading) = start.ok_or(MazeError::MissingStart)?;
        let goal = goal.ok_or(MazeError::MissingGoal)?;

        for cell in [start, goal] {
            if !maze.contains(cell) {
                return Err(MazeError::OutOfBounds { row: cell.row, col: cell.col });
            }
            if maze.tile_at(cell).is_blocking() {
                return Err(MazeError::NotOpen { row: cell.row, col: cell.col });
            }
        }

        Ok(Level {
            name,
            maze,
            game: Game { start, start_heading, goal },
        })
    }
}

/// "row,col"
fn parse_cell(s: &str) -> Option<Cell> {
    let (r, c) = s.split_once(',')?;
    Some(Cell::new(r.trim().parse().ok()?, c.trim().parse().ok()?))
}
