//! Shared board helpers for solutions working on character grids.

use nalgebra::{Point2, Vector2};

/// A direction to an adjacent cell, including diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

/// All eight directions surrounding a cell, clockwise from up.
pub const ADJACENT_DIRECTIONS: [Direction; 8] = [
    Direction::Up,
    Direction::UpRight,
    Direction::Right,
    Direction::DownRight,
    Direction::Down,
    Direction::DownLeft,
    Direction::Left,
    Direction::UpLeft,
];

impl Direction {
    /// Create a [`Vector2`] for an offset reflecting the direction.
    ///
    /// The positive y axis points down, matching how input lines are stacked.
    pub fn offset(self) -> Vector2<i32> {
        match self {
            Self::Up => Vector2::new(0, -1),
            Self::UpRight => Vector2::new(1, -1),
            Self::Right => Vector2::new(1, 0),
            Self::DownRight => Vector2::new(1, 1),
            Self::Down => Vector2::new(0, 1),
            Self::DownLeft => Vector2::new(-1, 1),
            Self::Left => Vector2::new(-1, 0),
            Self::UpLeft => Vector2::new(-1, -1),
        }
    }
}

/// A row-major board of cells addressed by [`Point2`] coordinates, where y selects the row.
///
/// Rows can be ragged; cells outside any row are treated as missing.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
}

impl<T> Grid<T> {
    pub fn new(rows: Vec<Vec<T>>) -> Self {
        Self { rows }
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Get a reference to the cell at the coordinates, or `None` if out of bounds.
    pub fn get(&self, coords: Point2<i32>) -> Option<&T> {
        let y = usize::try_from(coords.y).ok()?;
        let x = usize::try_from(coords.x).ok()?;
        self.rows.get(y)?.get(x)
    }

    /// Set the cell at the coordinates, ignoring coordinates out of bounds.
    pub fn set(&mut self, coords: Point2<i32>, value: T) {
        let (Ok(y), Ok(x)) = (usize::try_from(coords.y), usize::try_from(coords.x)) else {
            return;
        };
        if let Some(cell) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = value;
        }
    }

    /// Iterate over all cells with their coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Point2<i32>, &T)> {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().map(move |(x, cell)| {
                #[expect(
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    reason = "puzzle boards stay far below i32 dimensions"
                )]
                let coords = Point2::new(x as i32, y as i32);
                (coords, cell)
            })
        })
    }
}

impl<T: Copy + Default> Grid<T> {
    /// Get the value at the coordinates, or the default value if out of bounds.
    pub fn value_at(&self, coords: Point2<i32>) -> T {
        self.get(coords).copied().unwrap_or_default()
    }
}

impl<T: PartialEq> Grid<T> {
    /// Find the coordinates of the first cell holding the needle, scanning row by row.
    pub fn find(&self, needle: &T) -> Option<Point2<i32>> {
        self.cells()
            .find_map(|(coords, cell)| (cell == needle).then_some(coords))
    }
}

impl Grid<char> {
    /// Build a character grid from input lines.
    pub fn from_lines(input: &str) -> Self {
        Self::new(input.lines().map(|line| line.chars().collect()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_at_defaults_out_of_bounds() {
        let grid = Grid::from_lines(".@\n@.\n");
        assert_eq!(grid.value_at(Point2::new(1, 0)), '@');
        assert_eq!(grid.value_at(Point2::new(-1, 0)), '\0');
        assert_eq!(grid.value_at(Point2::new(0, 2)), '\0');
    }

    #[test]
    fn find_locates_first_match() {
        let grid = Grid::from_lines("...\n.S.\n");
        assert_eq!(grid.find(&'S'), Some(Point2::new(1, 1)));
        assert_eq!(grid.find(&'X'), None);
    }

    #[test]
    fn offsets_cover_all_neighbors() {
        let center = Point2::new(5, 5);
        let mut neighbors: Vec<_> = ADJACENT_DIRECTIONS
            .iter()
            .map(|direction| center + direction.offset())
            .collect();
        neighbors.sort_by_key(|p| (p.y, p.x));
        neighbors.dedup();
        assert_eq!(neighbors.len(), 8);
    }
}
