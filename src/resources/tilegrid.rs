//! The level's tile grid.
//!
//! A rectangular 2-D array of typed cells with a fixed cell size. The grid is
//! immutable for the lifetime of a level and is only ever *queried*; cell
//! lookup is total, returning [`CellKind::Empty`] for any out-of-range
//! coordinate instead of failing. "No tile contact" is a normal return value
//! here, never an error.

use bevy_ecs::prelude::Resource;

/// What occupies a single grid cell.
///
/// Platform cells are solid from above; their support anchor is the authored
/// top edge of the cell. Decoration cells render but never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    PlatformLeft,
    PlatformMid,
    PlatformRight,
    Decoration,
}

impl CellKind {
    /// Map the single-character cell codes used by level files.
    /// Unknown characters are treated as empty.
    pub fn from_char(c: char) -> Self {
        match c {
            'l' => CellKind::PlatformLeft,
            'm' => CellKind::PlatformMid,
            'r' => CellKind::PlatformRight,
            '2' => CellKind::Decoration,
            _ => CellKind::Empty,
        }
    }

    /// Whether an entity can stand on (or bump into) this cell.
    pub fn is_solid(&self) -> bool {
        matches!(
            self,
            CellKind::PlatformLeft | CellKind::PlatformMid | CellKind::PlatformRight
        )
    }
}

/// Immutable tile grid for the current level.
#[derive(Resource, Debug, Clone)]
pub struct TileGrid {
    cells: Vec<Vec<CellKind>>,
    tile_size: f32,
    cols: usize,
    rows: usize,
}

impl TileGrid {
    /// Build a grid from rows of cell characters.
    ///
    /// Rows are padded to the longest row so the grid is always rectangular.
    pub fn from_rows(rows: &[String], tile_size: f32) -> Self {
        let cols = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let cells: Vec<Vec<CellKind>> = rows
            .iter()
            .map(|row| {
                let mut parsed: Vec<CellKind> = row.chars().map(CellKind::from_char).collect();
                parsed.resize(cols, CellKind::Empty);
                parsed
            })
            .collect();
        let row_count = cells.len();
        Self {
            cells,
            tile_size,
            cols,
            rows: row_count,
        }
    }

    /// Cell at (col, row). Total: out-of-range queries return
    /// [`CellKind::Empty`] rather than failing.
    pub fn tile_at(&self, col: i32, row: i32) -> CellKind {
        if col < 0 || row < 0 {
            return CellKind::Empty;
        }
        self.cells
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .unwrap_or(CellKind::Empty)
    }

    /// The y coordinate a platform cell supports entities at: the authored
    /// top edge of the cell's row.
    pub fn support_anchor_y(&self, row: i32) -> f32 {
        row as f32 * self.tile_size
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn pixel_width(&self) -> f32 {
        self.cols as f32 * self.tile_size
    }

    pub fn pixel_height(&self) -> f32 {
        self.rows as f32 * self.tile_size
    }

    /// Grid cell containing a world-space point.
    pub fn cell_of(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (x / self.tile_size).floor() as i32,
            (y / self.tile_size).floor() as i32,
        )
    }
}
