//! Shape definitions and the precomputed rotation table
//!
//! Piece shapes are arbitrary rectangular boolean masks, not limited to
//! tetrominoes. Every mask is validated at construction, and all four
//! rotations of every loaded piece are computed once at load time; lookups
//! afterwards are plain table reads shared by reference.

use std::collections::HashMap;

use thiserror::Error;

use crate::types::{PieceId, Rotation};

/// Errors raised while validating piece definitions
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("shape mask has zero area")]
    EmptyMask,
    #[error("shape mask cells do not form a full height-by-width rectangle")]
    NonRectangular,
    #[error("shape mask has no set cells")]
    BlankMask,
    #[error("no piece definitions were provided")]
    EmptyPieceSet,
    #[error("duplicate piece id {0}")]
    DuplicatePieceId(PieceId),
}

/// Immutable rectangular boolean grid, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMask {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl ShapeMask {
    /// Build a mask from row-major cells; `cells.len()` must be `height * width`
    pub fn new(height: i32, width: i32, cells: Vec<bool>) -> Result<Self, ShapeError> {
        if height <= 0 || width <= 0 {
            return Err(ShapeError::EmptyMask);
        }
        if cells.len() != (height * width) as usize {
            return Err(ShapeError::NonRectangular);
        }
        if !cells.iter().any(|&set| set) {
            return Err(ShapeError::BlankMask);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse the textual mask format: one string per row, 'X' marks a set cell
    pub fn from_rows(rows: &[&str]) -> Result<Self, ShapeError> {
        if rows.is_empty() {
            return Err(ShapeError::EmptyMask);
        }
        let width = rows[0].chars().count();
        if rows.iter().any(|row| row.chars().count() != width) {
            return Err(ShapeError::NonRectangular);
        }
        let cells = rows
            .iter()
            .flat_map(|row| row.chars().map(|c| c == 'X'))
            .collect();
        Self::new(rows.len() as i32, width as i32, cells)
    }

    /// Width of the bounding box in cells
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the bounding box in cells
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the cell at (x, y) is set
    ///
    /// Coordinates must be inside the bounding box
    pub fn get(&self, x: i32, y: i32) -> bool {
        debug_assert!(x >= 0 && x < self.width && y >= 0 && y < self.height);
        self.cells[(y * self.width + x) as usize]
    }

    /// Iterate the (x, y) coordinates of all set cells, row-major
    pub fn set_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &set)| set)
            .map(move |(idx, _)| (idx as i32 % width, idx as i32 / width))
    }

    /// A rotated copy of this mask
    ///
    /// Each rotation is a direct closed-form remap of the source cells,
    /// not a chain of 90 degree steps:
    ///
    /// - 0 degrees: identity
    /// - 90 degrees (clockwise): (y, x) of an HxW source -> (x, H-1-y) of a WxH result
    /// - 180 degrees: (y, x) -> (H-1-y, W-1-x), same dimensions
    /// - 270 degrees (counter-clockwise): (y, x) -> (W-1-x, y) of a WxH result
    pub fn rotated(&self, rotation: Rotation) -> ShapeMask {
        let (h, w) = (self.height, self.width);
        match rotation {
            Rotation::Deg0 => self.clone(),
            Rotation::Deg90 => {
                let mut cells = vec![false; (h * w) as usize];
                for y in 0..h {
                    for x in 0..w {
                        // result is W rows of H columns
                        cells[(x * h + (h - 1 - y)) as usize] = self.get(x, y);
                    }
                }
                ShapeMask {
                    width: h,
                    height: w,
                    cells,
                }
            }
            Rotation::Deg180 => {
                let mut cells = vec![false; (h * w) as usize];
                for y in 0..h {
                    for x in 0..w {
                        cells[((h - 1 - y) * w + (w - 1 - x)) as usize] = self.get(x, y);
                    }
                }
                ShapeMask {
                    width: w,
                    height: h,
                    cells,
                }
            }
            Rotation::Deg270 => {
                let mut cells = vec![false; (h * w) as usize];
                for y in 0..h {
                    for x in 0..w {
                        cells[((w - 1 - x) * h + y) as usize] = self.get(x, y);
                    }
                }
                ShapeMask {
                    width: h,
                    height: w,
                    cells,
                }
            }
        }
    }
}

/// A loaded piece: stable id plus its canonical (rotation 0) mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceDef {
    pub id: PieceId,
    pub mask: ShapeMask,
}

/// Owns all piece definitions and the table of precomputed rotations
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeLibrary {
    pieces: Vec<PieceDef>,
    rotations: HashMap<PieceId, [ShapeMask; 4]>,
}

impl ShapeLibrary {
    /// Validate and load a piece set, precomputing every rotation
    ///
    /// Mask shape invariants are already enforced by the [`ShapeMask`]
    /// constructors; this checks the set itself: at least one piece, ids
    /// unique
    pub fn load(defs: impl IntoIterator<Item = (PieceId, ShapeMask)>) -> Result<Self, ShapeError> {
        let mut pieces = Vec::new();
        let mut rotations = HashMap::new();
        for (id, mask) in defs {
            if rotations.contains_key(&id) {
                return Err(ShapeError::DuplicatePieceId(id));
            }
            let table = [
                mask.rotated(Rotation::Deg0),
                mask.rotated(Rotation::Deg90),
                mask.rotated(Rotation::Deg180),
                mask.rotated(Rotation::Deg270),
            ];
            rotations.insert(id, table);
            pieces.push(PieceDef { id, mask });
        }
        if pieces.is_empty() {
            return Err(ShapeError::EmptyPieceSet);
        }
        Ok(Self { pieces, rotations })
    }

    /// Number of distinct pieces
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Piece ids in load order
    pub fn ids(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.pieces.iter().map(|def| def.id)
    }

    /// The canonical definition for `id`
    pub fn get(&self, id: PieceId) -> Option<&PieceDef> {
        self.pieces.iter().find(|def| def.id == id)
    }

    /// Precomputed mask for (id, rotation)
    ///
    /// `id` must be loaded; asking for an unregistered id is a contract
    /// violation and panics
    pub fn rotated(&self, id: PieceId, rotation: Rotation) -> &ShapeMask {
        let table = self
            .rotations
            .get(&id)
            .unwrap_or_else(|| panic!("piece id {id} is not loaded"));
        &table[rotation.index()]
    }
}

/// The classic seven-piece set in the textual mask format
///
/// Ids are assigned 1..=7 in I, O, T, S, Z, J, L order
pub fn standard_pieces() -> Vec<(PieceId, ShapeMask)> {
    let rows: [&[&str]; 7] = [
        &["XXXX"],
        &["XX", "XX"],
        &[".X.", "XXX"],
        &[".XX", "XX."],
        &["XX.", ".XX"],
        &["X..", "XXX"],
        &["..X", "XXX"],
    ];
    rows.iter()
        .enumerate()
        .map(|(i, def)| {
            let mask = ShapeMask::from_rows(def).expect("built-in piece masks are valid");
            (i as PieceId + 1, mask)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(rows: &[&str]) -> ShapeMask {
        ShapeMask::from_rows(rows).unwrap()
    }

    #[test]
    fn test_from_rows_dimensions_and_cells() {
        let m = mask(&["X..", "XXX"]);
        assert_eq!(m.width(), 3);
        assert_eq!(m.height(), 2);
        assert!(m.get(0, 0));
        assert!(!m.get(1, 0));
        assert!(m.get(2, 1));
        assert_eq!(m.set_cells().collect::<Vec<_>>(), vec![(0, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_mask_validation_errors() {
        assert_eq!(ShapeMask::from_rows(&[]), Err(ShapeError::EmptyMask));
        assert_eq!(ShapeMask::from_rows(&["", ""]), Err(ShapeError::EmptyMask));
        assert_eq!(
            ShapeMask::from_rows(&["XX", "X"]),
            Err(ShapeError::NonRectangular)
        );
        assert_eq!(
            ShapeMask::from_rows(&["..", ".."]),
            Err(ShapeError::BlankMask)
        );
        assert_eq!(
            ShapeMask::new(2, 2, vec![true; 3]),
            Err(ShapeError::NonRectangular)
        );
        assert_eq!(ShapeMask::new(0, 2, vec![]), Err(ShapeError::EmptyMask));
    }

    #[test]
    fn test_rotate_90_clockwise_exact() {
        // X..      XX
        // XXX  ->  X.
        //          X.
        let m = mask(&["X..", "XXX"]);
        assert_eq!(m.rotated(Rotation::Deg90), mask(&["XX", "X.", "X."]));
    }

    #[test]
    fn test_rotate_180_exact() {
        let m = mask(&["X..", "XXX"]);
        assert_eq!(m.rotated(Rotation::Deg180), mask(&["XXX", "..X"]));
    }

    #[test]
    fn test_rotate_270_counter_clockwise_exact() {
        let m = mask(&["X..", "XXX"]);
        assert_eq!(m.rotated(Rotation::Deg270), mask(&[".X", ".X", "XX"]));
    }

    #[test]
    fn test_rotate_0_is_identity() {
        let m = mask(&[".XX", "XX."]);
        assert_eq!(m.rotated(Rotation::Deg0), m);
    }

    #[test]
    fn test_four_quarter_turns_return_to_start() {
        for (_, m) in standard_pieces() {
            let back = m
                .rotated(Rotation::Deg90)
                .rotated(Rotation::Deg90)
                .rotated(Rotation::Deg90)
                .rotated(Rotation::Deg90);
            assert_eq!(back, m);
        }
    }

    #[test]
    fn test_two_quarter_turns_equal_half_turn() {
        for (_, m) in standard_pieces() {
            assert_eq!(
                m.rotated(Rotation::Deg90).rotated(Rotation::Deg90),
                m.rotated(Rotation::Deg180)
            );
        }
    }

    #[test]
    fn test_three_quarter_turns_equal_270() {
        for (_, m) in standard_pieces() {
            assert_eq!(
                m.rotated(Rotation::Deg90)
                    .rotated(Rotation::Deg90)
                    .rotated(Rotation::Deg90),
                m.rotated(Rotation::Deg270)
            );
        }
    }

    #[test]
    fn test_library_load_and_lookup() {
        let library = ShapeLibrary::load(standard_pieces()).unwrap();
        assert_eq!(library.len(), 7);
        assert_eq!(library.ids().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);

        let def = library.get(1).unwrap();
        assert_eq!(def.mask, mask(&["XXXX"]));
        for rotation in Rotation::ALL {
            assert_eq!(library.rotated(1, rotation), &def.mask.rotated(rotation));
        }
    }

    #[test]
    fn test_library_rejects_empty_set() {
        assert_eq!(ShapeLibrary::load([]), Err(ShapeError::EmptyPieceSet));
    }

    #[test]
    fn test_library_rejects_duplicate_id() {
        let m = mask(&["X"]);
        assert_eq!(
            ShapeLibrary::load([(3, m.clone()), (3, m)]),
            Err(ShapeError::DuplicatePieceId(3))
        );
    }

    #[test]
    #[should_panic(expected = "not loaded")]
    fn test_library_unknown_id_is_a_contract_violation() {
        let library = ShapeLibrary::load(standard_pieces()).unwrap();
        library.rotated(99, Rotation::Deg0);
    }
}
