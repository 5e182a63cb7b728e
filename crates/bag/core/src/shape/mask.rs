use super::{Rotation, ShapeError};

/// Boolean occupancy mask of an item's bounding box.
///
/// Cells are stored row-major (`index = y * width + x`); `true` marks a solid
/// cell that claims a grid slot when the item is placed.
///
/// Deserialization goes through [`ShapeMask::new`], so a decoded mask always
/// has `width * height` cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawShapeMask"))]
pub struct ShapeMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawShapeMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawShapeMask> for ShapeMask {
    type Error = ShapeError;

    fn try_from(raw: RawShapeMask) -> Result<Self, Self::Error> {
        ShapeMask::new(raw.width, raw.height, raw.cells)
    }
}

impl ShapeMask {
    /// Builds a mask from a row-major cell buffer.
    pub fn new(width: u32, height: u32, cells: Vec<bool>) -> Result<Self, ShapeError> {
        if width == 0 || height == 0 {
            return Err(ShapeError::Empty { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if cells.len() != expected {
            return Err(ShapeError::CellCountMismatch {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Solid rectangle.
    pub fn filled(width: u32, height: u32) -> Result<Self, ShapeError> {
        Self::new(width, height, vec![true; (width as usize) * (height as usize)])
    }

    /// Parses rows such as `["##", "#."]`: `#` is solid, `.` is empty.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().map(|row| row.as_ref().chars().count()).unwrap_or(0);

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != width {
                return Err(ShapeError::RaggedRow {
                    row: y,
                    expected: width,
                    actual: len,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                match glyph {
                    '#' => cells.push(true),
                    '.' => cells.push(false),
                    glyph => return Err(ShapeError::InvalidGlyph { glyph, x, y }),
                }
            }
        }

        Self::new(width as u32, height as u32, cells)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns whether `(x, y)` is solid. Coordinates outside the mask are empty.
    #[inline]
    pub fn is_solid(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[(y * self.width + x) as usize]
    }

    /// Iterates the `(x, y)` coordinates of every solid cell, row by row.
    pub fn solid_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, solid)| **solid)
            .map(move |(index, _)| (index as u32 % width, index as u32 / width))
    }

    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|solid| **solid).count()
    }

    /// Returns the mask rotated by `rotation`.
    ///
    /// Quarter turns swap width and height. Every solid base cell maps to
    /// exactly one result cell; all other result cells are empty.
    pub fn rotated(&self, rotation: Rotation) -> ShapeMask {
        if rotation == Rotation::Deg0 {
            return self.clone();
        }

        let (width, height) = rotation.dimensions(self.width, self.height);
        let mut cells = vec![false; (width as usize) * (height as usize)];
        for (x, y) in self.solid_cells() {
            let (rx, ry) = rotation.map_point(x as i32, y as i32, width as i32, height as i32);
            cells[(ry as u32 * width + rx as u32) as usize] = true;
        }

        ShapeMask {
            width,
            height,
            cells,
        }
    }

    /// Renders the mask back into `#`/`.` rows.
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| if self.is_solid(x, y) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> ShapeMask {
        ShapeMask::from_rows(&["#.", "#.", "##"]).unwrap()
    }

    #[test]
    fn parses_rows_and_rejects_bad_input() {
        let mask = l_shape();
        assert_eq!((mask.width(), mask.height()), (2, 3));
        assert_eq!(mask.solid_count(), 4);
        assert!(mask.is_solid(1, 2));
        assert!(!mask.is_solid(1, 0));
        assert!(!mask.is_solid(5, 5));

        assert_eq!(
            ShapeMask::from_rows(&["##", "#"]),
            Err(ShapeError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
        assert!(matches!(
            ShapeMask::from_rows(&["#x"]),
            Err(ShapeError::InvalidGlyph { glyph: 'x', .. })
        ));
        let empty: [&str; 0] = [];
        assert!(matches!(
            ShapeMask::from_rows(&empty),
            Err(ShapeError::Empty { .. })
        ));
        assert!(matches!(
            ShapeMask::new(2, 2, vec![true; 3]),
            Err(ShapeError::CellCountMismatch { expected: 4, .. })
        ));
    }

    #[test]
    fn quarter_turns_match_reference_layouts() {
        let mask = l_shape();
        assert_eq!(mask.rotated(Rotation::Deg0).to_rows(), vec!["#.", "#.", "##"]);
        // (x, y) -> (y, H' - 1 - x)
        assert_eq!(mask.rotated(Rotation::Deg90).to_rows(), vec!["..#", "###"]);
        // (x, y) -> (W' - 1 - x, H' - 1 - y)
        assert_eq!(mask.rotated(Rotation::Deg180).to_rows(), vec!["##", ".#", ".#"]);
        // (x, y) -> (W' - 1 - y, x)
        assert_eq!(mask.rotated(Rotation::Deg270).to_rows(), vec!["###", "#.."]);
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        let mask = ShapeMask::from_rows(&["##.", ".##"]).unwrap();
        let spun = mask
            .rotated(Rotation::Deg90)
            .rotated(Rotation::Deg90)
            .rotated(Rotation::Deg90)
            .rotated(Rotation::Deg90);
        assert_eq!(spun, mask);
    }

    #[test]
    fn composed_quarter_turns_match_direct_rotation() {
        let mask = l_shape();
        let twice = mask.rotated(Rotation::Deg90).rotated(Rotation::Deg90);
        assert_eq!(twice, mask.rotated(Rotation::Deg180));
        let thrice = twice.rotated(Rotation::Deg90);
        assert_eq!(thrice, mask.rotated(Rotation::Deg270));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_rejects_mismatched_cells() {
        let json = serde_json::to_string(&l_shape()).unwrap();
        assert_eq!(serde_json::from_str::<ShapeMask>(&json).unwrap(), l_shape());

        let short = r#"{"width":2,"height":2,"cells":[true,false,true]}"#;
        let err = serde_json::from_str::<ShapeMask>(short).unwrap_err();
        assert!(err.to_string().contains("expects 4 cells"), "{err}");
        assert!(serde_json::from_str::<ShapeMask>(r#"{"width":0,"height":3,"cells":[]}"#).is_err());
    }
}
