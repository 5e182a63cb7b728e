use super::ShapeError;

/// Quarter-turn rotation state of an item.
///
/// Angles are measured in 90° steps; [`Rotation::next`] advances by one step
/// and four steps return to [`Rotation::Deg0`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u16", try_from = "u16"))]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Angle in degrees (0, 90, 180 or 270).
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Decodes an exact angle. Any other value yields `None`.
    pub const fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            270 => Some(Self::Deg270),
            _ => None,
        }
    }

    /// Rotation after one more 90° step.
    pub const fn next(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }

    /// True for 90° and 270°, where width and height trade places.
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// Bounding box of a `width x height` base shape after this rotation.
    pub const fn dimensions(self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_axes() {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Maps a base-shape coordinate into the rotated frame.
    ///
    /// `rotated_width`/`rotated_height` are the dimensions *after* rotation.
    /// The same mapping serves mask cells and linked-slot offsets; offsets
    /// outside the bounding box are carried through unchanged in form.
    pub const fn map_point(
        self,
        x: i32,
        y: i32,
        rotated_width: i32,
        rotated_height: i32,
    ) -> (i32, i32) {
        match self {
            Self::Deg0 => (x, y),
            Self::Deg90 => (y, rotated_height - 1 - x),
            Self::Deg180 => (rotated_width - 1 - x, rotated_height - 1 - y),
            Self::Deg270 => (rotated_width - 1 - y, x),
        }
    }

    /// Rotates a linked-slot offset declared against a `base_width x base_height`
    /// shape, returning the offset relative to the rotated bounding box.
    pub const fn rotate_point(
        self,
        x: i32,
        y: i32,
        base_width: u32,
        base_height: u32,
    ) -> (i32, i32) {
        let (cw, ch) = self.dimensions(base_width, base_height);
        self.map_point(x, y, cw as i32, ch as i32)
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = ShapeError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        Rotation::from_degrees(degrees).ok_or(ShapeError::InvalidRotation(degrees))
    }
}

impl core::fmt::Display for Rotation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
