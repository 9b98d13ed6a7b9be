//! Row-major 2D buffers with a border value for out-of-range reads.

use crate::color::Color;
use crate::error::MapError;

/// A 2D grid of values stored row by row.
///
/// Reads outside the grid return the border value; writes outside the grid
/// are ignored. Row 0 is the first row a builder produces, which is the
/// lowest row in model space.
#[derive(Clone, Debug, PartialEq)]
pub struct DataMap<T> {
    width: usize,
    height: usize,
    border_value: T,
    data: Vec<T>,
}

/// Scalar noise values, as produced by the builders.
pub type NoiseMap = DataMap<f32>;

/// RGBA pixels, as produced by the image renderers.
pub type Image = DataMap<Color>;

/// 8-bit quantised elevations.
pub type Heightmap8 = DataMap<u8>;

/// 16-bit quantised elevations.
pub type Heightmap16 = DataMap<u16>;

/// Elevations clamped to the renderer bounds, stored unquantised.
pub type Heightmap32 = DataMap<f32>;

impl<T: Copy + Default> DataMap<T> {
    /// An empty map with a default border value.
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            border_value: T::default(),
            data: Vec::new(),
        }
    }

    /// A map of the given size, filled with `T::default()`.
    pub fn with_size(width: usize, height: usize) -> Result<Self, MapError> {
        let mut map = Self::new();
        map.set_size(width, height)?;
        Ok(map)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `true` when the map has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn border_value(&self) -> T {
        self.border_value
    }

    pub fn set_border_value(&mut self, value: T) {
        self.border_value = value;
    }

    /// Resize the map. Existing contents are discarded and every cell reset to
    /// `T::default()`. Zero-sized maps are allowed.
    ///
    /// Fails with [`MapError::InvalidSize`], leaving the map untouched, when the
    /// cell buffer cannot be allocated.
    pub fn set_size(&mut self, width: usize, height: usize) -> Result<(), MapError> {
        let len = width
            .checked_mul(height)
            .ok_or(MapError::InvalidSize { width, height })?;
        self.data
            .try_reserve_exact(len.saturating_sub(self.data.len()))
            .map_err(|_| MapError::InvalidSize { width, height })?;
        self.data.clear();
        self.data.resize(len, T::default());
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn index(&self, x: isize, y: isize) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Value at `(x, y)`, or the border value when out of range.
    pub fn get(&self, x: isize, y: isize) -> T {
        self.index(x, y)
            .map_or(self.border_value, |index| self.data[index])
    }

    /// Store `value` at `(x, y)`. Out-of-range writes are ignored.
    pub fn set(&mut self, x: isize, y: isize, value: T) {
        if let Some(index) = self.index(x, y) {
            self.data[index] = value;
        }
    }

    /// Fill every cell with `value`.
    pub fn clear(&mut self, value: T) {
        self.data.fill(value);
    }

    /// One row of the map; empty when `y` is out of range.
    pub fn row(&self, y: usize) -> &[T] {
        if y >= self.height {
            return &[];
        }
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// The cells in row-major order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Copy + Default> Default for DataMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default + PartialOrd> DataMap<T> {
    /// Smallest and largest stored values, or `None` for an empty map.
    pub fn min_max(&self) -> Option<(T, T)> {
        let (&first, rest) = self.data.split_first()?;
        Some(rest.iter().fold((first, first), |(min, max), &v| {
            if v < min {
                (v, max)
            } else if v > max {
                (min, v)
            } else {
                (min, max)
            }
        }))
    }
}
