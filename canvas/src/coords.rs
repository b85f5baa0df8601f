//! Base-pair to pixel mapping.
//!
//! A [`BpScale`] is built per frame from the genome length and the pixel span
//! available for drawing. It never divides by zero and never returns a
//! negative width: a non-positive genome length is treated as 1 and a
//! negative drawable width is treated as 0.

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

/// Linear map from base-pair coordinates to unscaled, unpanned pixel positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BpScale {
    length: f64,
    drawable_width: f64,
}

impl BpScale {
    /// Build a scale for `length` base pairs across `pixel_width` pixels.
    ///
    /// `padding` pixels are reserved on each side and excluded from the mapped span.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(length: i64, pixel_width: f64, padding: f64) -> Self {
        let length = if length <= 0 { 1.0 } else { length as f64 };
        let drawable_width = pixel_width - padding * 2.0;
        let drawable_width = if drawable_width.is_finite() { drawable_width.max(0.0) } else { 0.0 };
        Self { length, drawable_width }
    }

    /// Genome length used as the divisor (always at least 1).
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Pixel span the genome is mapped onto.
    #[must_use]
    pub fn drawable_width(&self) -> f64 {
        self.drawable_width
    }

    /// Pixel offset of base pair `bp` from the start of the drawable span.
    #[must_use]
    pub fn bp_to_x(&self, bp: f64) -> f64 {
        bp / self.length * self.drawable_width
    }

    /// Pixel width of the interval `[start, end]`, floored at `min_width`.
    ///
    /// The result is never negative, even for reversed intervals.
    #[must_use]
    pub fn span_to_width(&self, start: f64, end: f64, min_width: f64) -> f64 {
        let raw = (end - start) / self.length * self.drawable_width;
        raw.max(min_width).max(0.0)
    }
}
