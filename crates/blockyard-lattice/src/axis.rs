//! Per-axis quantization.

/// Round `value` to the nearest multiple of `cell_size`.
///
/// Computes `round(value / cell_size) * cell_size`, rounding halves away
/// from zero. Total over finite inputs with `cell_size > 0`, and
/// idempotent: `quantize(quantize(v, s), s) == quantize(v, s)`.
///
/// # Examples
///
/// ```
/// use blockyard_lattice::quantize;
///
/// assert_eq!(quantize(1.4, 1.0), 1.0);
/// assert_eq!(quantize(-0.6, 1.0), -1.0);
/// assert_eq!(quantize(0.74, 0.5), 0.5);
/// ```
pub fn quantize(value: f64, cell_size: f64) -> f64 {
    (value / cell_size).round() * cell_size
}

/// Lattice index of the line nearest to `value`.
///
/// Same rounding as [`quantize`]. Returns `None` when the index is not
/// representable as an `i32`, so distinct far-away values never collapse
/// onto one clamped cell.
pub fn quantize_index(value: f64, cell_size: f64) -> Option<i32> {
    let index = (value / cell_size).round();
    if index >= f64::from(i32::MIN) && index <= f64::from(i32::MAX) {
        Some(index as i32)
    } else {
        None
    }
}

/// How one axis of a world-space point becomes a lattice index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisPolicy {
    /// Snap the input coordinate to the nearest lattice line.
    Quantize,
    /// Ignore the input; every point lands on the lattice line nearest to
    /// this world-space elevation.
    Fixed(f64),
}

impl AxisPolicy {
    /// The single-layer build plane's vertical policy: pinned at 0.
    pub const GROUND: AxisPolicy = AxisPolicy::Fixed(0.0);

    /// Lattice index for `value` under this policy, `None` if it does not
    /// fit in an `i32`.
    pub fn index(&self, value: f64, cell_size: f64) -> Option<i32> {
        match *self {
            Self::Quantize => quantize_index(value, cell_size),
            Self::Fixed(elevation) => quantize_index(elevation, cell_size),
        }
    }

    /// `true` if the axis ignores its input.
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}
