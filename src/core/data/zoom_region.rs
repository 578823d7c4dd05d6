use crate::core::data::view_state::ViewStateError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomRegionError {
    Degenerate { width: f64, height: f64 },
    /// The region is valid but the view it maps to is not, e.g. the scale underflows.
    ScaleOutOfRange(ViewStateError),
}

impl fmt::Display for ZoomRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degenerate { width, height } => {
                write!(f, "zoom region must have positive area: {}x{}", width, height)
            }
            Self::ScaleOutOfRange(err) => write!(f, "zoom leaves the representable range: {}", err),
        }
    }
}

impl Error for ZoomRegionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Degenerate { .. } => None,
            Self::ScaleOutOfRange(err) => Some(err),
        }
    }
}

/// A pixel-space rectangle selected by a drag, with `x0 < x1` and `y0 < y1`.
///
/// Produced once by the input side and consumed once by
/// [`zoom_to_state`](crate::core::util::zoom_to_state::zoom_to_state).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomRegion {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl ZoomRegion {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self, ZoomRegionError> {
        let width = x1 - x0;
        let height = y1 - y0;

        // written so NaN extents also fail
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(ZoomRegionError::Degenerate { width, height });
        }

        Ok(Self { x0, y0, x1, y1 })
    }

    /// Builds a region from any two opposite corners.
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Result<Self, ZoomRegionError> {
        Self::new(a.0.min(b.0), a.1.min(b.1), a.0.max(b.0), a.1.max(b.1))
    }

    #[must_use]
    pub fn x0(&self) -> f64 {
        self.x0
    }

    #[must_use]
    pub fn y0(&self) -> f64 {
        self.y0
    }

    #[must_use]
    pub fn x1(&self) -> f64 {
        self.x1
    }

    #[must_use]
    pub fn y1(&self) -> f64 {
        self.y1
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    #[must_use]
    pub fn midpoint(&self) -> (f64, f64) {
        ((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_region_new_valid() {
        let region = ZoomRegion::new(10.0, 20.0, 110.0, 70.0).unwrap();

        assert_eq!(region.width(), 100.0);
        assert_eq!(region.height(), 50.0);
        assert_eq!(region.midpoint(), (60.0, 45.0));
    }

    #[test]
    fn test_zoom_region_rejects_zero_area() {
        assert_eq!(
            ZoomRegion::new(5.0, 5.0, 5.0, 50.0),
            Err(ZoomRegionError::Degenerate {
                width: 0.0,
                height: 45.0
            })
        );
        assert_eq!(
            ZoomRegion::new(5.0, 5.0, 50.0, 5.0),
            Err(ZoomRegionError::Degenerate {
                width: 45.0,
                height: 0.0
            })
        );
    }

    #[test]
    fn test_zoom_region_rejects_inverted_corners() {
        assert!(ZoomRegion::new(50.0, 50.0, 10.0, 10.0).is_err());
    }

    #[test]
    fn test_zoom_region_rejects_nan() {
        assert!(ZoomRegion::new(f64::NAN, 0.0, 10.0, 10.0).is_err());
    }

    #[test]
    fn test_from_corners_normalises() {
        let region = ZoomRegion::from_corners((50.0, 10.0), (10.0, 40.0)).unwrap();

        assert_eq!(region, ZoomRegion::new(10.0, 10.0, 50.0, 40.0).unwrap());
    }

    #[test]
    fn test_scale_out_of_range_names_the_scale() {
        let err = ZoomRegionError::ScaleOutOfRange(ViewStateError::InvalidScale { scale: 0.0 });

        assert_eq!(
            err.to_string(),
            "zoom leaves the representable range: scale must be positive and finite: 0"
        );
        assert!(err.source().is_some());
    }
}
