use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::view_state::ViewState;
use crate::core::data::zoom_region::{ZoomRegion, ZoomRegionError};
use crate::core::util::pixel_to_plane::pixel_to_plane;

/// Turns a dragged pixel rectangle into the view that shows it across the canvas.
///
/// The new scale is the region's plane width over the canvas width, and the
/// new center is the plane coordinate of the region's midpoint. Aspect ratio
/// is not enforced here; callers constrain the drag beforehand.
pub fn zoom_to_state(
    region: ZoomRegion,
    state: &ViewState,
    canvas: CanvasSize,
) -> Result<ViewState, ZoomRegionError> {
    // precondition: a null drag never produces a new view
    if !(region.width() > 0.0 && region.height() > 0.0) {
        return Err(ZoomRegionError::Degenerate {
            width: region.width(),
            height: region.height(),
        });
    }

    let (mid_x, mid_y) = region.midpoint();
    let center = pixel_to_plane(mid_x, mid_y, state, canvas);
    let plane_width = region.width() * state.scale();
    let scale = plane_width / f64::from(canvas.width());

    state
        .with_center(center)
        .and_then(|next| next.with_scale(scale))
        .map_err(ZoomRegionError::ScaleOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::view_state::ViewStateError;

    fn canvas() -> CanvasSize {
        CanvasSize::new(800, 600).unwrap()
    }

    fn state() -> ViewState {
        ViewState::default()
            .with_center(Complex::new(-0.75, 0.1))
            .unwrap()
            .with_scale(0.004)
            .unwrap()
    }

    #[test]
    fn test_full_canvas_region_is_identity() {
        let region = ZoomRegion::new(0.0, 0.0, 800.0, 600.0).unwrap();
        let zoomed = zoom_to_state(region, &state(), canvas()).unwrap();

        assert!((zoomed.scale() - state().scale()).abs() < 1e-15);
        assert!((zoomed.center().real - state().center().real).abs() < 1e-12);
        assert!((zoomed.center().imag - state().center().imag).abs() < 1e-12);
    }

    #[test]
    fn test_half_width_region_halves_scale() {
        let region = ZoomRegion::new(200.0, 150.0, 600.0, 450.0).unwrap();
        let zoomed = zoom_to_state(region, &state(), canvas()).unwrap();

        assert!((zoomed.scale() - 0.002).abs() < 1e-15);
        assert!((zoomed.center().real - -0.75).abs() < 1e-12);
        assert!((zoomed.center().imag - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_off_centre_region_moves_center() {
        // top-left quadrant, midpoint at pixel (200, 150)
        let region = ZoomRegion::new(0.0, 0.0, 400.0, 300.0).unwrap();
        let zoomed = zoom_to_state(region, &state(), canvas()).unwrap();

        assert!((zoomed.center().real - (-0.75 - 200.0 * 0.004)).abs() < 1e-12);
        assert!((zoomed.center().imag - (0.1 + 150.0 * 0.004)).abs() < 1e-12);
    }

    #[test]
    fn test_other_parameters_are_preserved() {
        let region = ZoomRegion::new(10.0, 10.0, 90.0, 70.0).unwrap();
        let zoomed = zoom_to_state(region, &state(), canvas()).unwrap();

        assert_eq!(zoomed.max_iterations(), state().max_iterations());
        assert_eq!(zoomed.escape_radius(), state().escape_radius());
        assert_eq!(zoomed.mode(), state().mode());
        assert_eq!(zoomed.colour_mode(), state().colour_mode());
    }

    #[test]
    fn test_underflowing_scale_is_rejected() {
        let tiny = state().with_scale(f64::MIN_POSITIVE).unwrap();
        let region = ZoomRegion::new(0.0, 0.0, 1e-300, 1e-300).unwrap();

        assert_eq!(
            zoom_to_state(region, &tiny, canvas()),
            Err(ZoomRegionError::ScaleOutOfRange(ViewStateError::InvalidScale {
                scale: 0.0
            }))
        );
    }
}
