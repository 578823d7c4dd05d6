mod presenters;
mod controllers;
mod core;
mod input;
mod storage;

pub use crate::controllers::cli::render_to_file::CliRenderController;
pub use crate::controllers::interactive::{TaskQueue, ViewerController};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::cancellation::{
    CancelToken, Cancelled, GenerationCounter, GenerationToken,
};
pub use crate::core::actions::render_row::ports::colour_map::ColourMap;
pub use crate::core::actions::render_row::render_row::render_row;
pub use crate::core::actions::render_scanlines::ports::clock::{Clock, SystemClock};
pub use crate::core::actions::render_scanlines::ports::raster_surface::RasterSurface;
pub use crate::core::actions::render_scanlines::ports::render_events::{
    RenderEvent, RenderEventPort, RenderReport,
};
pub use crate::core::actions::render_scanlines::ports::scheduler::{Continuation, Scheduler};
pub use crate::core::actions::render_scanlines::scanline_renderer::{
    DEFAULT_THROTTLE, RenderStatus, ScanlineRenderer,
};
pub use crate::core::colour_mapping::factory::{ViewColourMap, colourise};
pub use crate::core::colour_mapping::flat::{FlatColourMap, colourise_flat};
pub use crate::core::colour_mapping::kinds::ColourMode;
pub use crate::core::colour_mapping::smooth::smooth_iteration_count;
pub use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_result::EscapeResult;
pub use crate::core::data::parameter_set::{
    ParamValue, ParameterSet, from_parameter_set, has_scale, parse_query_string,
    to_parameter_set, to_query_string,
};
pub use crate::core::data::row_buffer::{BYTES_PER_PIXEL, RowBuffer};
pub use crate::core::data::view_state::{ViewState, ViewStateError};
pub use crate::core::data::zoom_region::{ZoomRegion, ZoomRegionError};
pub use crate::core::fractals::algorithm::iterate;
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::core::util::pixel_to_plane::pixel_to_plane;
pub use crate::core::util::zoom_to_state::zoom_to_state;
#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui;
pub use crate::input::drag_box::DragBox;
pub use crate::input::pointer::{PointerEvent, PointerSample};
pub use crate::input::view_command::ViewCommand;
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::presenters::frame::frame_surface::FrameSurface;
pub use crate::storage::params_file::{ParamsFileError, read_parameter_set, write_parameter_set};
