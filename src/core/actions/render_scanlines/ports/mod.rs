pub mod clock;
pub mod raster_surface;
pub mod render_events;
pub mod scheduler;
