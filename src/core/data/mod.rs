pub mod canvas_size;
pub mod colour;
pub mod complex;
pub mod escape_result;
pub mod parameter_set;
pub mod row_buffer;
pub mod view_state;
pub mod zoom_region;
