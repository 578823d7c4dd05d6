pub mod pixel_to_plane;
pub mod zoom_to_state;
