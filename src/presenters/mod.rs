pub mod file;
pub mod frame;
