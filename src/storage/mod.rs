pub mod params_file;
