pub mod params_io;
