//! Domain types: merchant configuration, transaction requests and the
//! gateway parameter map.

pub mod config;
pub mod fields;
pub mod params;
pub mod ports;
pub mod request;
