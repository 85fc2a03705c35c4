// Library exports for the binaries and integration tests
pub mod batch;
pub mod config;
pub mod constants;
pub mod draw;
pub mod generate;
pub mod interactive;
pub mod png_output;
pub mod render;
pub mod resize;
pub mod sizes;
