pub mod caption;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod io;
pub mod render;
pub mod session;
pub mod speech;
pub mod volume;
pub mod workflow;

pub use image;
