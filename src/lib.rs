pub mod consts;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod keycodes;
pub mod layouts;
pub mod writer;
