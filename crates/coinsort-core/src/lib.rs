pub mod classify;
pub mod consts;
pub mod detection;
pub mod edges;
pub mod error;
pub mod frame;
pub mod io;
pub mod pipeline;
pub mod quality;
pub mod render;
pub mod sampling;
