pub mod capture;
pub mod color;
pub mod consts;
pub mod error;
pub mod filters;
pub mod frame;
pub mod pipeline;
pub mod quality;
