pub mod clahe;
pub mod gamma;
