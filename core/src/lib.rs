pub mod geometry;
pub mod host;
pub mod label;
pub mod placement;

pub fn version() -> &'static str {
    "0.1.0"
}
