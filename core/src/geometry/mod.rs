use nalgebra as na;

pub type Point3 = na::Point3<f64>;
pub type Point2 = na::Point2<f64>;
pub type Vector2 = na::Vector2<f64>;

pub const EPSILON: f64 = 1e-6;

pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() < EPSILON
    }
}

impl ApproxEq for Point2 {
    fn approx_eq(&self, other: &Self) -> bool {
        na::distance_squared(self, other) < EPSILON * EPSILON
    }
}

impl ApproxEq for Point3 {
    fn approx_eq(&self, other: &Self) -> bool {
        na::distance_squared(self, other) < EPSILON * EPSILON
    }
}

pub mod intersection;
pub use intersection::*;

/// Drawing-space point with z defaulted to 0.
///
/// Labels live on the XY plane of the drawing; hosts that carry a real
/// elevation build the `Point3` themselves.
pub fn point_xy(x: f64, y: f64) -> Point3 {
    Point3::new(x, y, 0.0)
}

/// Project a drawing-space point onto the 2D plane the placement solver
/// works in. The z-coordinate is dropped, never compared.
pub fn anchor_xy(p: &Point3) -> Point2 {
    Point2::new(p.x, p.y)
}
