//! 2D intersection predicates for label polygons.
//!
//! Everything here works on x and y only; the z-coordinate that label points
//! carry for the host's benefit never participates in a comparison. All
//! predicates use strict inequalities, so exactly-collinear segments,
//! touching endpoints and on-boundary points resolve to "no" (or to whatever
//! the floating-point rounding says for boundary ray casts). That tie-break
//! under-reports edge-touching overlaps and is part of the contract, not a
//! bug to fix.

use super::Point3;

/// Strict counter-clockwise orientation of the triple (a, b, c).
///
/// Collinear triples are not counter-clockwise.
fn ccw(a: Point3, b: Point3, c: Point3) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// True iff the open segments (a1, a2) and (b1, b2) cross.
///
/// Orientation test: the segments cross iff the endpoints of each straddle
/// the other. Collinear overlap and shared endpoints count as
/// non-intersecting.
pub fn segments_intersect(a1: Point3, a2: Point3, b1: Point3, b2: Point3) -> bool {
    ccw(a1, b1, b2) != ccw(a2, b1, b2) && ccw(a1, a2, b1) != ccw(a1, a2, b2)
}

/// Ray-casting point-in-polygon parity test.
///
/// Casts a horizontal ray from `point` toward +x and toggles on every edge
/// whose endpoints straddle `point.y` and whose x-intercept lies right of the
/// point. Points exactly on the boundary get whatever classification the
/// rounding produces. Fewer than 3 vertices is never "inside".
pub fn point_in_polygon(point: Point3, polygon: &[Point3]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;

    for i in 0..polygon.len() {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// True iff the two polygons share area.
///
/// Checks every edge pair with [`segments_intersect`], then falls back to a
/// containment probe of each polygon's first vertex in the other. The
/// single-vertex probe detects full nesting only when the nesting is
/// consistent for all vertices — true for the convex label quadrilaterals
/// this targets, not for general concave input.
pub fn polygons_overlap(poly1: &[Point3], poly2: &[Point3]) -> bool {
    if poly1.is_empty() || poly2.is_empty() {
        return false;
    }

    let (n1, n2) = (poly1.len(), poly2.len());
    for i in 0..n1 {
        for j in 0..n2 {
            if segments_intersect(
                poly1[i],
                poly1[(i + 1) % n1],
                poly2[j],
                poly2[(j + 1) % n2],
            ) {
                return true;
            }
        }
    }

    // No edges cross: either disjoint or one fully inside the other.
    point_in_polygon(poly1[0], poly2) || point_in_polygon(poly2[0], poly1)
}
