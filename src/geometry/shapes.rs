use crate::foundation::core::{Circle, Point, Rect};

/// `true` when `p` lies inside `rect` or on its edges.
pub fn rect_contains(rect: Rect, p: Point) -> bool {
    let r = rect.abs();
    p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
}

/// `true` when the interiors of `a` and `b` overlap. Touching edges do not count.
pub fn rects_intersect(a: Rect, b: Rect) -> bool {
    let (a, b) = (a.abs(), b.abs());
    a.x0 < b.x1 && a.x1 > b.x0 && a.y0 < b.y1 && a.y1 > b.y0
}

/// Center point of `rect`.
pub fn rect_center(rect: Rect) -> Point {
    rect.center()
}

/// `true` when `p` lies inside `circle` or on its boundary.
pub fn circle_contains(circle: Circle, p: Point) -> bool {
    circle.center.distance(p) <= circle.radius
}

/// `true` when two circles overlap. Tangent circles do not count.
pub fn circles_intersect(a: Circle, b: Circle) -> bool {
    a.center.distance(b.center) < a.radius + b.radius
}

/// Even-odd point-in-polygon test. Polygons with fewer than three vertices contain nothing.
pub fn polygon_contains(vertices: &[Point], p: Point) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shapes.rs"]
mod tests;
