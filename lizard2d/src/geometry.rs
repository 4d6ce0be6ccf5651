use glam::Vec2;

/// Ear-clipping triangulator for simple polygons.
#[derive(Default)]
pub(crate) struct Triangulator;

impl Triangulator {
    /// Triangulates a clockwise polygon (see [`wind_clockwise`]) into indices into `polygon`.
    pub(crate) fn triangulate(&self, polygon: &[Vec2]) -> Vec<u32> {
        if polygon.len() < 3 {
            return Vec::new();
        }

        let mut ring: Vec<usize> = (0..polygon.len()).collect();
        let mut reflex: Vec<bool> = (0..ring.len())
            .map(|i| is_reflex_at(i, &ring, polygon))
            .collect();
        let mut triangles = Vec::with_capacity((polygon.len() - 2) * 3);

        while ring.len() > 3 {
            let count = ring.len();
            // Self-touching outlines can leave no clean ear; clip the first convex corner.
            let ear = find_ear(&ring, &reflex, polygon)
                .or_else(|| (0..count).find(|&i| !reflex[i]))
                .unwrap_or(0);

            triangles.push(ring[(count + ear - 1) % count] as u32);
            triangles.push(ring[ear] as u32);
            triangles.push(ring[(ear + 1) % count] as u32);

            ring.remove(ear);
            reflex.remove(ear);
            let count = ring.len();
            let previous = (count + ear - 1) % count;
            let next = ear % count;
            reflex[previous] = is_reflex_at(previous, &ring, polygon);
            reflex[next] = is_reflex_at(next, &ring, polygon);
        }

        triangles.extend([ring[0] as u32, ring[1] as u32, ring[2] as u32]);
        triangles
    }
}

fn find_ear(ring: &[usize], reflex: &[bool], polygon: &[Vec2]) -> Option<usize> {
    let count = ring.len();
    (0..count).find(|&i| {
        if reflex[i] {
            return false;
        }
        let previous = (count + i - 1) % count;
        let next = (i + 1) % count;
        let (a, b, c) = (polygon[ring[previous]], polygon[ring[i]], polygon[ring[next]]);
        !(0..count).any(|other| {
            other != previous
                && other != i
                && other != next
                && reflex[other]
                && inside_triangle(polygon[ring[other]], a, b, c)
        })
    })
}

/// True when `a -> b -> c` turns clockwise or is collinear.
fn clockwise_turn(a: Vec2, b: Vec2, c: Vec2) -> bool {
    (b - a).perp_dot(c - a) <= 0.0
}

fn inside_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    clockwise_turn(c, a, p) && clockwise_turn(a, b, p) && clockwise_turn(b, c, p)
}

fn is_reflex_at(index: usize, ring: &[usize], polygon: &[Vec2]) -> bool {
    let count = ring.len();
    let previous = polygon[ring[(count + index - 1) % count]];
    let current = polygon[ring[index]];
    let next = polygon[ring[(index + 1) % count]];
    !clockwise_turn(previous, current, next)
}

/// Twice the signed area; positive for counter-clockwise polygons.
pub(crate) fn signed_area(polygon: &[Vec2]) -> f32 {
    let n = polygon.len();
    (0..n)
        .map(|i| polygon[i].perp_dot(polygon[(i + 1) % n]))
        .sum()
}

/// Reverses `polygon` in place if it winds counter-clockwise.
pub(crate) fn wind_clockwise(polygon: &mut [Vec2]) {
    if polygon.len() >= 3 && signed_area(polygon) > 0.0 {
        polygon.reverse();
    }
}

fn catmull_rom(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * p1
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t3)
}

/// Catmull-Rom resampling of a closed curve through `points`, `subdivisions` samples per
/// span. Every input point appears in the output.
pub fn smooth_closed(points: &[Vec2], subdivisions: usize, out: &mut Vec<Vec2>) {
    out.clear();
    let n = points.len();
    if n < 3 || subdivisions <= 1 {
        out.extend_from_slice(points);
        return;
    }
    out.reserve(n * subdivisions);
    for i in 0..n {
        let p0 = points[(n + i - 1) % n];
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        let p3 = points[(i + 2) % n];
        out.extend((0..subdivisions).map(|k| {
            catmull_rom(p0, p1, p2, p3, k as f32 / subdivisions as f32)
        }));
    }
}

/// Catmull-Rom resampling of an open curve; the end tangents are mirrored from the first
/// and last spans.
pub fn smooth_open(points: &[Vec2], subdivisions: usize, out: &mut Vec<Vec2>) {
    out.clear();
    let n = points.len();
    if n < 3 || subdivisions <= 1 {
        out.extend_from_slice(points);
        return;
    }
    out.reserve((n - 1) * subdivisions + 1);
    for i in 0..n - 1 {
        let p1 = points[i];
        let p2 = points[i + 1];
        let p0 = if i == 0 { 2.0 * p1 - p2 } else { points[i - 1] };
        let p3 = if i + 2 < n {
            points[i + 2]
        } else {
            2.0 * p2 - p1
        };
        out.extend((0..subdivisions).map(|k| {
            catmull_rom(p0, p1, p2, p3, k as f32 / subdivisions as f32)
        }));
    }
    out.push(points[n - 1]);
}
