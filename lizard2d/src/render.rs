use crate::geometry::{Triangulator, smooth_closed, smooth_open, wind_clockwise};
use crate::{Color, Lizard};
use glam::Vec2;

/// Brightness shift applied to the primary color for feet.
pub const FOOT_SHADE: f32 = -5.0;
/// Brightness shift applied to the primary color for legs.
pub const LEG_SHADE: f32 = -12.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
    /// Straight-alpha sRGB.
    pub color: [f32; 4],
}

/// Parts of a lizard, in painter's order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Layer {
    Feet,
    Legs,
    Body,
    Markings,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Draw {
    pub layer: Layer,
    pub first_index: usize,
    pub index_count: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub draws: Vec<Draw>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.draws.clear();
    }
}

/// Tessellation density.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawStyle {
    /// Samples per span when smoothing outlines and legs.
    pub curve_subdivisions: usize,
    /// Segments per full circle for feet and leg joints.
    pub circle_segments: usize,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            curve_subdivisions: 4,
            circle_segments: 20,
        }
    }
}

pub fn build_draw_list(lizard: &Lizard) -> DrawList {
    let mut out = DrawList::default();
    append_draw_list(&mut out, lizard);
    out
}

pub fn append_draw_list(out: &mut DrawList, lizard: &Lizard) {
    append_draw_list_with_style(out, lizard, &DrawStyle::default());
}

pub fn append_draw_list_with_style(out: &mut DrawList, lizard: &Lizard, style: &DrawStyle) {
    let config = lizard.config();
    let mut tessellator = Tessellator::new(out, style);

    let foot_color = config.primary_color.brightness(FOOT_SHADE);
    tessellator.layer(Layer::Feet, |t| {
        for foot in lizard.feet() {
            t.disc(foot.position(), config.foot_radius(), foot_color);
        }
    });

    let leg_color = config.primary_color.brightness(LEG_SHADE);
    tessellator.layer(Layer::Legs, |t| {
        for leg in lizard.legs() {
            t.stroke(&leg.points(), config.limb_width(), leg_color);
        }
    });

    tessellator.layer(Layer::Body, |t| {
        t.fill_outline(lizard.contours().body(), config.primary_color);
    });

    tessellator.layer(Layer::Markings, |t| {
        t.ribbon(lizard.contours().markings(), config.secondary_color);
    });
}

struct Tessellator<'a> {
    out: &'a mut DrawList,
    style: &'a DrawStyle,
    triangulator: Triangulator,
    scratch: Vec<Vec2>,
    scratch2: Vec<Vec2>,
}

impl<'a> Tessellator<'a> {
    fn new(out: &'a mut DrawList, style: &'a DrawStyle) -> Self {
        Self {
            out,
            style,
            triangulator: Triangulator,
            scratch: Vec::new(),
            scratch2: Vec::new(),
        }
    }

    fn layer(&mut self, layer: Layer, build: impl FnOnce(&mut Self)) {
        let first_index = self.out.indices.len();
        build(self);
        let index_count = self.out.indices.len() - first_index;
        if index_count > 0 {
            self.out.draws.push(Draw {
                layer,
                first_index,
                index_count,
            });
        }
    }

    fn push_vertex(&mut self, position: Vec2, color: [f32; 4]) -> u32 {
        let index = self.out.vertices.len() as u32;
        self.out.vertices.push(Vertex {
            position: position.to_array(),
            color,
        });
        index
    }

    fn disc(&mut self, center: Vec2, radius: f32, color: Color) {
        let segments = self.style.circle_segments.max(3);
        let rgba = color.to_rgba();
        let hub = self.push_vertex(center, rgba);
        let first = self.out.vertices.len() as u32;
        for k in 0..segments {
            let angle = k as f32 / segments as f32 * std::f32::consts::TAU;
            self.push_vertex(center + Vec2::from_angle(angle) * radius, rgba);
        }
        for k in 0..segments as u32 {
            let next = (k + 1) % segments as u32;
            self.out.indices.extend([hub, first + k, first + next]);
        }
    }

    /// Smoothed polyline of constant width with round joins and caps.
    fn stroke(&mut self, points: &[Vec2], width: f32, color: Color) {
        let mut path = std::mem::take(&mut self.scratch);
        smooth_open(points, self.style.curve_subdivisions, &mut path);

        let rgba = color.to_rgba();
        let half = width * 0.5;
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let normal = (b - a).perp().normalize_or_zero() * half;
            if normal == Vec2::ZERO {
                continue;
            }
            let i0 = self.push_vertex(a + normal, rgba);
            let i1 = self.push_vertex(b + normal, rgba);
            let i2 = self.push_vertex(b - normal, rgba);
            let i3 = self.push_vertex(a - normal, rgba);
            self.out.indices.extend([i0, i1, i2, i0, i2, i3]);
        }
        for &point in &path {
            self.disc(point, half, color);
        }

        self.scratch = path;
    }

    /// Smoothed, filled closed outline.
    fn fill_outline(&mut self, outline: &[Vec2], color: Color) {
        let mut polygon = std::mem::take(&mut self.scratch);
        smooth_closed(outline, self.style.curve_subdivisions, &mut polygon);
        wind_clockwise(&mut polygon);

        let rgba = color.to_rgba();
        let base = self.out.vertices.len() as u32;
        for &point in &polygon {
            self.push_vertex(point, rgba);
        }
        let triangles = self.triangulator.triangulate(&polygon);
        self.out.indices.extend(triangles.into_iter().map(|i| base + i));

        self.scratch = polygon;
    }

    /// Fills between the two sides of an outline laid out as
    /// `[left_0 .. left_n-1, right_n-1 .. right_0]`. Unlike [`Self::fill_outline`] this
    /// stays correct when the sides cross over the spine.
    fn ribbon(&mut self, outline: &[Vec2], color: Color) {
        let n = outline.len() / 2;
        if n < 2 {
            return;
        }
        let right: Vec<Vec2> = outline[n..].iter().rev().copied().collect();

        let mut left_path = std::mem::take(&mut self.scratch);
        let mut right_path = std::mem::take(&mut self.scratch2);
        smooth_open(&outline[..n], self.style.curve_subdivisions, &mut left_path);
        smooth_open(&right, self.style.curve_subdivisions, &mut right_path);

        let rgba = color.to_rgba();
        let base = self.out.vertices.len() as u32;
        for (&l, &r) in left_path.iter().zip(&right_path) {
            self.push_vertex(l, rgba);
            self.push_vertex(r, rgba);
        }
        let rows = left_path.len().min(right_path.len()) as u32;
        for row in 0..rows.saturating_sub(1) {
            let l0 = base + row * 2;
            let r0 = l0 + 1;
            let l1 = l0 + 2;
            let r1 = l0 + 3;
            self.out.indices.extend([l0, l1, r1, l0, r1, r0]);
        }

        self.scratch = left_path;
        self.scratch2 = right_path;
    }
}
