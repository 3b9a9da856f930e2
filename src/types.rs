// Core types shared by the sampler, the compositor and the UI.

/// Side length of the native pixel grid, in cells.
pub const O_SIZE: i32 = 50;
/// How much bigger the magnified view is. Each native cell becomes a
/// SCALE x SCALE block of pixels.
pub const SCALE: i32 = 10;
/// Side length of the magnified view, in pixels.
pub const S_SIZE: i32 = O_SIZE * SCALE;

/// One grid cell, in coordinates local to the top-left quadrant of a shape's
/// bounding box. No identity beyond its coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Stroke/fill classification of the top-left quadrant of a shape.
/// A cell appears in at most one of the two lists; cells in neither are
/// background. The samplers never emit the same cell twice by construction.
#[derive(Default, Debug)]
pub struct PointClassification {
    pub stroke: Vec<Point>,
    pub fill: Vec<Point>,
}

/// Which of the three supported shapes to draw.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Circle,
}

/// A complete drawing request, built fresh from the current control values on
/// every parameter change and discarded after compositing.
/// Visual: this is "the shape you asked for" for exactly one redraw pass.
#[derive(Clone, Copy, Debug)]
pub struct ShapeRequest {
    pub kind: ShapeKind,
    pub x: i32,      // top-left of the bounding box in the native grid
    pub y: i32,
    pub width: i32,  // bounding box size in grid cells
    pub height: i32,
    pub corner_radius: i32, // meaningful only for Rectangle
    pub thickness: i32,     // stroke width in cells; 0 = fill only, no stroke
}

impl ShapeRequest {
    /// Build a request, clamping every value to the slider ranges so the
    /// samplers only ever see pre-validated range-bound integers.
    pub fn new(
        kind: ShapeKind,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        corner_radius: i32,
        thickness: i32,
    ) -> Self {
        Self {
            kind,
            x: x.clamp(0, O_SIZE),
            y: y.clamp(0, O_SIZE),
            width: width.clamp(0, O_SIZE),
            height: height.clamp(0, O_SIZE),
            corner_radius: corner_radius.clamp(0, O_SIZE / 2),
            thickness: thickness.clamp(0, O_SIZE / 2),
        }
    }
}
