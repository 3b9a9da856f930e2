// Quadrant sampling: which grid cells of a shape's top-left quadrant are
// stroke (outline) and which are fill (interior).
//
// Shapes here are symmetric in both axes, so we only ever classify the
// top-left quarter of the bounding box; the compositor mirrors the result
// into the other three quadrants. Visual: everything you see on screen comes
// out of these two functions plus mirroring.

use crate::types::{O_SIZE, Point, PointClassification};

/// Classify the top-left quadrant of an ellipse.
/// x, y: top left of the ellipse bounding box (used only to clamp sampling
///       to the native grid)
/// w, h: width and height of the ellipse bounding box
/// t:    stroke thickness; 0 = no stroke, interior only
pub fn ellipse_quadrant(x: i32, y: i32, w: i32, h: i32, t: i32) -> PointClassification {
    // 1) Nothing to sample when either dimension is zero.
    if w == 0 || h == 0 {
        return PointClassification::default();
    }

    let has_stroke = t > 0;

    // 2) A sliver of 1-2 cells has no curve to speak of: every quadrant cell
    //    is one flat region, stroke if a stroke was asked for, else fill.
    if h <= 2 || w <= 2 {
        let mut points = Vec::new();
        for xi in 0..(w + 1) / 2 {
            for yi in 0..(h + 1) / 2 {
                points.push(Point { x: xi, y: yi });
            }
        }
        return if has_stroke {
            PointClassification { stroke: points, fill: Vec::new() }
        } else {
            PointClassification { stroke: Vec::new(), fill: points }
        };
    }

    // A distinguishable interior only exists when the stroke band is thinner
    // than half the box in both axes.
    let has_fill = w > 2 * t && h > 2 * t;

    // 3) At 3-4 cells the implicit curve degenerates too; classify by edge
    //    touch instead. Cells on the outer edge are stroke candidates, the
    //    rest are fill candidates. The cell on both edges at once is dropped:
    //    mirrored four ways it would read as a doubled corner pixel.
    if w <= 4 || h <= 4 {
        let mut outer = Vec::new();
        let mut inner = Vec::new();
        for xi in 0..(w + 1) / 2 {
            for yi in 0..(h + 1) / 2 {
                let xb = xi == 0 || xi == w - 1;
                let yb = yi == 0 || yi == h - 1;

                if xb && yb {
                    continue;
                } else if xb || yb {
                    outer.push(Point { x: xi, y: yi });
                } else {
                    inner.push(Point { x: xi, y: yi });
                }
            }
        }
        if has_stroke && has_fill {
            return PointClassification { stroke: outer, fill: inner };
        }
        // Only one role is active; all candidates collapse into it.
        let mut points = outer;
        points.extend(inner);
        return if has_stroke {
            PointClassification { stroke: points, fill: Vec::new() }
        } else {
            PointClassification { stroke: Vec::new(), fill: points }
        };
    }

    // 4) General case: sample three nested implicit ellipses sharing one
    //    center. The fill ellipse separates interior from outline; the outer
    //    and inner support ellipses bracket the band of cells that must stay
    //    4-connected after mirroring (the "boundary seeds").
    //
    //    When only one of stroke/fill is active, a 1-cell reference curve
    //    still has to exist, so thickness falls back to 1.
    let t = if !has_stroke || !has_fill { 1 } else { t };

    let cx = (w - 1) as f64 / 2.0;
    let cy = (h - 1) as f64 / 2.0;

    let af = cx + 1.0 - t as f64; // fill ellipse semi-axes
    let bf = cy + 1.0 - t as f64;
    let aso = cx; // outer support
    let bso = cy;
    let asi = cx - 2.0; // inner support
    let bsi = cy - 2.0;

    let af_2 = af * af;
    let bf_2 = bf * bf;
    let aso_2 = aso * aso;
    let bso_2 = bso * bso;
    let asi_2 = asi * asi;
    let bsi_2 = bsi * bsi;

    // Quadrant extent, clamped so sampling never leaves the native grid.
    let n_cols = ((w + 1) / 2).min(O_SIZE - x).max(0) as usize;
    let n_rows = ((h + 1) / 2).min(O_SIZE - y).max(0) as usize;

    // Boundary-seed grid, local to this one call.
    let mut seeds = vec![false; n_rows * n_cols];
    let mut stroke = Vec::new();
    let mut fill = Vec::new();

    for yi in 0..n_rows {
        let y0 = yi as f64 - cy;
        let y0_2 = y0 * y0;
        let y0_2_bf_2 = y0_2 / bf_2;
        let y0_2_bso_2 = y0_2 / bso_2;
        let y0_2_bsi_2 = y0_2 / bsi_2;

        for xi in 0..n_cols {
            let x0 = xi as f64 - cx;
            let x0_2 = x0 * x0;

            let is_fill = x0_2 / af_2 + y0_2_bf_2 < 1.0;
            let is_stroke = x0_2 / aso_2 + y0_2_bso_2 < 1.0;
            let is_boundary = x0_2 / asi_2 + y0_2_bsi_2 >= 1.0;

            let p = Point { x: xi as i32, y: yi as i32 };
            let idx = yi * n_cols + xi;

            if is_fill {
                if has_fill {
                    fill.push(p);
                } else {
                    // No interior wanted: the fill disk is outline too.
                    seeds[idx] = true;
                    stroke.push(p);
                }
            }
            if is_stroke {
                seeds[idx] = is_boundary;
                if !is_fill && has_stroke {
                    stroke.push(p);
                }
            }
        }
    }

    // Densely sampled small curves can still miss gaps; seed everything.
    if w <= 6 || h <= 6 {
        for s in &stroke {
            seeds[s.y as usize * n_cols + s.x as usize] = true;
        }
        for f in &fill {
            seeds[f.y as usize * n_cols + f.x as usize] = true;
        }
    }

    reconcile_boundary(&mut seeds, n_cols, n_rows, if has_stroke { &mut stroke } else { &mut fill });

    PointClassification { stroke, fill }
}

/// Repair adjacency gaps in the sampled curve so the active set forms a
/// 4-connected region with no diagonal-only steps.
///
/// Single forward row-major pass from (1,1): whenever a seed cell is found,
/// its left and top neighbours become seeds too (and join the active list)
/// if they were not already. One pass suffices: the sampled curves are convex
/// and monotonic per quadrant, so a repair only ever needs the immediate
/// up/left neighbour.
fn reconcile_boundary(seeds: &mut [bool], n_cols: usize, n_rows: usize, active: &mut Vec<Point>) {
    for yi in 1..n_rows {
        for xi in 1..n_cols {
            if seeds[yi * n_cols + xi] {
                if !seeds[(yi - 1) * n_cols + xi] {
                    active.push(Point { x: xi as i32, y: (yi - 1) as i32 });
                    seeds[(yi - 1) * n_cols + xi] = true;
                }
                if !seeds[yi * n_cols + xi - 1] {
                    active.push(Point { x: (xi - 1) as i32, y: yi as i32 });
                    seeds[yi * n_cols + xi - 1] = true;
                }
            }
        }
    }
}

/// Classify the top-left quadrant of a rounded rectangle.
/// x, y: top left of the rectangle bounding box (clamps sampling to the grid)
/// w, h: width and height of the rectangle bounding box
/// r:    corner radius
/// t:    stroke thickness; 0 = no stroke, interior only
pub fn rectangle_quadrant(x: i32, y: i32, w: i32, h: i32, r: i32, t: i32) -> PointClassification {
    let n_cols = ((w + 1) / 2).min(O_SIZE - x).max(0);
    let n_rows = ((h + 1) / 2).min(O_SIZE - y).max(0);

    // Sharp-cornered: a cell is stroke when it sits within the thickness band
    // along the top or left edge. At radius 0 the outermost corner cell (0,0)
    // is left out: it mirrors into all four corners and would double up
    // visually.
    if r <= 1 {
        let mut stroke = Vec::new();
        let mut fill = Vec::new();

        for yi in 0..n_rows {
            for xi in 0..n_cols {
                if xi < t || yi < t {
                    if r == 1 || xi + yi > 0 {
                        stroke.push(Point { x: xi, y: yi });
                    }
                } else {
                    fill.push(Point { x: xi, y: yi });
                }
            }
        }

        return PointClassification { stroke, fill };
    }

    // Rounded: the corner is a quarter ellipse, sampled like any other
    // ellipse; the rest of the quadrant is two straight strips. The three
    // regions are disjoint by construction.
    let corner_w = (2 * r).min(w);
    let corner_h = (2 * r).min(h);
    let mut pc = ellipse_quadrant(0, 0, corner_w, corner_h, t);

    // First rows/cols not covered by the corner cells.
    let w_corner = (corner_w + 1) / 2;
    let h_corner = (corner_h + 1) / 2;

    // Strip below the corner, full quadrant width.
    for yi in h_corner..n_rows {
        for xi in 0..n_cols {
            if xi < t || yi < t {
                pc.stroke.push(Point { x: xi, y: yi });
            } else {
                pc.fill.push(Point { x: xi, y: yi });
            }
        }
    }

    // Strip right of the corner, above the corner height.
    for xi in w_corner..n_cols {
        for yi in 0..h_corner {
            if yi < t {
                pc.stroke.push(Point { x: xi, y: yi });
            } else {
                pc.fill.push(Point { x: xi, y: yi });
            }
        }
    }

    pc
}
