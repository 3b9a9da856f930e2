// Shape preview: how rounded rectangles, ellipses and circles rasterize onto
// a 50x50 pixel grid, shown at native size and 10x magnified.
//
// Controls:
// • 1 / 2 / 3 pick the shape (rectangle, ellipse, circle).
// • TAB cycles the active value; arrow keys step it (hold to repeat).
// • S saves both views as PNG snapshots. ESC quits.

mod compositor;
mod error;
mod quadrant;
mod snapshot;
mod types;
mod ui;

use compositor::RasterBuffer;
use error::Error;
use ui::{Params, Preview, WIN_H, WIN_W};

fn main() -> Result<(), Error> {
    /* --- Window + controls setup ---
       Visual: the window opens showing the default rectangle over the grid. */
    let mut preview = Preview::new("Shape Preview — 50x50 Grid")?;
    let mut params = Params::new();

    /* --- Static grid overlay ---
       Drawn once here; shape parameters never touch it. */
    let grid = ui::build_grid_layer();

    /* --- The two output buffers ---
       Both are cleared and fully rewritten on every parameter change. */
    let mut native = RasterBuffer::native();
    let mut magnified = RasterBuffer::magnified();

    /* --- Reusable screen buffer ---
       Visual: this is the image you actually see each frame. */
    let mut screen = vec![0u32; WIN_W * WIN_H];

    // First pass before any input, so the window never shows an empty grid.
    let mut dirty = true;

    /* ------------------------------ Main loop ------------------------------ */
    while preview.is_open() && !preview.esc_pressed() {
        /* 1) Inputs. Each change marks the shape dirty; the pass below uses
           whatever the controls say right now (last write wins). */
        if let Some(kind) = preview.shape_key() {
            params.select(kind);
            dirty = true;
        }
        if preview.next_param_pressed() {
            params.next_param(); // HUD marker moves; the shape itself is unchanged
        }
        let delta = preview.adjust_delta();
        if delta != 0 && params.adjust(delta) {
            dirty = true;
        }

        /* 2) One complete recompute-and-composite pass when anything changed:
           sample the quadrant, mirror it into both buffers. */
        if dirty {
            compositor::draw_shape(&params.request(), &mut native, &mut magnified);
            dirty = false;
        }

        /* 3) Snapshots read the freshly composited buffers. */
        if preview.snapshot_pressed() {
            snapshot::save(&native, &magnified)?;
            println!("saved {} and {}", snapshot::NATIVE_PATH, snapshot::MAGNIFIED_PATH);
        }

        /* 4) Assemble the frame and present it. */
        ui::assemble(&mut screen, &grid, &native, &magnified, &params);
        preview.present(&screen)?;
    }

    Ok(())
}
