// Window + software drawing for the preview.
// What you see on screen:
// 1) Left: the magnified view, one 10x10 block per grid cell, over a dashed
//    cell grid.
// 2) Right panel: the native 50x50 raster at actual size, plus a HUD with
//    the current shape, the six control values and the key bindings.

use crate::error::Error;
use crate::types::{O_SIZE, S_SIZE, SCALE, ShapeKind, ShapeRequest};
use crate::compositor::RasterBuffer;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

/// Width of the side panel holding the native view and the HUD.
pub const PANEL_W: usize = 110;
pub const WIN_W: usize = S_SIZE as usize + PANEL_W;
pub const WIN_H: usize = S_SIZE as usize;

const PANEL_BG: u32 = 0x00_1A1A1A;
const FRAME_COLOR: u32 = 0x00_404040;
const TEXT_COLOR: u32 = 0x00_FFFFFF;
const TEXT_DIM: u32 = 0x00_606060;

// Top-left of the native-resolution inset inside the panel.
const NATIVE_X: usize = S_SIZE as usize + 30;
const NATIVE_Y: usize = 16;

pub struct Preview {
    window: Window, // the on-screen window you see
}

impl Preview {
    /// Create the preview window.
    /// Visual: an empty window appears with your chosen title.
    pub fn new(title: &str) -> Result<Self, Error> {
        let window = Window::new(title, WIN_W, WIN_H, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push the assembled screen to the window.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, screen: &[u32]) -> Result<(), Error> {
        self.window
            .update_with_buffer(screen, WIN_W, WIN_H)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Shape selection: 1 = rectangle, 2 = ellipse, 3 = circle.
    pub fn shape_key(&self) -> Option<ShapeKind> {
        if self.window.is_key_pressed(Key::Key1, KeyRepeat::No) {
            Some(ShapeKind::Rectangle)
        } else if self.window.is_key_pressed(Key::Key2, KeyRepeat::No) {
            Some(ShapeKind::Ellipse)
        } else if self.window.is_key_pressed(Key::Key3, KeyRepeat::No) {
            Some(ShapeKind::Circle)
        } else {
            None
        }
    }

    /// TAB cycles which control the arrow keys adjust.
    pub fn next_param_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::Tab, KeyRepeat::No)
    }

    /// Arrow keys act as the inc/dec buttons of the active control.
    /// Key repeat is on, so holding a key keeps stepping the value.
    pub fn adjust_delta(&self) -> i32 {
        let up = self.window.is_key_pressed(Key::Up, KeyRepeat::Yes)
            || self.window.is_key_pressed(Key::Right, KeyRepeat::Yes);
        let down = self.window.is_key_pressed(Key::Down, KeyRepeat::Yes)
            || self.window.is_key_pressed(Key::Left, KeyRepeat::Yes);
        (up as i32) - (down as i32)
    }

    /// S saves the two buffers as PNG snapshots.
    pub fn snapshot_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }
}

/* ---------- Controls ---------- */

const PARAM_LABELS: [&str; 6] = ["X", "Y", "W", "H", "R", "T"];

/// The six slider values plus the shape selector. Only the bookkeeping lives
/// here; drawing reads a fresh ShapeRequest every time something changes.
pub struct Params {
    pub kind: ShapeKind,
    values: [i32; 6], // x, y, width, height, radius, thickness
    active: usize,    // which value the arrow keys currently adjust
}

impl Params {
    pub fn new() -> Self {
        Self { kind: ShapeKind::Rectangle, values: [10, 10, 30, 20, 5, 2], active: 2 }
    }

    pub fn select(&mut self, kind: ShapeKind) {
        self.kind = kind;
    }

    pub fn next_param(&mut self) {
        self.active = (self.active + 1) % self.values.len();
    }

    // Radius only applies to rectangles; a circle has no independent height.
    fn enabled(&self, i: usize) -> bool {
        match i {
            3 => self.kind != ShapeKind::Circle,
            4 => self.kind == ShapeKind::Rectangle,
            _ => true,
        }
    }

    fn max_value(i: usize) -> i32 {
        if i < 4 { O_SIZE } else { O_SIZE / 2 }
    }

    /// Step the active value by delta, honoring its range and the disabled
    /// rules. Returns true when the value actually changed.
    pub fn adjust(&mut self, delta: i32) -> bool {
        if !self.enabled(self.active) {
            return false;
        }
        let v = self.values[self.active];
        let next = (v + delta).clamp(0, Self::max_value(self.active));
        if next == v {
            return false;
        }
        self.values[self.active] = next;
        true
    }

    /// Snapshot of the current controls as one drawing request.
    pub fn request(&self) -> ShapeRequest {
        ShapeRequest::new(
            self.kind,
            self.values[0],
            self.values[1],
            self.values[2],
            self.values[3],
            self.values[4],
            self.values[5],
        )
    }
}

/* ---------- Static grid overlay ---------- */

/// Build the dashed cell grid for the magnified view, once at startup.
/// Visual: alternating black/white dashes at half strength along every cell
/// boundary, so you can count cells without the lines shouting over the
/// shape. Vertical lines are drawn after (over) the horizontal ones.
pub fn build_grid_layer() -> Vec<u32> {
    let s = S_SIZE as usize;
    let step = SCALE as usize;
    let mut layer = vec![0u32; s * s];

    // Alpha-127 dash over the black background.
    let dash = |i: usize| -> u32 {
        let c = 255 * (1 - (i % 2) as u32);
        let v = c * 127 / 255;
        (v << 16) | (v << 8) | v
    };

    for y in (step - 1..s).step_by(step) {
        for x in 0..s {
            layer[y * s + x] = dash(x);
        }
    }
    for x in (step - 1..s).step_by(step) {
        for y in 0..s {
            layer[y * s + x] = dash(y);
        }
    }

    layer
}

/* ---------- Screen assembly ---------- */

/// Put a pixel on the screen if (x,y) is inside the window.
#[inline]
fn put_pixel(screen: &mut [u32], x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= WIN_W || y >= WIN_H {
        return;
    }
    screen[y * WIN_W + x] = color;
}

#[inline]
fn pack(rgba: [u8; 4]) -> u32 {
    ((rgba[0] as u32) << 16) | ((rgba[1] as u32) << 8) | rgba[2] as u32
}

/// Compose one frame: grid layer, magnified shape, panel, native inset, HUD.
pub fn assemble(
    screen: &mut [u32],
    grid: &[u32],
    native: &RasterBuffer,
    magnified: &RasterBuffer,
    params: &Params,
) {
    let s = S_SIZE as usize;

    // 1) Background: grid layer on the left, flat panel on the right.
    for y in 0..WIN_H {
        screen[y * WIN_W..y * WIN_W + s].copy_from_slice(&grid[y * s..(y + 1) * s]);
        screen[y * WIN_W + s..(y + 1) * WIN_W].fill(PANEL_BG);
    }

    // 2) Magnified shape over the grid; empty cells keep the grid visible.
    for y in 0..s {
        for x in 0..s {
            let p = magnified.pixel(x, y);
            if p[3] > 0 {
                screen[y * WIN_W + x] = pack(p);
            }
        }
    }

    // 3) Native-resolution inset with a thin frame around it.
    let n = O_SIZE as usize;
    for i in 0..n + 2 {
        put_pixel(screen, (NATIVE_X + i) as i32 - 1, NATIVE_Y as i32 - 1, FRAME_COLOR);
        put_pixel(screen, (NATIVE_X + i) as i32 - 1, (NATIVE_Y + n) as i32, FRAME_COLOR);
        put_pixel(screen, NATIVE_X as i32 - 1, (NATIVE_Y + i) as i32 - 1, FRAME_COLOR);
        put_pixel(screen, (NATIVE_X + n) as i32, (NATIVE_Y + i) as i32 - 1, FRAME_COLOR);
    }
    for y in 0..n {
        for x in 0..n {
            let p = native.pixel(x, y);
            let color = if p[3] > 0 { pack(p) } else { 0 };
            put_pixel(screen, (NATIVE_X + x) as i32, (NATIVE_Y + y) as i32, color);
        }
    }

    // 4) HUD: shape name, the six values (active one marked), key hints.
    let text_x = (S_SIZE + 12) as i32;
    let name = match params.kind {
        ShapeKind::Rectangle => "RECT",
        ShapeKind::Ellipse => "ELLIPSE",
        ShapeKind::Circle => "CIRCLE",
    };
    draw_text_5x7(screen, text_x, 84, name, TEXT_COLOR);

    for (i, label) in PARAM_LABELS.iter().enumerate() {
        let marker = if i == params.active { ">" } else { " " };
        let line = format!("{}{} {:>2}", marker, label, params.values[i]);
        let color = if params.enabled(i) { TEXT_COLOR } else { TEXT_DIM };
        draw_text_5x7(screen, text_x, 104 + (i as i32) * 12, &line, color);
    }

    let hints = ["1 2 3: SHAPE", "TAB: PARAM", "UP DN: ADJUST", "S: SNAPSHOT"];
    for (i, hint) in hints.iter().enumerate() {
        draw_text_5x7(screen, text_x, WIN_H as i32 - 58 + (i as i32) * 12, hint, TEXT_DIM);
    }
}

/* ---------- 5x7 bitmap font (ASCII subset the HUD needs) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Uppercase letters the HUD uses
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b11001,0b10101,0b10011,0b10001,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),

        // Punctuation: space, colon, active-value marker
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '>' => g!(0b01000,0b00100,0b00010,0b00001,0b00010,0b00100,0b01000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y).
/// Visual: a tiny glyph appears with a 1-pixel black shadow for contrast.
fn draw_char_5x7(screen: &mut [u32], x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        // Shadow pass: offset by (1,1) in black to improve readability
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(screen, x + rx as i32 + 1, y + ry as i32 + 1, 0x00000000);
                }
            }
        }

        // Foreground pass: actual glyph in chosen color
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(screen, x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs.
/// Visual: a compact HUD string; each glyph is 5x7 with 1-pixel spacing.
pub fn draw_text_5x7(screen: &mut [u32], mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(screen, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}
