// PNG export of the two preview buffers.
// Visual: pressing S drops shape-native.png and shape-magnified.png next to
// the executable, pixel-for-pixel what the window shows.

use crate::compositor::RasterBuffer;
use crate::error::Error;
use image::RgbaImage;

pub const NATIVE_PATH: &str = "shape-native.png";
pub const MAGNIFIED_PATH: &str = "shape-magnified.png";

/// Save both buffers as PNG files.
pub fn save(native: &RasterBuffer, magnified: &RasterBuffer) -> Result<(), Error> {
    save_png(NATIVE_PATH, native)?;
    save_png(MAGNIFIED_PATH, magnified)?;
    Ok(())
}

fn save_png(path: &str, buffer: &RasterBuffer) -> Result<(), Error> {
    let size = buffer.size() as u32;
    // The buffer already is row-major RGBA bytes, exactly what RgbaImage wants.
    let img = RgbaImage::from_raw(size, size, buffer.pixels.clone())
        .ok_or_else(|| Error::Snapshot(format!("{path}: buffer size mismatch")))?;
    img.save(path).map_err(|e| Error::Snapshot(format!("{path}: {e}")))?;
    Ok(())
}
