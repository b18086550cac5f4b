//! Rendering a finished symbol as an SVG document or a raster image

use image::{GrayImage, Luma};

use crate::models::Symbol;

/// Render the symbol as a standalone SVG document.
///
/// Dark modules are drawn by stroking the symbol's run-length path with a
/// unit-width black stroke; one user unit equals one module, so the
/// `viewBox` spans the side length with the quiet zone included.
pub fn to_svg(symbol: &Symbol) -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {side} {side}">"#,
            r##"<path d="{path}" fill="none" stroke="#000" stroke-width="1"/>"##,
            "</svg>"
        ),
        side = symbol.side_length,
        path = symbol.path,
    )
}

/// Render the symbol as a grayscale image, `module_px` pixels per module,
/// quiet zone included
pub fn to_image(symbol: &Symbol, module_px: u32) -> GrayImage {
    let quiet_zone = symbol.quiet_zone() as u32;
    let dimension = symbol.side_length as u32 * module_px;
    let mut image = GrayImage::from_pixel(dimension, dimension, Luma([255]));

    for y in 0..symbol.modules.height() {
        for x in 0..symbol.modules.width() {
            if !symbol.modules.get(x, y) {
                continue;
            }
            let left = (quiet_zone + x as u32) * module_px;
            let top = (quiet_zone + y as u32) * module_px;
            for dy in 0..module_px {
                for dx in 0..module_px {
                    image.put_pixel(left + dx, top + dy, Luma([0]));
                }
            }
        }
    }

    image
}
