//! Raster export of the visible canvas.
//!
//! The diagram is drawn through the same [`DiagramSurface::render`] path used
//! on screen, into an [`SvgCanvas`], rasterized with `resvg`, flattened to
//! opaque RGB and encoded as an 8-bit PNG.

use std::{fs, path::Path};

use log::{debug, error, info};
use resvg::{tiny_skia, usvg};

use mindmap_core::geometry::Size;

use crate::{export::Error, export::svg::SvgCanvas, surface::DiagramSurface};

/// An opaque 8-bit RGB image, row-major without padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the `[r, g, b]` channels at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 3) as usize;
        self.data
            .get(offset..offset + 3)
            .map(|rgb| [rgb[0], rgb[1], rgb[2]])
    }
}

/// Renders the surface at its current canvas size.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if the canvas is empty or the generated SVG
/// cannot be rasterized.
pub fn rasterize(surface: &DiagramSurface) -> Result<RgbImage, Error> {
    let size = surface.canvas_size();
    let (width, height) = pixel_dimensions(size)?;

    let mut canvas = SvgCanvas::new(size, surface.theme());
    surface.render(&mut canvas);
    let svg = canvas.into_document().to_string();
    debug!(width, height; "Rasterizing canvas");

    let mut options = usvg::Options::default();
    options.font_family = surface.theme().font_family.clone();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(&svg, &options)
        .map_err(|err| Error::Encoding(format!("Failed to parse generated SVG: {err}")))?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        Error::Encoding(format!("Failed to allocate {width}x{height} pixmap"))
    })?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue()]
        })
        .collect();

    Ok(RgbImage {
        width,
        height,
        data,
    })
}

fn pixel_dimensions(size: Size) -> Result<(u32, u32), Error> {
    let width = u32::try_from(size.width()).unwrap_or(0);
    let height = u32::try_from(size.height()).unwrap_or(0);
    if width == 0 || height == 0 {
        return Err(Error::Encoding(format!(
            "Canvas has no visible area ({}x{})",
            size.width(),
            size.height()
        )));
    }
    Ok((width, height))
}

/// Encodes an image as an RGB PNG without an alpha channel.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if the PNG encoder rejects the image.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, Error> {
    let encoding = |err: png::EncodingError| Error::Encoding(format!("Failed to encode PNG: {err}"));

    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, image.width, image.height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header().map_err(encoding)?;
        writer.write_image_data(&image.data).map_err(encoding)?;
        writer.finish().map_err(encoding)?;
    }
    Ok(bytes)
}

/// Rasterizes the surface and writes the PNG to `path`.
pub(crate) fn write_png(surface: &DiagramSurface, path: &Path) -> Result<(), Error> {
    let image = rasterize(surface)?;
    let bytes = encode_png(&image)?;

    info!(path = path.display().to_string(), bytes = bytes.len(); "Writing PNG export");
    fs::write(path, bytes).map_err(|err| {
        error!(path = path.display().to_string(), err:err; "Failed to write PNG file");
        Error::Io(err)
    })
}

#[cfg(test)]
mod tests {
    use mindmap_core::{color::Color, geometry::Point, node::Node};

    use super::*;

    fn surface() -> DiagramSurface {
        let mut surface = DiagramSurface::default().with_canvas_size(Size::new(640, 480));
        surface.add_node(Node::new("Root", Point::new(300, 200), Color::CYAN));
        surface
    }

    #[test]
    fn test_rasterize_matches_canvas_and_fills() {
        let image = rasterize(&surface()).unwrap();
        assert_eq!((image.width(), image.height()), (640, 480));
        assert_eq!(image.data().len(), 640 * 480 * 3);
        assert_eq!(image.pixel(10, 10), Some([255, 255, 255]));
        assert_eq!(image.pixel(315, 225), Some([0, 255, 255]));
        assert_eq!(image.pixel(640, 0), None);
    }

    #[test]
    fn test_rasterize_empty_canvas_is_encoding_error() {
        let surface = DiagramSurface::default().with_canvas_size(Size::new(0, 480));
        assert!(matches!(rasterize(&surface), Err(Error::Encoding(_))));
    }

    #[test]
    fn test_encode_png_is_rgb() {
        let image = RgbImage {
            width: 2,
            height: 1,
            data: vec![255, 0, 0, 0, 0, 255],
        };
        let bytes = encode_png(&image).unwrap();

        let decoder = png::Decoder::new(bytes.as_slice());
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!(info.color_type, png::ColorType::Rgb);
        assert_eq!(info.bit_depth, png::BitDepth::Eight);
        assert_eq!((info.width, info.height), (2, 1));
    }
}
