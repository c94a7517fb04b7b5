//! Ordered pixel replay onto a last-write-wins RGB canvas.

use crate::palette::{evaluate, ElevationPalette, Rgb};
use wiremap_core::point::PixelPoint;
use wiremap_core::{Error, Result};

/// A zero-initialized (black) RGB canvas.
///
/// Writes are unconditional: a later `put` at the same coordinate replaces
/// the earlier color with no blending. The buffer is row-major,
/// `width * height * 3` bytes, suitable for handing to an image encoder.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Allocate a black canvas of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * 3],
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Write a color at (x, y), overwriting any prior value.
    pub fn put(&mut self, x: u32, y: u32, color: Rgb) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x: i64::from(x),
                y: i64::from(y),
                width: self.width,
                height: self.height,
            });
        }
        let offset = (y as usize * self.width as usize + x as usize) * 3;
        self.data[offset] = color.r;
        self.data[offset + 1] = color.g;
        self.data[offset + 2] = color.b;
        Ok(())
    }

    /// Read the color at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Result<Rgb> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x: i64::from(x),
                y: i64::from(y),
                width: self.width,
                height: self.height,
            });
        }
        let offset = (y as usize * self.width as usize + x as usize) * 3;
        Ok(Rgb::new(
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ))
    }

    /// Borrow the raw RGB buffer
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the canvas and return the raw RGB buffer
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

/// Replay an ordered pixel sequence onto a fresh canvas.
///
/// Each pixel's depth is resolved through the palette and written in
/// sequence order, so a coordinate hit by several pixels ends up with the
/// color of the last one. Coordinates outside
/// `[0, width) x [0, height)` fail with [`Error::OutOfBounds`]; the
/// normalizer guarantees in-range coordinates for canvases sized from its
/// output.
pub fn render_pixels(
    pixels: &[PixelPoint],
    width: u32,
    height: u32,
    palette: &ElevationPalette,
) -> Result<Canvas> {
    let mut canvas = Canvas::new(width, height);
    for p in pixels {
        if p.x < 0 || p.y < 0 || p.x >= i64::from(width) || p.y >= i64::from(height) {
            return Err(Error::OutOfBounds {
                x: p.x,
                y: p.y,
                width,
                height,
            });
        }
        canvas.put(p.x as u32, p.y as u32, evaluate(palette, p.z))?;
    }
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_starts_black() {
        let canvas = Canvas::new(3, 2);
        assert_eq!(canvas.data().len(), 18);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(canvas.get(x, y).unwrap(), Rgb::BLACK);
            }
        }
    }

    #[test]
    fn last_write_wins() {
        let mut canvas = Canvas::new(2, 2);
        canvas.put(1, 1, Rgb::new(10, 20, 30)).unwrap();
        canvas.put(1, 1, Rgb::new(40, 50, 60)).unwrap();
        assert_eq!(canvas.get(1, 1).unwrap(), Rgb::new(40, 50, 60));
    }

    #[test]
    fn out_of_bounds_write_rejected() {
        let mut canvas = Canvas::new(2, 2);
        assert!(matches!(
            canvas.put(2, 0, Rgb::BLACK),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            canvas.put(0, 2, Rgb::BLACK),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn render_replays_in_order() {
        let palette = ElevationPalette::default();
        let pixels = vec![
            PixelPoint::new(0, 0, 0.0),  // green 100
            PixelPoint::new(0, 0, -1.0), // blue 180, overwrites
        ];
        let canvas = render_pixels(&pixels, 1, 1, &palette).unwrap();
        assert_eq!(canvas.get(0, 0).unwrap(), Rgb::new(0, 0, 180));
    }

    #[test]
    fn render_rejects_negative_coordinates() {
        let palette = ElevationPalette::default();
        let pixels = vec![PixelPoint::new(-1, 0, 0.0)];
        assert!(matches!(
            render_pixels(&pixels, 4, 4, &palette),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn unwritten_pixels_stay_black() {
        let palette = ElevationPalette::default();
        let pixels = vec![PixelPoint::new(1, 1, 3.0)];
        let canvas = render_pixels(&pixels, 3, 3, &palette).unwrap();
        assert_eq!(canvas.get(1, 1).unwrap(), Rgb::new(0, 255, 0));
        assert_eq!(canvas.get(0, 0).unwrap(), Rgb::BLACK);
        assert_eq!(canvas.get(2, 2).unwrap(), Rgb::BLACK);
    }
}
