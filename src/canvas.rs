use crate::colour::Colour;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Bytes per pixel in the RGB buffer
pub const CHANNELS: usize = 3;

/// Something filled squares can be drawn on
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill a `size`×`size` square whose top-left corner is at device
    /// coordinates (`x`, `y`). Parts outside the surface are dropped.
    fn fill_square(&mut self, x: f64, y: f64, size: u32, colour: Colour);
}

/// An RGB raster held in memory
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Colour) -> Canvas {
        let mut data = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for _ in 0..(width as usize * height as usize) {
            data.extend_from_slice(&[background.r, background.g, background.b]);
        }
        Canvas {
            width,
            height,
            data,
        }
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize * self.width as usize + x as usize) * CHANNELS;
        Some(Colour::rgb(
            self.data[index],
            self.data[index + 1],
            self.data[index + 2],
        ))
    }

    #[cfg(test)]
    pub fn get_data(&self) -> &[u8] {
        &self.data
    }

    /// Encode as an 8-bit RGB PNG
    pub fn write_png(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let file = File::create(path)?;
        let w = BufWriter::new(file);
        let mut encoder = png::Encoder::new(w, self.width, self.height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.data)?;
        Ok(())
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_square(&mut self, x: f64, y: f64, size: u32, colour: Colour) {
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        let left = x.floor();
        let top = y.floor();
        let right = (left + size as f64).min(self.width as f64);
        let bottom = (top + size as f64).min(self.height as f64);
        let left = left.max(0.0);
        let top = top.max(0.0);
        if !(left < right && top < bottom) {
            return;
        }

        for row in top as usize..bottom as usize {
            for column in left as usize..right as usize {
                let index = (row * self.width as usize + column) * CHANNELS;
                self.data[index..index + CHANNELS].copy_from_slice(&[colour.r, colour.g, colour.b]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_filled_with_background() {
        let canvas = Canvas::new(4, 3, Colour::WHITE);
        assert_eq!(canvas.get_data().len(), 4 * 3 * CHANNELS);
        assert!(canvas.get_data().iter().all(|b| *b == 255));
    }

    #[test]
    fn fills_a_square() {
        let mut canvas = Canvas::new(10, 10, Colour::BLACK);
        canvas.fill_square(2.0, 3.0, 2, Colour::BLUE);
        assert_eq!(canvas.pixel(2, 3), Some(Colour::BLUE));
        assert_eq!(canvas.pixel(3, 4), Some(Colour::BLUE));
        assert_eq!(canvas.pixel(4, 3), Some(Colour::BLACK));
        assert_eq!(canvas.pixel(2, 5), Some(Colour::BLACK));
        assert_eq!(canvas.pixel(1, 3), Some(Colour::BLACK));
    }

    #[test]
    fn fractional_corners_snap_down() {
        let mut canvas = Canvas::new(4, 4, Colour::BLACK);
        canvas.fill_square(1.7, 0.2, 1, Colour::WHITE);
        assert_eq!(canvas.pixel(1, 0), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(2, 0), Some(Colour::BLACK));
    }

    #[test]
    fn clips_at_every_edge() {
        let mut canvas = Canvas::new(4, 4, Colour::BLACK);
        canvas.fill_square(-1.0, -1.0, 2, Colour::WHITE);
        canvas.fill_square(3.0, 3.0, 5, Colour::WHITE);
        canvas.fill_square(100.0, 0.0, 5, Colour::WHITE);
        canvas.fill_square(0.0, -50.0, 5, Colour::WHITE);
        assert_eq!(canvas.pixel(0, 0), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(1, 1), Some(Colour::BLACK));
        assert_eq!(canvas.pixel(3, 3), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(4, 4), None);
    }

    #[test]
    fn non_finite_positions_draw_nothing() {
        let mut canvas = Canvas::new(4, 4, Colour::BLACK);
        canvas.fill_square(f64::NAN, 1.0, 2, Colour::WHITE);
        canvas.fill_square(f64::INFINITY, 1.0, 2, Colour::WHITE);
        assert!(canvas.get_data().iter().all(|b| *b == 0));
    }

    #[test]
    fn writes_a_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("canvas.png");
        let mut canvas = Canvas::new(8, 8, Colour::BLACK);
        canvas.fill_square(2.0, 2.0, 3, Colour::ROYAL_BLUE);
        canvas.write_png(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
