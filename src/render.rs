//! Turning accepted points into squares on a [`Surface`].
//!
//! Plane coordinates are scaled by a zoom factor and placed relative to the
//! centre of the surface, with the imaginary axis pointing up.

use crate::canvas::Surface;
use crate::colour::Colour;
use crate::complex::Complex;
use crate::scanner::Hit;
use serde::{Deserialize, Serialize};

/// How each hit is coloured
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Shading {
    /// Every hit in the configured colour
    Flat,
    /// Hits fade towards the background by their classifier's brightness
    Iterations,
}

/// Everything needed to draw a hit, apart from the hit itself
#[derive(Clone, Copy, Debug)]
pub struct PointStyle {
    pub colour: Colour,
    pub background: Colour,
    pub size: u32,
    pub zoom: f64,
    pub shading: Shading,
}

/// Device coordinates of an already-scaled plane coordinate
pub fn to_pixels(point: Complex, width: u32, height: u32) -> (f64, f64) {
    (width as f64 / 2.0 + point.re, height as f64 / 2.0 - point.im)
}

/// Scale `point` by `zoom` and draw a `size` square there
pub fn draw_point<S: Surface>(
    surface: &mut S,
    point: Complex,
    colour: Colour,
    size: u32,
    zoom: f64,
) {
    let (x, y) = to_pixels(point.scale(zoom), surface.width(), surface.height());
    surface.fill_square(x, y, size, colour);
}

impl PointStyle {
    fn colour_for(&self, hit: &Hit) -> Colour {
        match self.shading {
            Shading::Flat => self.colour,
            Shading::Iterations => self.colour.mix(self.background, hit.brightness),
        }
    }
}

/// Draw every hit, in order
pub fn draw_hits<S: Surface>(surface: &mut S, hits: &[Hit], style: &PointStyle) {
    for hit in hits {
        draw_point(surface, hit.point, style.colour_for(hit), style.size, style.zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::iteration::Orbit;

    /// Records draw requests instead of rasterising them
    #[derive(Default)]
    struct Recorder {
        squares: Vec<(f64, f64, u32, Colour)>,
    }

    impl Surface for Recorder {
        fn width(&self) -> u32 {
            800
        }

        fn height(&self) -> u32 {
            600
        }

        fn fill_square(&mut self, x: f64, y: f64, size: u32, colour: Colour) {
            self.squares.push((x, y, size, colour));
        }
    }

    fn hit(re: f64, im: f64, brightness: f64) -> Hit {
        let point = Complex::new(re, im);
        Hit {
            point,
            orbit: Orbit {
                z: point,
                iterations: 0,
                stopped: true,
            },
            brightness,
        }
    }

    fn style(shading: Shading) -> PointStyle {
        PointStyle {
            colour: Colour::WHITE,
            background: Colour::BLACK,
            size: 7,
            zoom: 150.0,
            shading,
        }
    }

    #[test]
    fn origin_maps_to_the_centre() {
        assert_eq!(to_pixels(Complex::ZERO, 800, 600), (400.0, 300.0));
    }

    #[test]
    fn imaginary_axis_points_up() {
        assert_eq!(to_pixels(Complex::new(10.0, 20.0), 800, 600), (410.0, 280.0));
    }

    #[test]
    fn draw_point_scales_before_mapping() {
        let mut recorder = Recorder::default();
        let point = Complex::new(0.5, -0.25);
        draw_point(&mut recorder, point, Colour::BLUE, 5, 150.0);
        assert_eq!(recorder.squares, vec![(475.0, 337.5, 5, Colour::BLUE)]);
        assert_eq!(point, Complex::new(0.5, -0.25));
    }

    #[test]
    fn flat_shading_uses_one_colour() {
        let mut recorder = Recorder::default();
        draw_hits(
            &mut recorder,
            &[hit(0.0, 0.0, 1.0), hit(0.1, 0.1, 0.1)],
            &style(Shading::Flat),
        );
        assert!(recorder.squares.iter().all(|s| s.3 == Colour::WHITE && s.2 == 7));
    }

    #[test]
    fn iteration_shading_fades_dim_points() {
        let mut recorder = Recorder::default();
        draw_hits(
            &mut recorder,
            &[hit(0.0, 0.0, 1.0), hit(0.1, 0.1, 0.5)],
            &style(Shading::Iterations),
        );
        assert_eq!(recorder.squares[0].3, Colour::WHITE);
        assert_eq!(recorder.squares[1].3, Colour::rgb(128, 128, 128));
    }

    #[test]
    fn draws_onto_a_canvas() {
        let mut canvas = Canvas::new(20, 20, Colour::BLACK);
        draw_hits(
            &mut canvas,
            &[hit(0.0, 0.0, 1.0)],
            &PointStyle {
                size: 2,
                zoom: 1.0,
                ..style(Shading::Flat)
            },
        );
        assert_eq!(canvas.pixel(10, 10), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(11, 11), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(12, 12), Some(Colour::BLACK));
    }
}
