// This file is part of Dabble.
// Copyright (C) 2023 the Dabble developers
//
// Dabble is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Dabble is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Dabble.  If not, see <https://www.gnu.org/licenses/>.

use dabcore::brush::{BrushConfig, DabRenderer};
use dabcore::paint::Color;
use dabcore::preview::BrushPreview;

use tracing::info;

use std::error::Error;
use std::io;
use std::io::Write;
use std::num::ParseIntError;
use std::str::FromStr;

use image::{Rgba, RgbaImage};

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Size(pub u32, pub u32);

impl FromStr for Size {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let x = s.find('x').unwrap_or(0);
        let w = s[..x].parse::<u32>()?;
        let h = s[x + 1..].parse::<u32>()?;
        Ok(Size(w, h))
    }
}

const CHECKER_SIZE: u32 = 16;

/// A software implementation of the dab renderer boundary.
///
/// Composites soft round dabs over a checkerboard background into an RGBA
/// buffer, evaluating size, opacity, hardness and color at each dab's
/// pressure.
pub struct PreviewImage {
    image: RgbaImage,
    brush: BrushConfig,
}

impl PreviewImage {
    pub fn new(width: u32, height: u32, brush: BrushConfig) -> PreviewImage {
        // Pick checkerboard grays the brush color stands out against
        let (light, mid) = if brush.color_at(1.0).is_dark() {
            (Color::rgb8(250, 250, 250), Color::rgb8(180, 180, 180))
        } else {
            (Color::rgb8(32, 32, 32), Color::rgb8(72, 72, 72))
        };

        let mut image = RgbaImage::new(width, height);
        for (x, y, px) in image.enumerate_pixels_mut() {
            let c = if (x / CHECKER_SIZE + y / CHECKER_SIZE) % 2 == 0 {
                light
            } else {
                mid
            };
            *px = to_rgba(c);
        }
        PreviewImage { image, brush }
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn blend_pixel(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x >= self.image.width() as i32 || y >= self.image.height() as i32 {
            return;
        }
        let px = self.image.get_pixel_mut(x as u32, y as u32);
        let src = [color.r, color.g, color.b];
        for (channel, c) in px.0.iter_mut().take(3).zip(src) {
            let base = *channel as f32 / 255.0;
            *channel = ((base + (c - base) * alpha) * 255.0 + 0.5) as u8;
        }
    }
}

impl DabRenderer for PreviewImage {
    fn dab(&mut self, x: i32, y: i32, pressure: f32) {
        let radius = self.brush.size_at(pressure).max(0.5);
        let opacity = self.brush.opacity_at(pressure);
        let hardness = self.brush.hardness_at(pressure).clamp(0.0, 1.0);
        let color = self.brush.color_at(pressure);
        if opacity <= 0.0 {
            return;
        }

        let r = radius.ceil() as i32;
        for dy in -r..=r {
            for dx in -r..=r {
                let dist = ((dx * dx + dy * dy) as f32).sqrt();
                let coverage = edge_falloff(dist, radius, hardness);
                if coverage > 0.0 {
                    self.blend_pixel(x + dx, y + dy, color, coverage * opacity);
                }
            }
        }
    }
}

/// Dab mask coverage at `dist` pixels from the center: solid out to the
/// hardness fraction of the radius, then a linear ramp to the edge.
fn edge_falloff(dist: f32, radius: f32, hardness: f32) -> f32 {
    if dist >= radius {
        return 0.0;
    }
    let solid = radius * hardness;
    if dist <= solid {
        1.0
    } else {
        (radius - dist) / (radius - solid)
    }
}

fn to_rgba(c: Color) -> Rgba<u8> {
    Rgba([
        (c.r * 255.0) as u8,
        (c.g * 255.0) as u8,
        (c.b * 255.0) as u8,
        (c.a * 255.0) as u8,
    ])
}

/// Replay a preview's dab sequence into a fresh image of its area
pub fn render_preview(bp: &BrushPreview) -> RgbaImage {
    let (w, h) = bp.area();
    let mut image = PreviewImage::new(w as u32, h as u32, *bp.brush());
    bp.render_to(&mut image);
    image.into_image()
}

pub fn save_preview(bp: &BrushPreview, path: &str) -> Result<(), Box<dyn Error>> {
    render_preview(bp).save(path)?;
    info!("Wrote {}", path);
    Ok(())
}

/// Dump the scheduled dabs, one `x y pressure` triple per line
pub fn write_dab_list(bp: &BrushPreview, out: &mut dyn Write) -> io::Result<()> {
    for d in bp.dabs() {
        writeln!(out, "{} {} {:.3}", d.x, d.y, d.pressure)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_parsing() {
        assert_eq!(Size::from_str("256x128"), Ok(Size(256, 128)));
        assert!(Size::from_str("256").is_err());
        assert!(Size::from_str("x128").is_err());
    }

    #[test]
    fn test_falloff() {
        // Hard brushes have no ramp
        assert_eq!(edge_falloff(0.0, 10.0, 1.0), 1.0);
        assert_eq!(edge_falloff(9.9, 10.0, 1.0), 1.0);
        assert_eq!(edge_falloff(10.0, 10.0, 1.0), 0.0);

        // Soft brushes ramp from the solid core to zero at the edge
        assert_eq!(edge_falloff(5.0, 10.0, 0.5), 1.0);
        assert_eq!(edge_falloff(7.5, 10.0, 0.5), 0.5);
        assert!(edge_falloff(12.0, 10.0, 0.5) == 0.0);
    }

    #[test]
    fn test_dab_stamps_center() {
        let mut brush = BrushConfig::new();
        brush.size = dabcore::brush::BrushParam::Fixed(4.0);
        brush.color = dabcore::brush::ColorParam::Fixed(Color::rgb8(255, 0, 0));

        let mut img = PreviewImage::new(32, 32, brush);
        img.dab(16, 16, 1.0);
        let px = img.into_image();
        assert_eq!(px.get_pixel(16, 16).0[0], 255, "center should be solid");
        assert_ne!(px.get_pixel(16, 16).0[1], 255);
    }

    #[test]
    fn test_dab_clips_at_borders() {
        let brush = BrushConfig::new();
        let mut img = PreviewImage::new(16, 16, brush);
        img.dab(-5, -5, 1.0);
        img.dab(100, 100, 1.0);
        // Nothing to assert beyond not panicking; the buffer stays 16x16
        assert_eq!(img.into_image().dimensions(), (16, 16));
    }
}
