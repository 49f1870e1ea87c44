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

use crate::brush::{
    schedule_dabs, stroke_pressure, BrushConfig, ColorParam, DabRenderer, DabRequest, PathPoint,
};
use crate::paint::{Color, Rectangle};

use std::f32::consts::PI;
use tracing::warn;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PreviewShape {
    Stroke,
    Line,
    Rectangle,
}

/// Live preview of the current brush settings.
///
/// Owns the brush configuration and a cached dab sequence for a synthetic
/// path through the output area. Every setter regenerates the sequence in
/// full before returning, so readers never observe partial state. Actual
/// compositing belongs to whatever `DabRenderer` the sequence is replayed
/// into.
pub struct BrushPreview {
    brush: BrushConfig,
    shape: PreviewShape,
    width: i32,
    height: i32,
    color1: Color,
    color2: Color,
    dabs: Vec<DabRequest>,
}

impl BrushPreview {
    pub fn new(width: i32, height: i32) -> BrushPreview {
        let mut bp = BrushPreview {
            brush: BrushConfig::new(),
            shape: PreviewShape::Stroke,
            width: 1,
            height: 1,
            color1: Color::BLACK,
            color2: Color::BLACK,
            dabs: Vec::new(),
        };
        bp.set_area(width, height);
        bp
    }

    pub fn brush(&self) -> &BrushConfig {
        &self.brush
    }

    pub fn shape(&self) -> PreviewShape {
        self.shape
    }

    /// The output area dimensions
    pub fn area(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// The currently scheduled dab sequence
    pub fn dabs(&self) -> &[DabRequest] {
        &self.dabs
    }

    /// Replay the scheduled dabs into a renderer
    pub fn render_to(&self, renderer: &mut dyn DabRenderer) {
        for d in &self.dabs {
            renderer.dab(d.x, d.y, d.pressure);
        }
    }

    pub fn set_shape(&mut self, shape: PreviewShape) {
        self.shape = shape;
        self.rebuild();
    }

    /// Set the output area dimensions. The host may resize at any time.
    pub fn set_area(&mut self, width: i32, height: i32) {
        if width < 1 || height < 1 {
            warn!("preview area {}x{} clamped", width, height);
        }
        self.width = width.max(1);
        self.height = height.max(1);
        self.rebuild();
    }

    /// Set the brush radius
    pub fn set_size(&mut self, radius: f32) {
        debug_assert!(radius >= 0.0);
        self.brush.size = self.brush.size.with_value(radius);
        self.rebuild();
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        debug_assert!((0.0..=1.0).contains(&opacity));
        self.brush.opacity = self.brush.opacity.with_value(opacity);
        self.rebuild();
    }

    pub fn set_hardness(&mut self, hardness: f32) {
        debug_assert!((0.0..=1.0).contains(&hardness));
        self.brush.hardness = self.brush.hardness.with_value(hardness);
        self.rebuild();
    }

    /// Set the dab spacing as a percentage of the radius
    pub fn set_spacing(&mut self, spacing: f32) {
        debug_assert!((0.0..=100.0).contains(&spacing));
        self.brush.spacing = spacing;
        self.rebuild();
    }

    pub fn set_size_pressure(&mut self, enable: bool) {
        self.brush.size = self.brush.size.with_pressure(enable);
        self.rebuild();
    }

    pub fn set_opacity_pressure(&mut self, enable: bool) {
        self.brush.opacity = self.brush.opacity.with_pressure(enable);
        self.rebuild();
    }

    pub fn set_hardness_pressure(&mut self, enable: bool) {
        self.brush.hardness = self.brush.hardness.with_pressure(enable);
        self.rebuild();
    }

    /// Set the primary color, drawn at full pressure
    pub fn set_color1(&mut self, color: Color) {
        self.color1 = color;
        self.install_color(self.color_pressure());
        self.rebuild();
    }

    /// Set the secondary color, drawn at zero pressure.
    ///
    /// Takes effect only while color pressure is enabled; the value is
    /// remembered either way.
    pub fn set_color2(&mut self, color: Color) {
        self.color2 = color;
        if self.color_pressure() {
            self.install_color(true);
            self.rebuild();
        }
    }

    pub fn set_color_pressure(&mut self, enable: bool) {
        self.install_color(enable);
        self.rebuild();
    }

    pub fn color_pressure(&self) -> bool {
        self.brush.color.is_pressure()
    }

    fn install_color(&mut self, pressure: bool) {
        self.brush.color = if pressure {
            ColorParam::PressureRange(self.color2, self.color1)
        } else {
            ColorParam::Fixed(self.color1)
        };
    }

    /// Regenerate the cached dab sequence from the current configuration.
    ///
    /// The stroke shape samples a sine wave and thins it by walked distance;
    /// the line and rectangle shapes bake the spacing into their step, so
    /// every generated point is a dab.
    fn rebuild(&mut self) {
        let rect = preview_rect(self.width, self.height);
        let threshold = self.brush.spacing_px();

        self.dabs = match self.shape {
            PreviewShape::Stroke => schedule_dabs(&make_stroke_path(rect), threshold),
            PreviewShape::Line => dab_per_point(&make_line_path(rect, threshold)),
            PreviewShape::Rectangle => dab_per_point(&make_rect_path(rect, threshold)),
        };
    }
}

/// The portion of the output area the preview path runs through
fn preview_rect(width: i32, height: i32) -> Rectangle {
    let amp = height / 4;
    Rectangle::new(
        width / 8,
        height / 2 - amp,
        (width - width / 4).max(1),
        (amp * 2).max(1),
    )
}

fn dab_per_point(points: &[PathPoint]) -> Vec<DabRequest> {
    points.iter().map(|p| DabRequest::from(*p)).collect()
}

/// One full sine period across the preview rect, with the pressure
/// following a press-hold-lift curve.
fn make_stroke_path(rect: Rectangle) -> Vec<PathPoint> {
    let w = rect.w;
    let amp = (rect.h / 2) as f32;
    let offy = (rect.y + rect.h / 2) as f32;
    let dphase = (2.0 * PI) / w as f32;
    let mut phase = 0.0f32;

    let mut points = Vec::with_capacity(w as usize);
    for x in 0..w {
        let fx = x as f32 / w as f32;
        points.push(PathPoint {
            x: (rect.x + x) as f32,
            y: offy + (phase.sin() * amp).round(),
            pressure: stroke_pressure(fx),
        });
        phase += dphase;
    }
    points
}

/// A horizontal line at constant full pressure, one point per step
fn make_line_path(rect: Rectangle, step: i32) -> Vec<PathPoint> {
    let step = step.max(1);
    let offy = (rect.y + rect.h / 2) as f32;

    let mut points = Vec::new();
    let mut x = 0;
    while x < rect.w {
        points.push(PathPoint {
            x: (rect.x + x) as f32,
            y: offy,
            pressure: 1.0,
        });
        x += step;
    }
    points
}

/// The outline of the preview rect at constant full pressure: the top and
/// bottom edges as pairs per horizontal step, then the left and right edges
/// as pairs per vertical step.
fn make_rect_path(rect: Rectangle, step: i32) -> Vec<PathPoint> {
    let step = step.max(1);
    let amp = rect.h / 2;
    let offy = rect.y + amp;
    let corner = |x: i32, y: i32| PathPoint {
        x: x as f32,
        y: y as f32,
        pressure: 1.0,
    };

    let mut points = Vec::new();
    let mut x = 0;
    while x < rect.w {
        points.push(corner(rect.x + x, offy - amp));
        points.push(corner(rect.x + x, offy + amp));
        x += step;
    }
    let mut y = -amp;
    while y < amp {
        points.push(corner(rect.x, offy + y));
        points.push(corner(rect.x + rect.w, offy + y));
        y += step;
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_rect_margins() {
        let r = preview_rect(160, 80);
        assert_eq!(r, Rectangle::new(20, 20, 120, 40));
    }

    #[test]
    fn test_stroke_path_samples_every_column() {
        let points = make_stroke_path(preview_rect(160, 80));
        assert_eq!(points.len(), 120);
        assert_eq!(points[0].x, 20.0);
        assert_eq!(points[0].y, 40.0);
        assert_eq!(points[0].pressure, 0.0);
        // consecutive columns
        for pair in points.windows(2) {
            assert_eq!(pair[1].x - pair[0].x, 1.0);
        }
    }

    #[test]
    fn test_line_path_step_coercion() {
        let points = make_line_path(preview_rect(160, 80), 0);
        assert_eq!(points.len(), 120);
        for p in &points {
            assert_eq!(p.pressure, 1.0);
        }
    }

    #[test]
    fn test_rect_path_stays_on_outline() {
        let rect = preview_rect(160, 80);
        let amp = rect.h / 2;
        let offy = rect.y + amp;
        for p in make_rect_path(rect, 5) {
            let x = p.x as i32;
            let y = p.y as i32;
            let on_horizontal = y == offy - amp || y == offy + amp;
            let on_vertical = x == rect.x || x == rect.x + rect.w;
            assert!(on_horizontal || on_vertical, "({}, {}) off outline", x, y);
        }
    }
}
