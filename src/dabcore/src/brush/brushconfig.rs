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

use crate::paint::Color;

/// An attribute's values at zero and full pen pressure.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Range(pub f32, pub f32);

impl Range {
    pub fn lerp(self, alpha: f32) -> f32 {
        (self.1 - self.0) * alpha + self.0
    }
}

impl From<(f32, f32)> for Range {
    fn from(r: (f32, f32)) -> Self {
        Range(r.0, r.1)
    }
}

/// A brush attribute that is either fixed or driven by pen pressure.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum BrushParam {
    Fixed(f32),
    PressureRange(Range),
}

impl BrushParam {
    /// The attribute's value at pressure `p`
    pub fn at(self, p: f32) -> f32 {
        debug_assert!((0.0..=1.0).contains(&p));
        match self {
            BrushParam::Fixed(v) => v,
            BrushParam::PressureRange(r) => r.lerp(p),
        }
    }

    /// Replace the full-pressure value, keeping the pressure response
    pub fn with_value(self, v: f32) -> Self {
        match self {
            BrushParam::Fixed(_) => BrushParam::Fixed(v),
            BrushParam::PressureRange(Range(lo, _)) => BrushParam::PressureRange(Range(lo, v)),
        }
    }

    /// Enable or disable the pressure response.
    ///
    /// Disabling locks the attribute at its current full-pressure value.
    /// Enabling makes the attribute fade to zero as the pen is lifted.
    pub fn with_pressure(self, enable: bool) -> Self {
        let full = self.at(1.0);
        if enable {
            BrushParam::PressureRange(Range(0.0, full))
        } else {
            BrushParam::Fixed(full)
        }
    }

    pub fn is_pressure(self) -> bool {
        matches!(self, BrushParam::PressureRange(_))
    }
}

/// The dab color, either fixed or interpolated between a low and a
/// high pressure endpoint.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ColorParam {
    Fixed(Color),
    PressureRange(Color, Color),
}

impl ColorParam {
    pub fn at(self, p: f32) -> Color {
        debug_assert!((0.0..=1.0).contains(&p));
        match self {
            ColorParam::Fixed(c) => c,
            ColorParam::PressureRange(lo, hi) => lo.lerp(&hi, p),
        }
    }

    pub fn is_pressure(self) -> bool {
        matches!(self, ColorParam::PressureRange(..))
    }
}

/// The parameters of a preview brush.
///
/// Dab placement only depends on the full-pressure radius and the spacing;
/// the rest is evaluated per dab by whatever renders them.
#[derive(Clone, Copy)]
pub struct BrushConfig {
    /// Brush radius in pixels
    pub size: BrushParam,

    /// Dab opacity
    pub opacity: BrushParam,

    /// Dab edge hardness
    pub hardness: BrushParam,

    /// Distance between dabs as a percentage of the radius
    pub spacing: f32,

    /// Dab color
    pub color: ColorParam,
}

impl Default for BrushConfig {
    fn default() -> Self {
        BrushConfig {
            size: BrushParam::Fixed(1.0),
            opacity: BrushParam::Fixed(1.0),
            hardness: BrushParam::Fixed(1.0),
            spacing: 10.0,
            color: ColorParam::Fixed(Color::BLACK),
        }
    }
}

impl BrushConfig {
    pub fn new() -> BrushConfig {
        BrushConfig::default()
    }

    pub fn size_at(&self, p: f32) -> f32 {
        self.size.at(p)
    }

    pub fn opacity_at(&self, p: f32) -> f32 {
        self.opacity.at(p)
    }

    pub fn hardness_at(&self, p: f32) -> f32 {
        self.hardness.at(p)
    }

    pub fn color_at(&self, p: f32) -> Color {
        self.color.at(p)
    }

    /// The dab spacing threshold in pixels, at full pressure.
    ///
    /// Truncates toward zero, like the integer division it replaces.
    pub fn spacing_px(&self) -> i32 {
        debug_assert!((0.0..=100.0).contains(&self.spacing));
        (self.spacing * self.size.at(1.0) / 100.0) as i32
    }
}
