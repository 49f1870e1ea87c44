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

// Print the scheduled dab positions of each preview shape as ASCII art.

use dabcore::brush::DabRenderer;
use dabcore::preview::{BrushPreview, PreviewShape};

struct AsciiCanvas {
    width: i32,
    height: i32,
    cells: Vec<char>,
}

impl AsciiCanvas {
    fn new(width: i32, height: i32) -> AsciiCanvas {
        AsciiCanvas {
            width,
            height,
            cells: vec![' '; (width * height) as usize],
        }
    }

    fn print(&self) {
        for row in self.cells.chunks(self.width as usize) {
            println!("{}", row.iter().collect::<String>());
        }
    }
}

impl DabRenderer for AsciiCanvas {
    fn dab(&mut self, x: i32, y: i32, pressure: f32) {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return;
        }
        let symbol = if pressure > 0.66 {
            '@'
        } else if pressure > 0.33 {
            'o'
        } else {
            '.'
        };
        self.cells[(y * self.width + x) as usize] = symbol;
    }
}

fn main() {
    let mut bp = BrushPreview::new(72, 24);
    bp.set_size(4.0);
    bp.set_spacing(50.0);

    for shape in [
        PreviewShape::Stroke,
        PreviewShape::Line,
        PreviewShape::Rectangle,
    ] {
        bp.set_shape(shape);
        println!("{:?}:", shape);
        let mut canvas = AsciiCanvas::new(72, 24);
        bp.render_to(&mut canvas);
        canvas.print();
        println!();
    }
}
