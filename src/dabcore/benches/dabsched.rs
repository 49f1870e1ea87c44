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

use criterion::{criterion_group, criterion_main, Criterion};
use dabcore::brush::{schedule_dabs, PathPoint};
use dabcore::preview::{BrushPreview, PreviewShape};

fn scheduler_benchmark(c: &mut Criterion) {
    let points: Vec<PathPoint> = (0..10_000)
        .map(|x| PathPoint {
            x: x as f32,
            y: ((x as f32) * 0.05).sin() * 40.0,
            pressure: 1.0,
        })
        .collect();

    c.bench_function("schedule long stroke", |b| {
        b.iter(|| schedule_dabs(&points, 12))
    });

    c.bench_function("schedule dense stroke", |b| {
        b.iter(|| schedule_dabs(&points, 0))
    });
}

fn preview_benchmark(c: &mut Criterion) {
    c.bench_function("regenerate stroke preview", |b| {
        let mut bp = BrushPreview::new(512, 256);
        bp.set_size(10.0);
        b.iter(|| bp.set_spacing(15.0))
    });

    c.bench_function("regenerate rectangle preview", |b| {
        let mut bp = BrushPreview::new(512, 256);
        bp.set_size(10.0);
        bp.set_shape(PreviewShape::Rectangle);
        b.iter(|| bp.set_spacing(15.0))
    });
}

criterion_group!(benches, scheduler_benchmark, preview_benchmark);
criterion_main!(benches);
