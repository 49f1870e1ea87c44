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

/// A point sampled along a preview path.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PathPoint {
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
}

/// A single dab stamp decided by the scheduler.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct DabRequest {
    pub x: i32,
    pub y: i32,
    pub pressure: f32,
}

impl From<PathPoint> for DabRequest {
    fn from(p: PathPoint) -> Self {
        DabRequest {
            x: p.x as i32,
            y: p.y as i32,
            pressure: p.pressure,
        }
    }
}

/// Whatever composites dabs onto an actual surface.
///
/// The scheduler decides dab positions and pressures; shape, color and
/// blending are entirely the renderer's business.
pub trait DabRenderer {
    fn dab(&mut self, x: i32, y: i32, pressure: f32);
}

/// Pick the points along a path that get a dab.
///
/// A dab is placed whenever the distance walked since the last dab reaches
/// `threshold` pixels. Distance accumulates as the rounded Euclidean step
/// between consecutive points, keeping dab density even along a curved path
/// sampled at uniform horizontal steps.
///
/// The first point carries no walked distance, so it gets a dab only when
/// the threshold is zero, in which case every point does.
pub fn schedule_dabs(points: &[PathPoint], threshold: i32) -> Vec<DabRequest> {
    let mut dabs = Vec::new();
    let (mut last_x, mut last_y) = match points.first() {
        Some(p) => (p.x, p.y),
        None => return dabs,
    };

    let mut distance = 0;
    for p in points {
        if distance >= threshold {
            dabs.push(DabRequest::from(*p));
            distance = 0;
        } else {
            distance += (p.x - last_x).hypot(p.y - last_y).round() as i32;
        }
        last_x = p.x;
        last_y = p.y;
    }
    dabs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(n: i32) -> Vec<PathPoint> {
        (0..n)
            .map(|x| PathPoint {
                x: x as f32,
                y: 0.0,
                pressure: 1.0,
            })
            .collect()
    }

    #[test]
    fn test_empty_path() {
        assert!(schedule_dabs(&[], 0).is_empty());
        assert!(schedule_dabs(&[], 5).is_empty());
    }

    #[test]
    fn test_zero_threshold_dabs_every_point() {
        let dabs = schedule_dabs(&walk(10), 0);
        assert_eq!(dabs.len(), 10);
        for (i, d) in dabs.iter().enumerate() {
            assert_eq!(d.x, i as i32);
        }
    }

    #[test]
    fn test_threshold_spacing() {
        // Unit steps: the accumulator reaches 3 at the fourth point,
        // so the first dab lands on the fifth
        let dabs = schedule_dabs(&walk(20), 3);
        let xs: Vec<i32> = dabs.iter().map(|d| d.x).collect();
        assert_eq!(xs, vec![4, 8, 12, 16]);
    }

    #[test]
    fn test_dab_keeps_point_pressure() {
        let points = vec![
            PathPoint {
                x: 0.0,
                y: 0.0,
                pressure: 0.25,
            },
            PathPoint {
                x: 3.0,
                y: 4.0,
                pressure: 0.75,
            },
        ];
        let dabs = schedule_dabs(&points, 0);
        assert_eq!(dabs[0].pressure, 0.25);
        assert_eq!(dabs[1].pressure, 0.75);
    }

    #[test]
    fn test_diagonal_steps_round() {
        // Steps of length hypot(3,4) = 5 hit a threshold of 5 in one step,
        // so every other point gets a dab
        let points: Vec<PathPoint> = (0..6)
            .map(|i| PathPoint {
                x: (i * 3) as f32,
                y: (i * 4) as f32,
                pressure: 1.0,
            })
            .collect();
        let dabs = schedule_dabs(&points, 5);
        let xs: Vec<i32> = dabs.iter().map(|d| d.x).collect();
        assert_eq!(xs, vec![6, 12]);
    }
}
