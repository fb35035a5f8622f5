use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::config::GoboConfig;
use crate::error::{GoboError, Result};
use crate::utils::Point2;

// Fewer lobes fold the outline back over itself
pub const MIN_POINTS: u32 = 3;

/// Fold `angle` onto a single half-lobe.
///
/// The result is a triangular wave in `[0, π/points]`: zero at every lobe tip,
/// `π/points` at every valley, mirrored in between.
#[inline]
pub fn fold_angle(angle: f64, points: u32) -> f64 {
    let segment = PI / points as f64;
    let a = angle.rem_euclid(2.0 * segment);
    if a > segment { 2.0 * segment - a } else { a }
}

/// Radius of an N-lobed flower at `angle`.
///
/// Eases from `outer` at a tip to `inner` at a valley along a quarter sine,
/// which rounds the petals instead of producing a jagged star.
#[inline]
pub fn petal_radius(angle: f64, points: u32, outer: f64, inner: f64) -> f64 {
    let segment = PI / points as f64;
    // 0 at the tip, 1 at the valley
    let t = fold_angle(angle, points) / segment;
    outer - (outer - inner) * (t * FRAC_PI_2).sin()
}

// Petal profile for one flower on one canvas
#[derive(Debug, Clone, PartialEq)]
pub struct PetalOutline {
    points: u32,
    samples: usize,
    outer: f64,
    inner: f64,
    center: f64,
}

impl PetalOutline {
    pub fn new(points: u32, config: &GoboConfig) -> Result<Self> {
        if points < MIN_POINTS {
            return Err(GoboError::TooFewPoints(points));
        }
        config.validate()?;

        Ok(Self {
            points,
            samples: config.samples,
            outer: config.outer_radius(),
            inner: config.inner_radius(),
            center: config.center(),
        })
    }

    pub fn lobes(&self) -> u32 {
        self.points
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner
    }

    pub fn center(&self) -> Point2 {
        Point2::new(self.center, self.center)
    }

    pub fn radius(&self, angle: f64) -> f64 {
        petal_radius(angle, self.points, self.outer, self.inner)
    }

    // Sample the outline at equal angular steps, in increasing angle order
    pub fn points(&self) -> Vec<Point2> {
        (0..self.samples)
            .map(|i| {
                let angle = i as f64 / self.samples as f64 * TAU;
                let r = self.radius(angle);
                Point2::new(self.center + r * angle.cos(), self.center + r * angle.sin())
            })
            .collect()
    }
}

/// Outline of a `point_count`-lobed flower on a `canvas_size` canvas using the
/// default sample count and radius fractions.
pub fn generate(point_count: u32, canvas_size: u32) -> Result<Vec<Point2>> {
    let config = GoboConfig::with_canvas_size(canvas_size);
    Ok(PetalOutline::new(point_count, &config)?.points())
}
