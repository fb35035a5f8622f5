use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{GoboError, Result};

const DEFAULT_CANVAS_SIZE: u32 = 256;
const DEFAULT_SAMPLES: usize = 360;
const DEFAULT_OUTER_FRACTION: f64 = 0.45;
const DEFAULT_INNER_FRACTION: f64 = 0.4;
const DEFAULT_FIRST_ID: u32 = 21;

// Shape and raster parameters for a single gobo
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GoboConfig {
    /// Side length of the square canvas in pixels.
    pub canvas_size: u32,
    /// Number of angular steps around the outline.
    pub samples: usize,
    /// Lobe tip radius as a fraction of the canvas size.
    pub outer_fraction: f64,
    /// Valley radius as a fraction of the outer radius.
    pub inner_fraction: f64,
    /// Intensity of the filled flower.
    pub fill: u8,
    /// Intensity of the empty canvas.
    pub background: u8,
}

impl Default for GoboConfig {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            samples: DEFAULT_SAMPLES,
            outer_fraction: DEFAULT_OUTER_FRACTION,
            inner_fraction: DEFAULT_INNER_FRACTION,
            fill: 255,
            background: 0,
        }
    }
}

impl GoboConfig {
    pub fn with_canvas_size(canvas_size: u32) -> Self {
        Self {
            canvas_size,
            ..Self::default()
        }
    }

    pub fn outer_radius(&self) -> f64 {
        self.canvas_size as f64 * self.outer_fraction
    }

    pub fn inner_radius(&self) -> f64 {
        self.outer_radius() * self.inner_fraction
    }

    // Integer center, so odd canvases sit half a pixel up-left
    pub fn center(&self) -> f64 {
        (self.canvas_size / 2) as f64
    }

    pub fn validate(&self) -> Result<()> {
        if self.canvas_size == 0 {
            return Err(GoboError::EmptyCanvas);
        }
        if self.samples < 3 {
            return Err(GoboError::TooFewSamples(self.samples));
        }
        let outer_ok = self.outer_fraction > 0.0 && self.outer_fraction <= 0.5;
        let inner_ok = self.inner_fraction > 0.0 && self.inner_fraction <= 1.0;
        if !outer_ok || !inner_ok {
            return Err(GoboError::InvalidRadii {
                outer: self.outer_fraction,
                inner: self.inner_fraction,
            });
        }
        Ok(())
    }
}

/// A run of gobos written to sequentially numbered files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub first_id: u32,
    pub point_counts: Vec<u32>,
    pub output_dir: PathBuf,
    pub gobo: GoboConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            first_id: DEFAULT_FIRST_ID,
            point_counts: vec![3, 4, 5, 6],
            output_dir: PathBuf::from("gobos"),
            gobo: GoboConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_radii() {
        let c = GoboConfig::default();
        assert!((c.outer_radius() - 115.2).abs() < 1e-9);
        assert!((c.inner_radius() - 46.08).abs() < 1e-9);
        assert_eq!(c.center(), 128.0);
    }

    #[test]
    fn odd_canvas_center_rounds_down() {
        assert_eq!(GoboConfig::with_canvas_size(255).center(), 127.0);
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(GoboConfig::default().validate().is_ok());
        assert!(matches!(
            GoboConfig::with_canvas_size(0).validate(),
            Err(GoboError::EmptyCanvas)
        ));

        let few = GoboConfig {
            samples: 2,
            ..GoboConfig::default()
        };
        assert!(matches!(few.validate(), Err(GoboError::TooFewSamples(2))));

        let wide = GoboConfig {
            outer_fraction: 0.6,
            ..GoboConfig::default()
        };
        assert!(matches!(wide.validate(), Err(GoboError::InvalidRadii { .. })));

        let no_valley = GoboConfig {
            inner_fraction: 0.0,
            ..GoboConfig::default()
        };
        assert!(no_valley.validate().is_err());
    }

    #[test]
    fn batch_defaults_match_slots_21_to_24() {
        let b = BatchConfig::default();
        assert_eq!(b.first_id, 21);
        assert_eq!(b.point_counts, vec![3, 4, 5, 6]);
        assert_eq!(b.gobo, GoboConfig::default());
    }
}
