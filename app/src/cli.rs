use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use gobo_core::BatchConfig;

/// Render flower/star gobos to numbered PNG files
#[derive(Parser, Debug, Default)]
#[command(name = "gobos", version, about)]
pub struct Cli {
    /// TOML file with a batch configuration; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the PNG files are written to
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Id of the first gobo; later ones count up from here
    #[arg(long)]
    pub first_id: Option<u32>,

    /// Petal counts, one gobo each, e.g. `--points 3,4,5,6`
    #[arg(short, long, value_delimiter = ',')]
    pub points: Option<Vec<u32>>,

    /// Canvas side length in pixels
    #[arg(short, long)]
    pub size: Option<u32>,

    /// Outline resolution (angular samples per flower)
    #[arg(long)]
    pub samples: Option<usize>,
}

impl Cli {
    // Defaults, then the config file, then explicit flags
    pub fn batch_config(&self) -> Result<BatchConfig> {
        let mut batch = match &self.config {
            Some(path) => load_config(path)?,
            None => BatchConfig::default(),
        };

        if let Some(dir) = &self.out_dir {
            batch.output_dir = dir.clone();
        }
        if let Some(id) = self.first_id {
            batch.first_id = id;
        }
        if let Some(points) = &self.points {
            batch.point_counts = points.clone();
        }
        if let Some(size) = self.size {
            batch.gobo.canvas_size = size;
        }
        if let Some(samples) = self.samples {
            batch.gobo.samples = samples;
        }
        Ok(batch)
    }
}

pub fn load_config(path: &Path) -> Result<BatchConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn no_flags_is_default_batch() {
        let cli = Cli::parse_from(["gobos"]);
        assert_eq!(cli.batch_config().unwrap(), BatchConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "gobos", "--points", "7,8", "--first-id", "30", "--size", "128", "-o", "out",
        ]);
        let batch = cli.batch_config().unwrap();
        assert_eq!(batch.point_counts, vec![7, 8]);
        assert_eq!(batch.first_id, 30);
        assert_eq!(batch.gobo.canvas_size, 128);
        assert_eq!(batch.output_dir, PathBuf::from("out"));
        assert_eq!(batch.gobo.samples, 360);
    }

    #[test]
    fn config_file_then_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
first_id = 50
point_counts = [5]

[gobo]
samples = 720
inner_fraction = 0.6
"#
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = Cli::parse_from(["gobos", "--config", &path, "--first-id", "60"]);
        let batch = cli.batch_config().unwrap();
        assert_eq!(batch.first_id, 60);
        assert_eq!(batch.point_counts, vec![5]);
        assert_eq!(batch.gobo.samples, 720);
        assert_eq!(batch.gobo.inner_fraction, 0.6);
        // untouched keys keep their defaults
        assert_eq!(batch.gobo.canvas_size, 256);
        assert_eq!(batch.output_dir, PathBuf::from("gobos"));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/gobos.toml")),
            ..Cli::default()
        };
        let err = cli.batch_config().unwrap_err();
        assert!(err.to_string().contains("cannot read config file"));
    }
}
