use std::fmt;
use std::path::PathBuf;

use log::{debug, info};

use crate::config::BatchConfig;
use crate::error::{GoboError, Result};
use crate::output::{gobo_file_name, save_gobo};
use crate::raster::render_flower;

// One written gobo
#[derive(Debug, Clone, PartialEq)]
pub struct GoboRecord {
    pub id: u32,
    pub points: u32,
    pub path: PathBuf,
}

impl fmt::Display for GoboRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created {} ({}-pointed flower)",
            gobo_file_name(self.id),
            self.points
        )
    }
}

/// Render every point count in `batch` and save them under consecutive ids.
///
/// Runs sequentially and stops at the first failure; gobos written before it
/// stay on disk.
pub fn run_batch(batch: &BatchConfig) -> Result<Vec<GoboRecord>> {
    run_batch_with(batch, |_| {})
}

/// Like [`run_batch`], calling `on_written` as soon as each file is on disk.
pub fn run_batch_with<F>(batch: &BatchConfig, mut on_written: F) -> Result<Vec<GoboRecord>>
where
    F: FnMut(&GoboRecord),
{
    batch.gobo.validate()?;
    // last id must fit before anything is written
    let count = batch.point_counts.len();
    if count > 0 {
        u32::try_from(count - 1)
            .ok()
            .and_then(|n| batch.first_id.checked_add(n))
            .ok_or(GoboError::IdOverflow {
                first_id: batch.first_id,
                count,
            })?;
    }
    debug!("batch config: {:?}", batch);

    let mut records = Vec::with_capacity(count);
    for (i, &points) in batch.point_counts.iter().enumerate() {
        let id = batch.first_id + i as u32;
        let image = render_flower(points, &batch.gobo)?;
        let path = save_gobo(&image, &batch.output_dir, id)?;
        info!("wrote {} ({} points)", path.display(), points);
        let record = GoboRecord { id, points, path };
        on_written(&record);
        records.push(record);
    }
    Ok(records)
}
