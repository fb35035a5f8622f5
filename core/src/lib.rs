// core holds the petal outline generator, the rasteriser and the batch driver
pub mod batch;
pub mod config;
pub mod error;
pub mod output;
pub mod petal;
pub mod raster;
pub mod utils;

pub use batch::{GoboRecord, run_batch, run_batch_with};
pub use config::{BatchConfig, GoboConfig};
pub use error::{GoboError, Result};
pub use petal::{PetalOutline, fold_angle, generate, petal_radius};
pub use raster::{count_regions, fill_polygon, new_canvas, render_flower};
pub use utils::Point2;
