mod craftnet_error;
mod dashboard_error;
mod storage_error;

pub use craftnet_error::{CraftnetError, CraftnetResult};
pub use dashboard_error::DashboardError;
pub use storage_error::StorageError;
