pub mod finland;
pub mod loader;
pub mod logging;
pub mod report;

pub use loader::{ScheduleLoader, ScheduleLoaderError, ScheduleParameters, TaxBracketRecord};
