pub mod export;
pub mod logging;
pub mod report;
pub mod validate;

pub use export::{export_filename, export_for_tier, to_csv_bytes, write_csv};
pub use report::{rank_keywords, RankedRow};
pub use validate::validate_selection;
