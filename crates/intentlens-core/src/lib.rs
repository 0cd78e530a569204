pub mod config_manager;
pub mod error;
pub mod market_registry;
pub mod session;
pub mod types;

pub use config_manager::*;
pub use error::*;
pub use market_registry::*;
pub use session::*;
pub use types::*;
