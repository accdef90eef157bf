pub mod config_loader;
pub mod domain;
pub mod engine;
pub mod infrastructure;

pub use domain::constants::*;
pub use domain::enums::*;
pub use domain::errors::*;
pub use domain::model::input::*;
pub use domain::model::priced_result::*;
pub use domain::model::saved_quote::*;
pub use domain::traits::*;
pub use engine::*;
pub use infrastructure::format::*;
pub use infrastructure::storage::*;
