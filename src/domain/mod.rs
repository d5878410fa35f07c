pub mod format;
pub mod models;
mod names;

pub use models::*;
pub use names::slug_to_name;
