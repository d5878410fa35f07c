pub mod settings;
pub mod teams;

pub use settings::AppConfig;
pub use teams::TeamDirectory;
