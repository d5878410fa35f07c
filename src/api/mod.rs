pub mod models;
mod nhl_client;

pub use nhl_client::NhlClient;
