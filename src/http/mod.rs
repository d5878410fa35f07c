mod client;

pub use client::{FetchClient, Fetcher};

#[cfg(test)]
pub(crate) use client::testing;
