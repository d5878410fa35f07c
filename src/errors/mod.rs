use thiserror::Error;

/// Errors that stop a generation before any document is produced
#[derive(Debug, Error, PartialEq)]
pub enum GenerateError {
    #[error("could not recognize team: {0}")]
    UnknownTeam(String),

    #[error("{0} cannot play themselves")]
    SameTeam(String),

    #[error("could not fetch data for {0}")]
    DataUnavailable(String),

    #[error("no team configuration for {0}")]
    MissingTeamConfig(String),
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}
