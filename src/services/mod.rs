pub mod generation;

pub use generation::{Generated, GenerationRequest, GenerationService};
