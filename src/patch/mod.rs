mod anchors;
mod engine;
pub mod render;
mod template;

pub use anchors::{normalize_label, Anchors};
pub use engine::{HeaderData, PatchEngine, PatchOutcome, Stage};
pub use template::{Scope, Side, SlotKey, Template};
