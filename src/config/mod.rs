pub mod checklist;
pub mod settings;

pub use checklist::{CheckDefinition, DraftChecklist};
pub use settings::*;
