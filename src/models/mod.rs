pub mod check;
pub mod newsletter;
pub mod prompt;

pub use check::*;
pub use newsletter::*;
pub use prompt::*;
