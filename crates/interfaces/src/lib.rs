pub mod terminal;
pub mod traits;

pub use terminal::TerminalInterface;
pub use traits::{normalize_answer, Interface};
