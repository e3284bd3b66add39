pub mod console;

pub use console::ConsoleInput;
pub use console::StatusDisplay;
