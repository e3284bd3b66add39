pub mod macros;
pub mod structs;

pub use structs::Direction;
pub use structs::Input;
pub use structs::Notification;
pub use structs::Phase;
pub use structs::Prompt;
pub use structs::StepResult;
