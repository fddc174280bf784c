pub mod cursor;
pub mod narration;
pub mod outbox;
pub mod parser;
pub mod ports;
pub mod services;
pub mod session;
pub mod value_objects;

pub use parser::{StepSequence, parse_steps};
pub use ports::*;
pub use session::CookingSession;
pub use value_objects::*;
