pub mod close_session;
pub mod drain_narration_commands;
pub mod get_session;
pub mod navigate;
pub mod open_session;
pub mod replace_instructions;
pub mod report_narration_event;
pub mod set_narration;
