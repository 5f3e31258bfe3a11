//! Line-based text protocol

pub mod command;
pub mod protocol;

pub use command::{parse_command, Command, Position};
pub use protocol::{handle_command, write_cycle, Flow};
