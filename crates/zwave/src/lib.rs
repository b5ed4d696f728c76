pub mod bits;
mod command;
mod command_class;
pub mod commands;
mod error;
pub mod frame;
mod node_set;
mod registry;

pub use self::error::{Error, Result};
pub use command::Command;
pub use command_class::{command_class_name, CommandClass};
pub use commands::*;
pub use frame::{Decoded, Encode, Frame, Framing};
pub use node_set::*;
pub use registry::{
    decode, decode_all, decode_exact, frames, is_registered, registered_commands, Frames,
};
