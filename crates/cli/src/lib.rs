#![forbid(unsafe_code)]

pub mod command;
pub mod console;
pub mod repl;

pub use command::Command;
pub use console::Console;
pub use repl::Repl;
