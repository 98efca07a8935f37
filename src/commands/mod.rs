// commands/mod.rs
// コマンド登録

pub mod maptool;
pub mod registry;

pub use registry::{CommandError, CommandGroup, CommandRegistry, Shortcut, Subcommand};
