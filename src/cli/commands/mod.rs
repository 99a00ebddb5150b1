pub mod build;
pub mod check;
mod command_result;
pub mod init;
pub mod save_keys;

pub use command_result::*;
