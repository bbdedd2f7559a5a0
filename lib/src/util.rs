pub mod dirs;
pub mod shell;
