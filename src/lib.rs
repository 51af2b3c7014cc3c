pub mod commands;
pub mod cursor;
