pub mod in_memory;
pub mod interfaces;
mod mappers;
pub mod sqlite;
