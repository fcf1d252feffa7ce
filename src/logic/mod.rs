pub mod clock;
pub mod commands;
pub mod growth;
