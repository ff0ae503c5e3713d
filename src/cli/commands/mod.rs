pub mod add;
pub mod config;
pub mod shell;
pub mod span;
pub mod sum;
