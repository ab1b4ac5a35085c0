pub mod generate;
pub mod show;
pub mod sweep;
