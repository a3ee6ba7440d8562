pub mod cli;
pub mod report;
pub mod scanner;
pub mod types;
