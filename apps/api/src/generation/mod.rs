pub mod classify;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod sections;
