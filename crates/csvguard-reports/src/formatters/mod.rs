pub mod rules;
pub mod stdout;
