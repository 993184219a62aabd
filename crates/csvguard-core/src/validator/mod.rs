mod context;
mod dispatch;
mod validation;

pub use context::FileContext;
pub use dispatch::dispatch;
pub use validation::Validator;
