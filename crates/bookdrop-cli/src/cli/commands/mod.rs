mod completions;
mod exists;
mod resolve;

pub use completions::run_completions;
pub use exists::run_exists;
pub use resolve::run_resolve;
