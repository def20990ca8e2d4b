//! Command implementations

mod receipt_file;
mod score;
mod serve;
mod spec;
mod validate;

pub use score::score;
pub use serve::serve;
pub use spec::spec;
pub use validate::validate;
