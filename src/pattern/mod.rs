mod cache;
mod compiled;
mod compiler;
mod error;

pub use cache::{DEFAULT_CACHE_CAPACITY, PatternCache};
pub use compiled::{CaptureList, CompiledPattern};
pub use compiler::{PlaceholderPolicy, compile};
pub use error::{PatternError, PatternResult};
