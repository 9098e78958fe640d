mod dispatcher;
mod options;
mod outcome;

pub use dispatcher::Dispatcher;
pub use options::{
    CaptureMode, DispatchMode, DispatcherOptions, DispatcherOptionsBuilder, DispatcherOptionsError,
};
pub use outcome::Outcome;
