pub mod controller;
pub mod dispatch;
pub mod enums;
pub mod errors;
pub mod pattern;
pub mod request;
pub mod response;
pub mod signal;
pub mod table;

pub use controller::{Controller, Exchange, FnHandler, Handler, HandlerReply, Resolution};
pub use dispatch::{
    CaptureMode, DispatchMode, Dispatcher, DispatcherOptions, DispatcherOptionsBuilder,
    DispatcherOptionsError, Outcome,
};
pub use enums::HttpMethod;
pub use errors::{DispatchError, DispatchResult};
pub use pattern::{CompiledPattern, PatternError, PlaceholderPolicy};
pub use request::{AcceptEntry, RequestContext};
pub use response::{EmitError, EmitResult, Response};
pub use signal::{SignalError, StatusCategory, StatusSignal};
pub use table::{Route, RoutingTable};
