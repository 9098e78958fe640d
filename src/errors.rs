use crate::pattern::PatternError;
use crate::response::EmitError;
use thiserror::Error;

/// Engine faults. HTTP outcomes are never errors; they travel as
/// [`StatusSignal`](crate::signal::StatusSignal) values inside
/// [`Outcome`](crate::dispatch::Outcome).
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Emit(#[from] EmitError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
