use crate::signal::StatusSignal;

/// Terminal result of one dispatch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A handler ran to completion; carries its return value.
    Completed(Option<String>),
    /// A terminal status returned to the caller; nothing was written.
    Signal(StatusSignal),
    /// A terminal status already written to the response sink.
    Emitted(StatusSignal),
}

impl Outcome {
    /// The status code for terminal signals, `None` for completed handlers.
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Completed(_) => None,
            Self::Signal(signal) | Self::Emitted(signal) => Some(signal.code()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Completed(value) => value.as_deref(),
            _ => None,
        }
    }
}
