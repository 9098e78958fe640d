use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use thiserror::Error;

/// Status classification by leading digit of the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCategory {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl StatusCategory {
    pub fn from_code(code: u16) -> Option<Self> {
        match code / 100 {
            1 => Some(Self::Informational),
            2 => Some(Self::Success),
            3 => Some(Self::Redirection),
            4 => Some(Self::ClientError),
            5 => Some(Self::ServerError),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Informational => "Informational",
            Self::Success => "Success",
            Self::Redirection => "Redirection",
            Self::ClientError => "Client Error",
            Self::ServerError => "Server Error",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignalError {
    #[error("status code {code} is outside the supported range 100..=599")]
    CodeOutOfRange { code: u16 },
    #[error("status code {code} is not a redirection; a location target is not allowed")]
    LocationNotAllowed { code: u16 },
}

/// An HTTP status outcome. Used both as a normal termination value and as the
/// terminal payload of a failed dispatch; immutable once constructed. Only
/// redirection signals carry a location target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSignal {
    code: u16,
    location: Option<String>,
}

impl StatusSignal {
    /// Total for every code in 100..=599; codes without a canonical reason
    /// phrase fall back to their category label.
    pub fn from_code(code: u16) -> Result<Self, SignalError> {
        if !(100..=599).contains(&code) {
            return Err(SignalError::CodeOutOfRange { code });
        }
        Ok(Self {
            code,
            location: None,
        })
    }

    pub fn redirect<L: Into<String>>(code: u16, location: L) -> Result<Self, SignalError> {
        let mut signal = Self::from_code(code)?;
        if signal.category() != StatusCategory::Redirection {
            return Err(SignalError::LocationNotAllowed { code });
        }
        signal.location = Some(location.into());
        Ok(signal)
    }

    pub fn ok() -> Self {
        Self {
            code: 200,
            location: None,
        }
    }

    pub fn see_other<L: Into<String>>(location: L) -> Self {
        Self {
            code: 303,
            location: Some(location.into()),
        }
    }

    pub fn forbidden() -> Self {
        Self {
            code: 403,
            location: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            code: 404,
            location: None,
        }
    }

    pub fn internal_server_error() -> Self {
        Self {
            code: 500,
            location: None,
        }
    }

    pub fn not_implemented() -> Self {
        Self {
            code: 501,
            location: None,
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn category(&self) -> StatusCategory {
        // Constructors reject codes outside 100..=599, so the leading digit
        // is always classifiable.
        StatusCategory::from_code(self.code).expect("status code within 100..=599")
    }

    pub fn reason(&self) -> &'static str {
        reason_phrase(self.code).unwrap_or_else(|| self.category().label())
    }

    pub fn status_line(&self) -> String {
        format!("HTTP/1.1 {} {}", self.code, self.reason())
    }

    /// Writes the status line, then the `Location` header for redirections.
    pub fn emit<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{}\r\n", self.status_line())?;
        if let Some(location) = &self.location {
            write!(sink, "Location: {location}\r\n")?;
        }
        Ok(())
    }
}

/// Canonical reason phrases, keyed by code.
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    let phrase = match code {
        100 => "Continue",
        101 => "Switching Protocols",
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        307 => "Temporary Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Request Entity Too Large",
        414 => "Request-URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Requested Range Not Satisfiable",
        417 => "Expectation Failed",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        _ => return None,
    };
    Some(phrase)
}
