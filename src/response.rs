use crate::signal::{StatusSignal, reason_phrase};
use std::fmt;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("response is already terminated; no further writes are allowed")]
    AlreadyTerminated,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type EmitResult<T> = Result<T, EmitError>;

/// Lets handlers use `?` on emitter calls: a response-plumbing fault becomes
/// a 500 signal.
impl From<EmitError> for StatusSignal {
    fn from(_: EmitError) -> Self {
        StatusSignal::internal_server_error()
    }
}

/// Accumulates status, headers and body for one request, then writes them to
/// the wire sink exactly once. Owned exclusively by the dispatch call that
/// created it; `terminated` flips once and never resets.
pub struct Response<'s> {
    sink: &'s mut dyn Write,
    code: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
    terminated: bool,
}

impl<'s> Response<'s> {
    pub fn new(sink: &'s mut dyn Write) -> Self {
        Self {
            sink,
            code: 200,
            headers: Vec::new(),
            body: Vec::new(),
            terminated: false,
        }
    }

    /// Replaces the status code and the whole header mapping; headers from
    /// earlier calls are not merged in.
    pub fn write_head<I, N, V>(&mut self, code: u16, headers: I) -> EmitResult<()>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        self.ensure_open()?;
        self.code = code;
        self.headers = headers
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Ok(())
    }

    /// Appends a chunk to the buffered body.
    pub fn write(&mut self, chunk: &[u8]) -> EmitResult<()> {
        self.ensure_open()?;
        self.body.extend_from_slice(chunk);
        Ok(())
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Writes the status line, headers in insertion order, a blank line and
    /// the body, then seals the response. A second call fails with
    /// [`EmitError::AlreadyTerminated`].
    pub fn terminate(&mut self) -> EmitResult<()> {
        self.ensure_open()?;
        self.terminated = true;

        let reason = reason_phrase(self.code).unwrap_or("");
        write!(self.sink, "HTTP/1.1 {} {}\r\n", self.code, reason)?;
        for (name, value) in &self.headers {
            write!(self.sink, "{name}: {value}\r\n")?;
        }
        self.sink.write_all(b"\r\n")?;
        self.sink.write_all(&self.body)?;
        self.sink.flush()?;
        Ok(())
    }

    /// Routes a terminal [`StatusSignal`] through the same single-write gate
    /// as [`terminate`](Self::terminate): status line plus, for redirections,
    /// the `Location` header.
    pub fn emit_signal(&mut self, signal: &StatusSignal) -> EmitResult<()> {
        self.ensure_open()?;
        self.terminated = true;
        self.code = signal.code();

        signal.emit(&mut self.sink)?;
        self.sink.flush()?;
        Ok(())
    }

    fn ensure_open(&self) -> EmitResult<()> {
        if self.terminated {
            return Err(EmitError::AlreadyTerminated);
        }
        Ok(())
    }
}

impl fmt::Debug for Response<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("code", &self.code)
            .field("headers", &self.headers)
            .field("body_len", &self.body.len())
            .field("terminated", &self.terminated)
            .finish()
    }
}
