//! Line-oriented destination for access-log lines and credential warnings.

use once_cell::sync::Lazy;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Cloneable handle to a shared writer. Each line is written with a single
/// call while the lock is held, so concurrent lines never interleave.
#[derive(Clone)]
pub struct Output {
    writer: SharedWriter,
}

impl Output {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn sink() -> Self {
        Self::new(io::sink())
    }

    /// An output backed by memory, plus a handle to read what was written.
    pub fn buffer() -> (Self, OutputBuffer) {
        let buffer = OutputBuffer::default();
        (Self::new(buffer.clone()), buffer)
    }

    pub(crate) fn write_line(&self, line: fmt::Arguments<'_>) {
        let line = format!("{line}\n");
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writer.write_all(line.as_bytes()).and_then(|()| writer.flush()) {
            tracing::warn!(error = %err, "failed to write output line");
        }
    }

    pub(crate) fn warn(&self, message: impl fmt::Display) {
        self.write_line(format_args!("warn: {message}"));
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output").finish_non_exhaustive()
    }
}

/// Shared in-memory buffer written by [`Output::buffer`].
#[derive(Clone, Debug, Default)]
pub struct OutputBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl OutputBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

static DEFAULT_OUTPUT: Lazy<RwLock<Output>> = Lazy::new(|| RwLock::new(Output::stdout()));

/// The process-wide output new interceptors write to unless given their own.
pub fn output() -> Output {
    DEFAULT_OUTPUT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replaces the process-wide output.
///
/// Interceptors capture the output when they are built, so call this during
/// startup, before building the chain.
pub fn set_output(output: Output) {
    *DEFAULT_OUTPUT.write().unwrap_or_else(PoisonError::into_inner) = output;
}

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;
