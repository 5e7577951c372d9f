use std::fmt;
use std::io::{self, Cursor, Read, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Standard input, output and error of a command.
pub struct IoStreams {
    /// Where input is read from.
    pub input: Box<dyn Read + Send>,
    /// Where regular output goes.
    pub out: Box<dyn Write + Send>,
    /// Where diagnostics go.
    pub err_out: Box<dyn Write + Send>,
}

impl IoStreams {
    /// Bundle arbitrary streams.
    pub fn new(
        input: impl Read + Send + 'static,
        out: impl Write + Send + 'static,
        err_out: impl Write + Send + 'static,
    ) -> Self {
        Self {
            input: Box::new(input),
            out: Box::new(out),
            err_out: Box::new(err_out),
        }
    }

    /// The process's stdin, stdout and stderr.
    #[must_use]
    pub fn system() -> Self {
        Self::new(io::stdin(), io::stdout(), io::stderr())
    }

    /// Streams reading from `input` and capturing both outputs.
    ///
    /// # Examples
    ///
    /// ```
    /// use devctl::context::IoStreams;
    /// use std::io::Write;
    ///
    /// let (mut streams, out, err) = IoStreams::in_memory("");
    /// writeln!(streams.out, "hello").unwrap();
    /// assert_eq!(out.contents(), "hello\n");
    /// assert!(err.contents().is_empty());
    /// ```
    #[must_use]
    pub fn in_memory(input: &str) -> (Self, SharedBuffer, SharedBuffer) {
        let out = SharedBuffer::new();
        let err_out = SharedBuffer::new();
        let streams = Self::new(
            Cursor::new(input.as_bytes().to_vec()),
            out.clone(),
            err_out.clone(),
        );
        (streams, out, err_out)
    }
}

impl Default for IoStreams {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for IoStreams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IoStreams").finish_non_exhaustive()
    }
}

/// A cloneable in-memory writer; all clones share one buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        let bytes = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
