use std::io::{self, ErrorKind, Write};

/// Sink adapter that stops writing after the first failure.
///
/// Bytes accepted by the inner writer are counted. Once a write fails, the
/// error is kept and every later write is refused without touching the inner
/// writer, so the output never continues past a hole.
#[derive(Debug)]
pub struct FailFastWriter<W> {
    inner: W,
    written: usize,
    error: Option<io::Error>,
}

impl<W: Write> FailFastWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            written: 0,
            error: None,
        }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Records `error` unless an earlier one is already recorded.
    pub fn fail(&mut self, error: io::Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Writes all of `buf`, recording any failure instead of returning it.
    pub fn emit(&mut self, buf: &[u8]) {
        if self.has_failed() {
            return;
        }
        if let Err(error) = self.write_all(buf) {
            self.fail(error);
        }
    }

    /// Byte count and first error, consuming the adapter.
    pub fn finish(self) -> (usize, Option<io::Error>) {
        (self.written, self.error)
    }
}

impl<W: Write> Write for FailFastWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(error) = &self.error {
            return Err(io::Error::new(
                error.kind(),
                "output sink failed on an earlier write",
            ));
        }
        match self.inner.write(buf) {
            Ok(n) => {
                self.written += n;
                Ok(n)
            }
            Err(error) if error.kind() == ErrorKind::Interrupted => Err(error),
            Err(error) => {
                let reported = io::Error::new(error.kind(), error.to_string());
                self.fail(error);
                Err(reported)
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.has_failed() {
            return Ok(());
        }
        self.inner.flush()
    }
}
