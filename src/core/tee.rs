// Tee copying: drain a source into a sink, then expose the sink's target as a source.
use std::io::{self, Read, Write};

use tracing::debug;

use crate::core::error::{self, Error, ErrorKind, Phase};
use crate::core::input::Input;
use crate::core::output::Output;

/// Default copy chunk size in bytes.
pub const DEFAULT_CHUNK: usize = 16 * 1024;

/// Copies a source into a sink and reads the result back from the sink's
/// target.
///
/// A `Tee` holds no residual state between invocations; every `copy` opens
/// fresh streams and transfers everything again. Callers wanting at-most-once
/// copying wrap the count in a [`Sticky`](crate::core::scalar::Sticky):
///
/// ```
/// use siphon::core::input::BytesInput;
/// use siphon::core::output::BufferOutput;
/// use siphon::core::scalar::{Scalar, Sticky};
/// use siphon::core::tee::Tee;
///
/// let target = BufferOutput::new();
/// let tee = Tee::new(BytesInput::from("once"), &target);
/// let copy_once = Sticky::new(|| tee.copy());
/// copy_once.value().unwrap();
/// copy_once.value().unwrap();
/// assert_eq!(target.bytes(), b"once");
/// ```
pub struct Tee<I, O> {
    source: I,
    target: O,
    chunk: usize,
}

impl<I: Input, O: Output> Tee<I, O> {
    pub fn new(source: I, target: O) -> Self {
        Self {
            source,
            target,
            chunk: DEFAULT_CHUNK,
        }
    }

    /// Override the copy chunk size. Zero is rejected at copy time.
    pub fn with_chunk(mut self, chunk: usize) -> Self {
        self.chunk = chunk;
        self
    }

    /// Copy every byte from the source to the sink and return the byte count.
    ///
    /// Opens the source, then the sink, loops fixed-size reads until EOF
    /// (a short read never ends the copy), writes each chunk fully before
    /// the next read, and flushes the sink. Both streams are owned locals,
    /// so they are dropped (closed) on every exit path, including mid-copy
    /// failures. Failures carry the [`Phase`] they occurred in.
    pub fn copy(&self) -> Result<u64, Error> {
        if self.chunk == 0 {
            return Err(Error::new(ErrorKind::Usage).with_message("chunk size must be >= 1"));
        }
        let mut reader = self
            .source
            .stream()
            .map_err(|err| fail(err.with_phase(Phase::OpenSource)))?;
        let mut writer = self
            .target
            .stream()
            .map_err(|err| fail(err.with_phase(Phase::OpenSink)))?;
        let copied = drain(reader.as_mut(), writer.as_mut(), self.chunk).map_err(fail)?;
        debug!(bytes = copied, "tee copy complete");
        Ok(copied)
    }

    /// Copy, then reopen the sink's target so the returned stream yields
    /// exactly the bytes that were written, including any transform the
    /// sink itself applied.
    pub fn stream(&self) -> Result<Box<dyn Read>, Error> {
        self.copy()?;
        self.target
            .reread()
            .map_err(|err| fail(err.with_phase(Phase::Reopen)))
    }
}

impl<I: Input, O: Output> Input for Tee<I, O> {
    fn stream(&self) -> Result<Box<dyn Read>, Error> {
        Tee::stream(self)
    }
}

// Every phase-tagged failure emits one debug event before propagating.
fn fail(err: Error) -> Error {
    debug!(%err, "tee copy failed");
    err
}

fn drain(reader: &mut dyn Read, writer: &mut dyn Write, chunk: usize) -> Result<u64, Error> {
    let mut buf = vec![0u8; chunk];
    let mut total = 0u64;
    loop {
        let read = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(error::from_io(err).with_phase(Phase::Read)),
        };
        writer
            .write_all(&buf[..read])
            .map_err(|err| error::from_io(err).with_phase(Phase::Write))?;
        total += read as u64;
    }
    writer
        .flush()
        .map_err(|err| error::from_io(err).with_phase(Phase::Flush))?;
    Ok(total)
}
