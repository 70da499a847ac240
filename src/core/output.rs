// Byte sinks: capabilities that open a fresh writable stream per invocation.
use std::fs::File;
use std::io::{self, Cursor, Read, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::core::error::{self, Error, ErrorKind, Phase};

/// Capability producing a newly opened writable byte stream on each
/// invocation.
///
/// `stream` starts the target fresh (a new file, an emptied buffer), so
/// repeated invocations behave like independent destinations. `reread`
/// reopens the target for reading after a copy; sinks whose target is
/// write-only fail it fast with `Unsupported`.
pub trait Output {
    fn stream(&self) -> Result<Box<dyn Write>, Error>;

    fn reread(&self) -> Result<Box<dyn Read>, Error>;
}

impl<T: Output + ?Sized> Output for &T {
    fn stream(&self) -> Result<Box<dyn Write>, Error> {
        (*self).stream()
    }

    fn reread(&self) -> Result<Box<dyn Read>, Error> {
        (*self).reread()
    }
}

/// File-backed sink; `stream` truncates, `reread` opens the same path.
pub struct FileOutput {
    path: PathBuf,
}

impl FileOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Output for FileOutput {
    fn stream(&self) -> Result<Box<dyn Write>, Error> {
        let file =
            File::create(&self.path).map_err(|err| error::from_io(err).with_path(&self.path))?;
        Ok(Box::new(file))
    }

    fn reread(&self) -> Result<Box<dyn Read>, Error> {
        let file =
            File::open(&self.path).map_err(|err| error::from_io(err).with_path(&self.path))?;
        Ok(Box::new(file))
    }
}

/// Shared in-memory sink; clones write into the same buffer.
#[derive(Clone, Default)]
pub struct BufferOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the bytes written so far.
    pub fn bytes(&self) -> Vec<u8> {
        lock_buffer(&self.buffer).clone()
    }
}

impl Output for BufferOutput {
    fn stream(&self) -> Result<Box<dyn Write>, Error> {
        lock_buffer(&self.buffer).clear();
        Ok(Box::new(BufferWriter {
            buffer: Arc::clone(&self.buffer),
        }))
    }

    fn reread(&self) -> Result<Box<dyn Read>, Error> {
        Ok(Box::new(Cursor::new(self.bytes())))
    }
}

struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        lock_buffer(&self.buffer).extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn lock_buffer(buffer: &Mutex<Vec<u8>>) -> std::sync::MutexGuard<'_, Vec<u8>> {
    buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Write-only discard sink; the target cannot be reopened for reading.
pub struct SinkOutput;

impl Output for SinkOutput {
    fn stream(&self) -> Result<Box<dyn Write>, Error> {
        Ok(Box::new(io::sink()))
    }

    fn reread(&self) -> Result<Box<dyn Read>, Error> {
        Err(Error::new(ErrorKind::Unsupported)
            .with_message("sink target is write-only and cannot be reopened for reading")
            .with_phase(Phase::Reopen))
    }
}
