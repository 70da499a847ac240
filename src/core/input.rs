// Byte sources: capabilities that open a fresh readable stream per invocation.
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::PathBuf;

use url::Url;

use crate::core::error::{self, Error, ErrorKind};

/// Capability producing a newly opened readable byte stream on each
/// invocation.
///
/// Nothing is opened at construction time. Ownership of the returned stream
/// passes to the caller, who drops it to close it.
pub trait Input {
    fn stream(&self) -> Result<Box<dyn Read>, Error>;
}

impl<T: Input + ?Sized> Input for &T {
    fn stream(&self) -> Result<Box<dyn Read>, Error> {
        (*self).stream()
    }
}

/// In-memory literal bytes.
pub struct BytesInput {
    bytes: Vec<u8>,
}

impl BytesInput {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl From<&str> for BytesInput {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec())
    }
}

impl From<String> for BytesInput {
    fn from(text: String) -> Self {
        Self::new(text.into_bytes())
    }
}

impl Input for BytesInput {
    fn stream(&self) -> Result<Box<dyn Read>, Error> {
        Ok(Box::new(Cursor::new(self.bytes.clone())))
    }
}

/// File-backed source; the file is opened on each `stream` call.
pub struct FileInput {
    path: PathBuf,
}

impl FileInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Input for FileInput {
    fn stream(&self) -> Result<Box<dyn Read>, Error> {
        let file =
            File::open(&self.path).map_err(|err| error::from_io(err).with_path(&self.path))?;
        Ok(Box::new(file))
    }
}

/// URI-backed source.
///
/// `file://` URIs resolve to a local path read; `http://` and `https://`
/// fetch through a blocking agent. Other schemes fail with `Unsupported`.
pub struct UriInput {
    url: Url,
}

impl UriInput {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn parse(raw: &str) -> Result<Self, Error> {
        let url = Url::parse(raw).map_err(|err| {
            Error::new(ErrorKind::Usage)
                .with_message(format!("invalid uri: {raw}"))
                .with_source(err)
        })?;
        Ok(Self { url })
    }
}

impl Input for UriInput {
    fn stream(&self) -> Result<Box<dyn Read>, Error> {
        match self.url.scheme() {
            "file" => {
                let path = self.url.to_file_path().map_err(|_| {
                    Error::new(ErrorKind::Usage)
                        .with_message(format!("file uri has no local path: {}", self.url))
                })?;
                let file =
                    File::open(&path).map_err(|err| error::from_io(err).with_path(&path))?;
                Ok(Box::new(file))
            }
            "http" | "https" => match ureq::get(self.url.as_str()).call() {
                Ok(resp) => Ok(Box::new(resp.into_reader())),
                Err(ureq::Error::Status(code, _resp)) => Err(Error::new(status_error_kind(code))
                    .with_message(format!("request failed with status {code}"))),
                Err(ureq::Error::Transport(err)) => Err(Error::new(ErrorKind::Io)
                    .with_message("request failed")
                    .with_source(err)),
            },
            other => Err(Error::new(ErrorKind::Unsupported)
                .with_message(format!("unsupported uri scheme: {other}"))),
        }
    }
}

fn status_error_kind(code: u16) -> ErrorKind {
    match code {
        401 | 403 => ErrorKind::Permission,
        404 => ErrorKind::NotFound,
        _ => ErrorKind::Io,
    }
}

#[cfg(test)]
mod tests {
    use super::{status_error_kind, BytesInput, FileInput, Input, UriInput};
    use crate::core::error::ErrorKind;
    use std::io::Read;

    #[test]
    fn bytes_input_opens_a_fresh_stream_per_call() {
        let input = BytesInput::from("twice");
        for _ in 0..2 {
            let mut text = String::new();
            input
                .stream()
                .expect("stream")
                .read_to_string(&mut text)
                .expect("read");
            assert_eq!(text, "twice");
        }
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let input = FileInput::new("/nonexistent/siphon-test-file");
        let err = input.stream().err().expect("should fail");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn unsupported_scheme_is_rejected() {
        let input = UriInput::parse("ftp://example.com/data").expect("parse");
        let err = input.stream().err().expect("should fail");
        assert_eq!(err.kind(), ErrorKind::Unsupported);
    }

    #[test]
    fn malformed_uri_is_a_usage_error() {
        let err = UriInput::parse("not a uri").err().expect("should fail");
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn status_codes_map_to_kinds() {
        assert_eq!(status_error_kind(404), ErrorKind::NotFound);
        assert_eq!(status_error_kind(403), ErrorKind::Permission);
        assert_eq!(status_error_kind(500), ErrorKind::Io);
    }
}
