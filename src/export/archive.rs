// Archive backends for the project bundle

use crate::error::Result;

/// One-line notice attached to the HTML artifact when no archive backend
/// can be used
pub const FALLBACK_NOTICE: &str =
    "ZIP export requires an archive backend. Downloading HTML file instead.";

/// Accumulates named entries and produces the archive bytes
pub trait ArchiveWriter {
    fn add_file(&mut self, name: &str, contents: &[u8]) -> Result<()>;

    fn finish(self: Box<Self>) -> Result<Vec<u8>>;
}

/// Whether this build carries an archive backend
pub fn available() -> bool {
    cfg!(feature = "archive")
}

/// A fresh writer, or `None` when archives are disabled or unsupported
pub fn writer(enabled: bool) -> Option<Box<dyn ArchiveWriter>> {
    if !enabled {
        return None;
    }
    backend()
}

#[cfg(feature = "archive")]
fn backend() -> Option<Box<dyn ArchiveWriter>> {
    Some(Box::new(zip_backend::ZipArchiveWriter::new()))
}

#[cfg(not(feature = "archive"))]
fn backend() -> Option<Box<dyn ArchiveWriter>> {
    None
}

#[cfg(feature = "archive")]
pub use zip_backend::ZipArchiveWriter;

#[cfg(feature = "archive")]
mod zip_backend {
    use super::ArchiveWriter;
    use crate::error::Result;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;
    use zip::{CompressionMethod, ZipWriter};

    /// Deflate-compressed ZIP archive held in memory
    pub struct ZipArchiveWriter {
        zip: ZipWriter<Cursor<Vec<u8>>>,
    }

    impl ZipArchiveWriter {
        pub fn new() -> Self {
            Self {
                zip: ZipWriter::new(Cursor::new(Vec::new())),
            }
        }
    }

    impl Default for ZipArchiveWriter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ArchiveWriter for ZipArchiveWriter {
        fn add_file(&mut self, name: &str, contents: &[u8]) -> Result<()> {
            let options =
                SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
            self.zip.start_file(name, options)?;
            self.zip.write_all(contents)?;
            Ok(())
        }

        fn finish(self: Box<Self>) -> Result<Vec<u8>> {
            let this = *self;
            let cursor = this.zip.finish()?;
            Ok(cursor.into_inner())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_writer_is_none() {
        assert!(writer(false).is_none());
    }

    #[test]
    fn test_writer_follows_feature() {
        assert_eq!(writer(true).is_some(), available());
    }

    #[cfg(feature = "archive")]
    #[test]
    fn test_zip_round_trip() {
        use std::io::{Cursor, Read};

        let mut writer = writer(true).unwrap();
        writer.add_file("hello.txt", b"hello").unwrap();
        writer.add_file("dir/world.txt", b"world").unwrap();
        let bytes = writer.finish().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        let mut contents = String::new();
        archive
            .by_name("dir/world.txt")
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "world");
    }
}
