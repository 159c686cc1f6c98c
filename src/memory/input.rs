// Tue Oct 13 2026 - Alex

use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Start offset {offset:#x} is past the end of {path} ({size} bytes)")]
    OffsetOutOfRange {
        path: PathBuf,
        offset: usize,
        size: usize,
    },
}

enum Backing {
    Mapped(Mmap),
    Empty,
}

/// An input file mapped read-only into memory.
pub struct InputFile {
    path: PathBuf,
    backing: Backing,
}

impl InputFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let path = path.as_ref().to_path_buf();
        let io_err = |source| InputError::Io { path: path.clone(), source };

        let file = File::open(&path).map_err(io_err)?;
        let size = file.metadata().map_err(io_err)?.len();

        // Zero-length files cannot be mapped on every platform.
        let backing = if size == 0 {
            Backing::Empty
        } else {
            let mmap = unsafe { Mmap::map(&file) }.map_err(io_err)?;
            Backing::Mapped(mmap)
        };

        Ok(Self { path, backing })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> String {
        self.path.display().to_string()
    }

    pub fn size(&self) -> usize {
        self.as_slice().len()
    }

    pub fn as_slice(&self) -> &[u8] {
        match &self.backing {
            Backing::Mapped(mmap) => mmap.as_ref(),
            Backing::Empty => &[],
        }
    }

    /// Bytes from `offset`, at most `length` of them when given.
    pub fn slice(&self, offset: usize, length: Option<usize>) -> Result<&[u8], InputError> {
        let data = self.as_slice();
        if offset > data.len() {
            return Err(InputError::OffsetOutOfRange {
                path: self.path.clone(),
                offset,
                size: data.len(),
            });
        }

        let rest = &data[offset..];
        Ok(match length {
            Some(len) => &rest[..len.min(rest.len())],
            None => rest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_input(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_open_and_read() {
        let tmp = temp_input(&[0x01, 0x02, 0x03]);
        let input = InputFile::open(tmp.path()).unwrap();

        assert_eq!(input.size(), 3);
        assert_eq!(input.as_slice(), &[0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_empty_file() {
        let tmp = temp_input(&[]);
        let input = InputFile::open(tmp.path()).unwrap();

        assert_eq!(input.size(), 0);
        assert!(input.as_slice().is_empty());
    }

    #[test]
    fn test_slice_bounds() {
        let tmp = temp_input(&[0xAA, 0xBB, 0xCC, 0xDD]);
        let input = InputFile::open(tmp.path()).unwrap();

        assert_eq!(input.slice(1, Some(2)).unwrap(), &[0xBB, 0xCC]);
        assert_eq!(input.slice(2, Some(100)).unwrap(), &[0xCC, 0xDD]);
        assert_eq!(input.slice(4, None).unwrap(), &[] as &[u8]);
        assert!(matches!(
            input.slice(5, None),
            Err(InputError::OffsetOutOfRange { offset: 5, size: 4, .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = InputFile::open("/nonexistent/reven/input.bin");
        assert!(matches!(result, Err(InputError::Io { .. })));
    }
}
