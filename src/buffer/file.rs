//! File-backed byte source.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use super::{ByteSource, SourceError, resolve_offset};

/// Random-access view of an open file. The length is discovered once by
/// seeking to the end, so the file must not grow or shrink underneath us.
#[derive(Debug)]
pub struct FileBuffer {
    file: File,
    len: u64,
}

impl FileBuffer {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        Self::new(File::open(path)?)
    }

    pub fn new(mut file: File) -> Result<Self, SourceError> {
        let len = file.seek(SeekFrom::End(0))?;
        file.seek(SeekFrom::Start(0))?;
        Ok(Self { file, len })
    }
}

impl ByteSource for FileBuffer {
    fn len(&mut self) -> Result<u64, SourceError> {
        Ok(self.len)
    }

    fn read_at(&mut self, offset: i64, buf: &mut [u8]) -> Result<usize, SourceError> {
        let start = resolve_offset(offset, self.len)?;
        self.file.seek(SeekFrom::Start(start))?;
        let mut total = 0;
        while total < buf.len() {
            let count = self.file.read(&mut buf[total..])?;
            if count == 0 {
                break;
            }
            total += count;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fixture(bytes: &[u8]) -> FileBuffer {
        let mut file = tempfile::tempfile().expect("tempfile");
        file.write_all(bytes).expect("write fixture");
        FileBuffer::new(file).expect("wrap fixture")
    }

    #[test]
    fn length_is_discovered_from_the_file() {
        let mut buffer = fixture(&[0x80, 0x01, 0x00]);
        assert_eq!(buffer.len().unwrap(), 3);
    }

    #[test]
    fn reads_are_position_independent() {
        let mut buffer = fixture(&[1, 2, 3, 4, 5]);
        let mut buf = [0u8; 2];
        assert_eq!(buffer.read_at(1, &mut buf).unwrap(), 2);
        assert_eq!(buf, [2, 3]);
        // A second read at an earlier offset must not be affected by the
        // file position the first one left behind.
        assert_eq!(buffer.read_at(0, &mut buf).unwrap(), 2);
        assert_eq!(buf, [1, 2]);
    }

    #[test]
    fn negative_offsets_read_from_the_end() {
        let mut buffer = fixture(&[1, 2, 3, 4, 5]);
        let mut buf = [0u8; 4];
        assert_eq!(buffer.read_at(-3, &mut buf).unwrap(), 3, "only three bytes remain");
        assert_eq!(&buf[..3], &[3, 4, 5]);
    }

    #[test]
    fn out_of_bounds_start_is_an_error() {
        let mut buffer = fixture(&[1, 2, 3]);
        let mut buf = [0u8; 1];
        assert!(matches!(
            buffer.read_at(7, &mut buf),
            Err(SourceError::OutOfBounds { offset: 7, len: 3 })
        ));
        assert!(matches!(
            buffer.read_at(-4, &mut buf),
            Err(SourceError::OutOfBounds { offset: -4, len: 3 })
        ));
    }
}
