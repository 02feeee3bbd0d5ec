use std::path::Path;

use log::info;

use crate::error::{Error, Result};

/// Holds the data from a chip8 file as a vec of bytes
#[derive(Debug, Clone, Default)]
pub struct RomBuffer {
    buffer: Vec<u8>,
}

impl RomBuffer {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        RomBuffer { buffer: bytes }
    }

    /// Reads a whole rom file from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let buffer = std::fs::read(path)?;
        info!("read rom {} [size: {}]", path.display(), buffer.len());
        Ok(RomBuffer { buffer })
    }

    pub fn contents(&self) -> &[u8] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl TryFrom<&Path> for RomBuffer {
    type Error = Error;

    fn try_from(value: &Path) -> Result<Self> {
        RomBuffer::from_path(value)
    }
}

impl From<&[u8]> for RomBuffer {
    fn from(bytes: &[u8]) -> Self {
        RomBuffer::from_bytes(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_bytes_in_order() {
        let rom_buffer = RomBuffer::from(&[0x23, 0x20, 0x00][..]);
        assert_eq!(rom_buffer.contents(), &[0x23, 0x20, 0x00]);
        assert_eq!(rom_buffer.len(), 3);
    }

    #[test]
    fn reads_files_from_disk() {
        let path = std::env::temp_dir().join(format!("chip8-core-rom-{}.ch8", std::process::id()));
        std::fs::write(&path, [0x00, 0xE0, 0x12, 0x00]).unwrap();
        let rom_buffer = RomBuffer::try_from(path.as_path()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(rom_buffer.contents(), &[0x00, 0xE0, 0x12, 0x00]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = RomBuffer::from_path("this/rom/does/not/exist.ch8");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
