use std::{
    fs,
    io::{prelude::*, Seek},
    path::Path,
};
use zip::read::ZipArchive;

use crate::LoadError;

/// Represents an archive of roms
/// it gives access to every rom stored in a ZIP archive.
pub struct RomArchives<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> RomArchives<R> {
    /// Will open the given zip archive
    pub fn new(reader: R) -> Result<Self, LoadError> {
        let archive = ZipArchive::new(reader).map_err(|err| LoadError::Archive(err.to_string()))?;
        Ok(RomArchives { archive })
    }

    /// Will return all the rom names available to be chosen
    pub fn file_names(&self) -> Vec<&'_ str> {
        self.archive.file_names().collect()
    }

    /// Will decompress the rom with the given name from the zip archive
    pub fn get_file_data(&mut self, name: &str) -> Result<Rom, LoadError> {
        let mut file = self
            .archive
            .by_name(name)
            .map_err(|err| LoadError::Archive(err.to_string()))?;
        let mut data = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut data)
            .map_err(|err| LoadError::Archive(err.to_string()))?;
        Ok(Rom::new(name, data))
    }
}

impl RomArchives<fs::File> {
    /// Will open the zip archive at the given location
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|err| LoadError::Unreadable {
            name: path.display().to_string(),
            reason: err.to_string(),
        })?;
        Self::new(file)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a single rom with it's information
pub struct Rom {
    /// The rom name
    name: String,
    /// The raw program image, loaded verbatim to the program start
    data: Box<[u8]>,
}

impl Rom {
    /// Will generate a new rom based of the given data
    pub fn new<D: Into<Box<[u8]>>>(name: &str, data: D) -> Self {
        Rom {
            name: name.to_string(),
            data: data.into(),
        }
    }

    /// Will read the rom from the given file, the file name is used as the rom name
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let data = fs::read(path).map_err(|err| LoadError::Unreadable {
            name: name.clone(),
            reason: err.to_string(),
        })?;
        log::debug!("read {} bytes from {}", data.len(), path.display());
        Ok(Rom::new(&name, data))
    }

    /// Will return a slice internal values of the given data
    pub fn get_data(&self) -> &[u8] {
        &self.data
    }

    /// Will return the name of the rom.
    pub fn get_name(&self) -> &str {
        &self.name
    }
}
