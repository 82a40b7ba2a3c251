use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::{
    decoder,
    error::ConfigurationError,
    structure::ControllerConfiguration,
    traits::ResolvableConfigurationWithContext,
    utilities::absolute_path,
};


/// Signature of the function a [`ConfigurationFsLoader`] reads its file with.
pub type ReadFileFn = fn(&Path) -> io::Result<Vec<u8>>;

fn read_from_filesystem(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
}



/// Loads a controller configuration file through an injected read function.
///
/// The filename is made absolute once, at construction time. That absolute
/// filename is what the read function receives, and its parent directory
/// is what relative path-valued fields are resolved against.
pub struct ConfigurationFsLoader<F> {
    read_file: F,

    filename: PathBuf,
}

impl<F> ConfigurationFsLoader<F>
where
    F: Fn(&Path) -> io::Result<Vec<u8>>,
{
    pub fn new<P: AsRef<Path>>(read_file: F, filename: P) -> Result<Self, ConfigurationError> {
        let filename = absolute_path(filename)?;

        Ok(Self {
            read_file,
            filename,
        })
    }

    /// The absolute path of the configuration file.
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Reads, decodes and path-resolves the configuration file into `target`.
    ///
    /// Every call reads the file again. `target` is only written to
    /// when the whole load succeeds.
    pub fn load(&self, target: &mut ControllerConfiguration) -> Result<(), ConfigurationError> {
        debug!(filename = %self.filename.display(), "Reading configuration file.");

        let bytes = (self.read_file)(&self.filename).map_err(|error| {
            ConfigurationError::ReadFailure {
                path: self.filename.clone(),
                source: error,
            }
        })?;

        let configuration = decoder::decode(&bytes)?;

        // The filename is absolute and cleaned, so it always has a parent.
        let configuration_directory = self.filename.parent().unwrap_or(Path::new("/"));
        let configuration = configuration.resolve(configuration_directory)?;

        *target = configuration;

        debug!(filename = %self.filename.display(), "Configuration loaded.");
        Ok(())
    }
}

impl ConfigurationFsLoader<ReadFileFn> {
    /// Creates a loader that reads `filename` from the local filesystem.
    pub fn from_filesystem<P: AsRef<Path>>(filename: P) -> Result<Self, ConfigurationError> {
        Self::new(read_from_filesystem as ReadFileFn, filename)
    }
}
