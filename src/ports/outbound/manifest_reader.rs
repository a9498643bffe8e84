use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for reading the pom.xml a recommendation is requested for
pub trait ManifestReader {
    /// Reads the raw manifest text
    ///
    /// # Errors
    /// Returns an error if the manifest does not exist or cannot be read
    fn read_manifest(&self, path: &Path) -> Result<String>;
}
