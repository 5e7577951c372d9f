use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;
use crate::path::Pather;

/// What a plugin gets to work with: somewhere to write and the path
/// resolver.
pub struct PluginContext {
    /// Destination of the plugin's output.
    pub out: Box<dyn Write + Send>,
    /// Path resolver of the host.
    pub pather: Pather,
}

impl PluginContext {
    /// Create a context writing to `out`.
    pub fn new(out: impl Write + Send + 'static, pather: Pather) -> Self {
        Self {
            out: Box::new(out),
            pather,
        }
    }

    /// Directory of the plugin called `name`.
    ///
    /// # Errors
    ///
    /// Fails when the configuration root cannot be resolved.
    pub fn plugin_dir(&self, name: &str) -> Result<PathBuf> {
        self.pather.plugin(&[name])
    }
}

impl fmt::Debug for PluginContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginContext")
            .field("pather", &self.pather)
            .finish_non_exhaustive()
    }
}
