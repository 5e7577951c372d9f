use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::env::ProcessEnv;
use crate::error::Result;
use crate::fs::{FileSystem, OsFs};
use crate::logging::Logger;
use crate::path::{InstallLayout, Pather, SystemHomeDir};
use crate::system::{OsRuntimeInfo, RuntimeInfo, RuntimeInfoGetter};

use super::IoStreams;

type SharedFs = Arc<dyn FileSystem + Send + Sync>;
type SharedRuntime = Arc<dyn RuntimeInfoGetter + Send + Sync>;

/// Dependencies shared by every command.
///
/// # Examples
///
/// ```
/// use devctl::context::{Factory, IoStreams};
/// use devctl::fs::{FileSystem, MemFs};
/// use devctl::path::{InstallLayout, Pather};
/// use std::path::PathBuf;
///
/// let (streams, _out, _err) = IoStreams::in_memory("");
/// let factory = Factory::builder()
///     .with_io(streams)
///     .with_fs(MemFs::new())
///     .with_pather(Pather::builder().with_config_root_fn(|| PathBuf::from("/cfg")).build())
///     .with_layout(InstallLayout::new("/home/u/.devctl"))
///     .build()
///     .unwrap();
///
/// let created = factory.ensure_directories().unwrap();
/// assert_eq!(created.len(), 6);
/// assert!(factory.fs().is_dir(&PathBuf::from("/cfg/sdks")));
/// ```
pub struct Factory {
    runtime: SharedRuntime,
    logger: Logger,
    pather: Pather,
    layout: InstallLayout,
    fs: SharedFs,
    streams: IoStreams,
}

impl Factory {
    /// Start building a factory from the production defaults.
    #[must_use]
    pub fn builder() -> FactoryBuilder {
        FactoryBuilder::default()
    }

    /// The platform the process runs on.
    #[must_use]
    pub fn runtime_info(&self) -> RuntimeInfo {
        self.runtime.get()
    }

    /// The logger commands report through.
    #[must_use]
    pub fn logger(&self) -> Logger {
        self.logger
    }

    /// The path resolver.
    #[must_use]
    pub fn pather(&self) -> &Pather {
        &self.pather
    }

    /// The plugin install layout.
    #[must_use]
    pub fn layout(&self) -> &InstallLayout {
        &self.layout
    }

    /// The filesystem commands must use.
    #[must_use]
    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    /// The command's standard streams.
    pub fn streams(&mut self) -> &mut IoStreams {
        &mut self.streams
    }

    /// Create the configuration root and its well-known sub-directories.
    ///
    /// Returns the directories that did not exist before, in creation order.
    ///
    /// # Errors
    ///
    /// Fails if a location cannot be resolved or a directory cannot be
    /// created.
    pub fn ensure_directories(&self) -> Result<Vec<PathBuf>> {
        let wanted = [
            self.pather.config_root(&[])?,
            self.pather.config(&[])?,
            self.pather.bin(&[])?,
            self.pather.download(&[])?,
            self.pather.sdk(&[])?,
            self.pather.plugin(&[])?,
        ];

        let mut created = Vec::new();
        for dir in wanted {
            if self.fs.is_dir(&dir) {
                continue;
            }
            log::debug!("creating directory {}", dir.display());
            self.fs.create_dir_all(&dir)?;
            created.push(dir);
        }
        Ok(created)
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("logger", &self.logger)
            .field("pather", &self.pather)
            .field("layout", &self.layout)
            .field("fs", &self.fs)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Factory`].
///
/// Anything not set explicitly falls back to the real process: system
/// streams, the OS filesystem, a default [`Pather`], the install layout
/// discovered from the environment and the compile-time platform.
#[derive(Default)]
pub struct FactoryBuilder {
    streams: Option<IoStreams>,
    fs: Option<SharedFs>,
    pather: Option<Pather>,
    layout: Option<InstallLayout>,
    runtime: Option<SharedRuntime>,
    logger: Option<Logger>,
}

impl FactoryBuilder {
    /// Use the given streams.
    #[must_use]
    pub fn with_io(mut self, streams: IoStreams) -> Self {
        self.streams = Some(streams);
        self
    }

    /// Use the given filesystem.
    #[must_use]
    pub fn with_fs(mut self, fs: impl FileSystem + Send + Sync + 'static) -> Self {
        self.fs = Some(Arc::new(fs));
        self
    }

    /// Use the given path resolver.
    #[must_use]
    pub fn with_pather(mut self, pather: Pather) -> Self {
        self.pather = Some(pather);
        self
    }

    /// Use the given install layout instead of discovering one.
    #[must_use]
    pub fn with_layout(mut self, layout: InstallLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Report a fixed platform.
    #[must_use]
    pub fn with_runtime_info(mut self, runtime: impl RuntimeInfoGetter + Send + Sync + 'static) -> Self {
        self.runtime = Some(Arc::new(runtime));
        self
    }

    /// Use the given logger.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Build the factory.
    ///
    /// # Errors
    ///
    /// Fails only when no layout was given and none can be discovered.
    pub fn build(self) -> Result<Factory> {
        let layout = match self.layout {
            Some(layout) => layout,
            None => InstallLayout::discover(&ProcessEnv, &SystemHomeDir)?,
        };

        Ok(Factory {
            runtime: self.runtime.unwrap_or_else(|| Arc::new(OsRuntimeInfo)),
            logger: self.logger.unwrap_or_default(),
            pather: self.pather.unwrap_or_default(),
            layout,
            fs: self.fs.unwrap_or_else(|| Arc::new(OsFs)),
            streams: self.streams.unwrap_or_default(),
        })
    }
}

impl fmt::Debug for FactoryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryBuilder")
            .field("pather", &self.pather)
            .field("layout", &self.layout)
            .field("logger", &self.logger)
            .finish_non_exhaustive()
    }
}
