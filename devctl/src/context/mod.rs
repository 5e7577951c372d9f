//! Shared state handed to commands and plugins.
//!
//! A [`Factory`] bundles everything a command needs: the standard streams,
//! the filesystem, the [`Pather`](crate::path::Pather), the install layout,
//! the runtime platform and a logger. Tests build one with in-memory streams
//! and a [`MemFs`](crate::fs::MemFs).

mod factory;
mod plugin;
mod streams;

pub use factory::{Factory, FactoryBuilder};
pub use plugin::PluginContext;
pub use streams::{IoStreams, SharedBuffer};
