//! User-facing output helpers.
//!
//! Currently this holds the decorative banners printed at the top of
//! generated scripts such as shell completions.

pub mod banner;

pub use banner::{generate_banner, OutputKind};
