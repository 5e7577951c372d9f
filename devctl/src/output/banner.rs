//! Decorative FIGlet banners for generated files.
//!
//! A banner is the FIGlet rendering of a short text, every line turned into
//! a comment for the target language and framed by a dashed line above and
//! below:
//!
//! ```text
//! #  - - - - - -
//! #   _______
//! #  |__  / __|
//! #    / /\__ \
//! #   /___|___/
//! #  - - - - - -
//! ```

use std::fmt;

use figlet_rs::FIGfont;

/// The language a banner is embedded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputKind {
    /// Shell scripts, commented with `#`.
    #[default]
    Shell,
    /// YAML documents, commented with `#`.
    Yaml,
    /// Source code, commented with `//`.
    Code,
}

impl OutputKind {
    /// Comment one line, including the trailing newline.
    #[must_use]
    pub fn comment(self, line: &str) -> String {
        match self {
            Self::Shell | Self::Yaml => format!("# {line}\n"),
            Self::Code => format!("// {line}\n"),
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shell => write!(f, "shell"),
            Self::Yaml => write!(f, "yaml"),
            Self::Code => write!(f, "code"),
        }
    }
}

/// Render `text` as a commented banner for `kind`.
///
/// Never fails: when the text cannot be rendered, either because it is blank
/// or because the font has no glyph for one of its characters, the commented
/// text is returned instead.
///
/// # Examples
///
/// ```
/// use devctl::output::{generate_banner, OutputKind};
///
/// let banner = generate_banner("ZSH", OutputKind::Code);
/// assert!(banner.lines().all(|line| line.starts_with("// ")));
/// assert!(banner.ends_with(" -\n"));
/// ```
#[must_use]
pub fn generate_banner(text: &str, kind: OutputKind) -> String {
    match render(text) {
        Some(figure) => decorate(&figure, kind),
        None => {
            log::debug!("could not render banner for {text:?}, using plain text");
            plain(text, kind)
        }
    }
}

/// Whether the standard font has a glyph for `c`.
fn renderable(c: char) -> bool {
    c == ' ' || c.is_ascii_graphic()
}

fn render(text: &str) -> Option<String> {
    if text.trim().is_empty() || !text.chars().all(renderable) {
        return None;
    }
    let font = FIGfont::standard()
        .map_err(|e| log::warn!("failed to load the standard FIGlet font: {e}"))
        .ok()?;
    let figure = font.convert(text)?;
    Some(figure.to_string())
}

fn plain(text: &str, kind: OutputKind) -> String {
    if text.is_empty() {
        return kind.comment(text);
    }
    text.lines().map(|line| kind.comment(line)).collect()
}

fn decorate(figure: &str, kind: OutputKind) -> String {
    let mut rows: Vec<&str> = figure.lines().collect();
    while rows.last().is_some_and(|row| row.trim().is_empty()) {
        rows.pop();
    }
    let body: String = rows.iter().map(|line| kind.comment(line)).collect();
    if body.is_empty() {
        return kind.comment(figure);
    }

    let line = decoration_line(&body, kind);
    format!("{line}{body}{line}")
}

/// A commented row of ` -` pairs as wide as the widest commented line,
/// rounded up to an even width.
fn decoration_line(body: &str, kind: OutputKind) -> String {
    let widest = body.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut repeat = widest.saturating_sub(1);
    if widest % 2 != 0 {
        repeat += 1;
    }
    kind.comment(&" -".repeat(repeat / 2))
}
