//! File format detection for syntax-highlight hints

use serde::{Deserialize, Serialize};

/// Formats recognised when rendering review documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    Markdown,
    Rust,
    Toml,
    Yaml,
    Json,
    Python,
    JavaScript,
    TypeScript,
    Shell,
    PowerShell,
    PlainText,
}

impl Format {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "md" | "markdown" => Some(Self::Markdown),
            "rs" => Some(Self::Rust),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "py" => Some(Self::Python),
            "js" => Some(Self::JavaScript),
            "ts" => Some(Self::TypeScript),
            "sh" | "bash" => Some(Self::Shell),
            "ps1" => Some(Self::PowerShell),
            "txt" | "text" => Some(Self::PlainText),
            _ => None,
        }
    }

    /// Detect format from a path's final extension
    pub fn from_path(path: &str) -> Option<Self> {
        let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        let idx = name.rfind('.')?;
        if idx == 0 {
            return None;
        }
        Self::from_extension(&name[idx + 1..])
    }

    /// Info string for a fenced code block
    pub fn language_hint(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Rust => "rust",
            Self::Toml => "toml",
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Shell => "bash",
            Self::PowerShell => "powershell",
            Self::PlainText => "text",
        }
    }
}

/// Code-fence language hint for a path; empty when the extension is unknown.
pub fn language_hint(path: &str) -> &'static str {
    Format::from_path(path).map_or("", |format| format.language_hint())
}
