use clap::ValueEnum;
use std::fmt::Display;

/// Container images managed by this tool.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ImageType {
    Hub,
    Notebook,
}

impl ImageType {
    /// Lowercase name used in paths, tags and commit messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::Hub => "hub",
            ImageType::Notebook => "notebook",
        }
    }

    /// Capitalized name used in changelog sub-headers.
    pub fn title(&self) -> &'static str {
        match self {
            ImageType::Hub => "Hub",
            ImageType::Notebook => "Notebook",
        }
    }
}

impl Display for ImageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
