use std::fmt;
use std::str::FromStr;

use crate::error::ProcessingError;

/// Formats accepted as batch input, recognised by file name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    Png,
    Jpg,
}

impl InputFormat {
    /// Case-insensitive match on the end of the name. Only the suffix
    /// matters, so `.png` on its own is eligible and `archive.png.zip` is not.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        if name.ends_with(".png") {
            Some(InputFormat::Png)
        } else if name.ends_with(".jpg") || name.ends_with(".jpeg") {
            Some(InputFormat::Jpg)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Png => "PNG",
            InputFormat::Jpg => "JPEG",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Jpg,
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpg => "jpg",
            OutputFormat::Png => "png",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(OutputFormat::Jpg),
            "png" => Ok(OutputFormat::Png),
            _ => Err(ProcessingError::UnsupportedFormat(format!(
                "{s} (use: jpg, png)"
            ))),
        }
    }
}
