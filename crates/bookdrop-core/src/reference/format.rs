//! Content formats of downloadable books.

use std::fmt;
use std::str::FromStr;

/// File encoding of the downloadable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentFormat {
    /// Format not declared by the catalog; the synthesized name keeps
    /// whatever extension the URL path carries.
    #[default]
    None,
    Mobipocket,
    Fb2Zip,
    Epub,
}

impl ContentFormat {
    /// Extension forced onto the synthesized file name, if this format names one.
    pub fn forced_extension(self) -> Option<&'static str> {
        match self {
            ContentFormat::Epub => Some(".epub"),
            ContentFormat::Mobipocket => Some(".mobi"),
            ContentFormat::Fb2Zip => Some(".fb2.zip"),
            ContentFormat::None => None,
        }
    }
}

impl FromStr for ContentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ContentFormat::None),
            "mobi" | "mobipocket" => Ok(ContentFormat::Mobipocket),
            "fb2.zip" | "fb2zip" => Ok(ContentFormat::Fb2Zip),
            "epub" => Ok(ContentFormat::Epub),
            other => Err(format!("unknown content format: {other}")),
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentFormat::None => "none",
            ContentFormat::Mobipocket => "mobi",
            ContentFormat::Fb2Zip => "fb2.zip",
            ContentFormat::Epub => "epub",
        };
        f.write_str(name)
    }
}
