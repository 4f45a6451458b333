//! Reference kinds: what a book locator is for.

use std::fmt;
use std::str::FromStr;

/// Semantic purpose of a book locator. Only [`ReferenceKind::DownloadDemo`]
/// affects path synthesis; the rest are carried for the caller's dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReferenceKind {
    #[default]
    Unknown,
    DownloadFull,
    /// Full download that is only usable under a catalog-specific condition
    /// (e.g. after purchase).
    DownloadFullConditional,
    DownloadDemo,
    DownloadFullOrDemo,
    Buy,
    BuyInBrowser,
}

impl FromStr for ReferenceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(ReferenceKind::Unknown),
            "full" => Ok(ReferenceKind::DownloadFull),
            "full-conditional" => Ok(ReferenceKind::DownloadFullConditional),
            "demo" => Ok(ReferenceKind::DownloadDemo),
            "full-or-demo" => Ok(ReferenceKind::DownloadFullOrDemo),
            "buy" => Ok(ReferenceKind::Buy),
            "buy-in-browser" => Ok(ReferenceKind::BuyInBrowser),
            other => Err(format!("unknown reference kind: {other}")),
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceKind::Unknown => "unknown",
            ReferenceKind::DownloadFull => "full",
            ReferenceKind::DownloadFullConditional => "full-conditional",
            ReferenceKind::DownloadDemo => "demo",
            ReferenceKind::DownloadFullOrDemo => "full-or-demo",
            ReferenceKind::Buy => "buy",
            ReferenceKind::BuyInBrowser => "buy-in-browser",
        };
        f.write_str(name)
    }
}
