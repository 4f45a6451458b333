//! Deterministic URL-to-path synthesis.
//!
//! Maps a book locator (URL plus classification tags) to a collision-resistant
//! local path under a caller-supplied books directory:
//! `<books_dir>/<host>/<url path dirs...>/<name><query marks>[.trial]<ext>`.
//! The result never contains `< > : " | ? * \` and never embeds credential
//! query parameters.

mod query;
mod sanitize;

use crate::reference::{ContentFormat, ReferenceKind};
use percent_encoding::percent_decode_str;
use sanitize::sanitize_segment;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// The locator cannot be mapped to a host-rooted local path. The caller
/// should treat such a locator as unsupported for local storage.
#[derive(Debug, Error)]
#[error("unsupported locator {url:?}: {kind}")]
pub struct InvalidUrl {
    pub url: String,
    pub kind: InvalidUrlKind,
}

/// Why a locator was rejected.
#[derive(Debug, Error)]
pub enum InvalidUrlKind {
    #[error(transparent)]
    Parse(#[from] url::ParseError),
    /// A URL without an authority component has no host directory to root
    /// the path under.
    #[error("no host component")]
    MissingHost,
}

impl InvalidUrl {
    fn new(url: &str, kind: impl Into<InvalidUrlKind>) -> Self {
        Self {
            url: url.to_string(),
            kind: kind.into(),
        }
    }
}

/// Synthesizes the local path for `url` under `books_dir`.
///
/// The host (minus any leading `www.`) becomes the first directory, the URL
/// path supplies the remaining directories and the file name, qualifying
/// query parameters are folded into the name, `kind == DownloadDemo` adds a
/// `.trial` marker, and `format` forces the final extension when it names
/// one. Pure function of its inputs: repeated calls yield identical paths.
pub fn synthesize(
    url: &str,
    format: ContentFormat,
    kind: ReferenceKind,
    books_dir: &Path,
) -> Result<PathBuf, InvalidUrl> {
    let parsed = Url::parse(url).map_err(|e| InvalidUrl::new(url, e))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| InvalidUrl::new(url, InvalidUrlKind::MissingHost))?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() {
        return Err(InvalidUrl::new(url, InvalidUrlKind::MissingHost));
    }

    // The parser hands the path back percent-encoded; decode before
    // sanitizing so encoded unsafe characters cannot slip through as `%3C`
    // and friends. Decoded `/` (from `%2F`) acts as a separator here, which
    // is why sanitization happens per decoded segment.
    let decoded = percent_decode_str(parsed.path()).decode_utf8_lossy();
    let mut segments: Vec<String> = decoded
        .split('/')
        .filter(|s| !s.is_empty())
        .map(sanitize_segment)
        .collect();

    // An empty URL path leaves the host itself as the file name stem.
    let (mut dir, mut body, name_from_path) = match segments.pop() {
        Some(name) => {
            let mut dir = books_dir.join(sanitize_segment(host));
            for segment in &segments {
                dir.push(segment);
            }
            (dir, name, true)
        }
        None => (books_dir.to_path_buf(), sanitize_segment(host), false),
    };

    let ext = resolve_extension(&mut body, format, name_from_path);

    if let Some(query) = parsed.query() {
        let query = percent_decode_str(query).decode_utf8_lossy();
        query::append_params(&mut body, &query);
    }

    if kind == ReferenceKind::DownloadDemo {
        body.push_str(".trial");
    }
    body.push_str(&ext);

    Ok(dir.join(body))
}

/// Picks the extension to re-attach later and strips it from `body`.
///
/// A forced extension wins. Without one, the extension is whatever follows
/// the last `.` of the file name; a leading dot does not start an extension,
/// and dots in a host-derived name never count.
fn resolve_extension(body: &mut String, format: ContentFormat, name_from_path: bool) -> String {
    if let Some(forced) = format.forced_extension() {
        if body.ends_with(forced) {
            body.truncate(body.len() - forced.len());
        } else if let Some(dot) = forced.rfind('.').filter(|&d| d > 0) {
            // Composite extension such as `.fb2.zip`: a name already ending
            // in the `.fb2` part would otherwise end up as `.fb2.fb2.zip`.
            let partial = &forced[..dot];
            if body.ends_with(partial) {
                body.truncate(body.len() - partial.len());
            }
        }
        return forced.to_string();
    }

    if !name_from_path {
        return String::new();
    }
    match body.rfind('.') {
        Some(i) if i > 0 => body.split_off(i),
        _ => String::new(),
    }
}
