// src/aggregate/fetch.rs
// =============================================================================
// Fetches one file and decodes it to text.
//
// The Contents API returns file bodies base64-encoded, wrapped at 60
// columns with '\n'. We strip the whitespace, decode, and require UTF-8.
// =============================================================================

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::FetchError;
use crate::github::{Contents, RawKind, RepoContents};

/// Fetch `path` and return its text.
pub async fn fetch<R>(repo: &R, path: &str) -> Result<String, FetchError>
where
    R: RepoContents + ?Sized,
{
    let contents = repo
        .get_contents(path)
        .await
        .map_err(|source| FetchError::Request {
            path: path.to_string(),
            source,
        })?;

    // A directory comes back as an array; we only accept a single file
    let entry = match contents {
        Contents::Single(entry) if entry.kind == RawKind::File => entry,
        _ => {
            return Err(FetchError::NotAFile {
                path: path.to_string(),
            })
        }
    };

    match entry.encoding.as_deref() {
        None | Some("base64") => {}
        Some(other) => {
            return Err(FetchError::Encoding {
                path: path.to_string(),
                reason: format!("unsupported encoding '{}'", other),
            })
        }
    }

    let encoded = entry.content.ok_or_else(|| FetchError::NotAFile {
        path: path.to_string(),
    })?;

    decode_content(path, &encoded)
}

/// Decode a base64 transport body into UTF-8 text.
pub fn decode_content(path: &str, encoded: &str) -> Result<String, FetchError> {
    let compact: Vec<u8> = encoded
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    let bytes = STANDARD
        .decode(&compact)
        .map_err(|e| FetchError::Encoding {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

    String::from_utf8(bytes).map_err(|source| FetchError::Decode {
        path: path.to_string(),
        source,
    })
}
