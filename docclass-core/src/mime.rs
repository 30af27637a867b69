//! Media type inference from filenames.
//!
//! Mirrors the conventional extension tables: compound suffixes such as `.tgz`
//! are expanded first, a trailing compression suffix is reported as the
//! encoding, and the extension underneath it picks the media type. File
//! contents are never inspected.

use crate::types::MediaGuess;

pub const JPEG_MIME_TYPE: &str = "image/jpeg";
pub const PNG_MIME_TYPE: &str = "image/png";
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Compound suffixes that stand for an archive plus an encoding.
const SUFFIX_ALIASES: &[(&str, &str)] = &[
    (".svgz", ".svg.gz"),
    (".tgz", ".tar.gz"),
    (".taz", ".tar.gz"),
    (".tz", ".tar.gz"),
    (".tbz2", ".tar.bz2"),
    (".txz", ".tar.xz"),
];

const ENCODINGS: &[(&str, &str)] = &[
    (".gz", "gzip"),
    (".Z", "compress"),
    (".bz2", "bzip2"),
    (".xz", "xz"),
    (".br", "br"),
];

/// Infer `(media_type, encoding)` for a filename.
pub fn guess_media_type(filename: &str) -> MediaGuess {
    let name = final_component(filename);

    let (mut base, mut ext) = split_ext(name);
    while let Some(expanded) = lookup(SUFFIX_ALIASES, &ext.to_lowercase()) {
        let joined = format!("{base}{expanded}");
        (base, ext) = split_ext(&joined);
    }

    let encoding = lookup(ENCODINGS, &ext).or_else(|| lookup(ENCODINGS, &ext.to_lowercase()));
    if encoding.is_some() {
        (_, ext) = split_ext(&base);
    }

    let media_type = ext
        .strip_prefix('.')
        .filter(|e| !e.is_empty())
        .and_then(|e| mime_guess::from_ext(e).first_raw());

    MediaGuess::new(media_type, encoding)
}

fn final_component(filename: &str) -> &str {
    filename.rsplit(['/', '\\']).next().unwrap_or(filename)
}

/// Split at the last dot. Leading dots never start an extension, so
/// `.profile` has none.
fn split_ext(name: &str) -> (String, String) {
    match name.rfind('.') {
        Some(idx) if name[..idx].chars().any(|c| c != '.') => {
            (name[..idx].to_string(), name[idx..].to_string())
        }
        _ => (name.to_string(), String::new()),
    }
}

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(suffix, _)| *suffix == key)
        .map(|(_, value)| *value)
}
