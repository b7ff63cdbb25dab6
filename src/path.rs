//! Request path splitting for the `directory/stem.extension` shape.
//!
//! Only the last `/` and the last `.` of the path matter:
//! - `/img/photo.jpg` → directory=`/img`, stem=`photo`, extension=`jpg`
//! - `/a/archive.tar.gif` → directory=`/a`, stem=`archive.tar`, extension=`gif`
//! - `/photo.jpg` → directory=``, stem=`photo`, extension=`jpg`
//! - `/img/README` → no match (the filename has no extension)
//!
//! Nothing is normalized: `..` segments, doubled slashes and percent escapes in
//! the directory are carried through to the rewritten path verbatim.

/// Result of splitting a request path like `/img/photo.jpg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath<'a> {
    /// Everything before the last `/`. Empty for files at the root.
    pub directory: &'a str,
    /// Filename without its extension. May contain dots.
    pub stem: &'a str,
    /// Everything after the last `.`, original casing.
    pub extension: &'a str,
}

impl ParsedPath<'_> {
    /// Compose `{directory}/{stem}_{token}.{extension}`.
    pub fn with_suffix(&self, token: &str) -> String {
        format!("{}/{}_{}.{}", self.directory, self.stem, token, self.extension)
    }
}

/// Split a request path into directory, stem and extension.
///
/// Returns `None` when the path has no `/` or the final segment has no `.`.
pub fn parse_uri_path(uri: &str) -> Option<ParsedPath<'_>> {
    let slash = uri.rfind('/')?;
    let directory = &uri[..slash];
    let filename = &uri[slash + 1..];

    let dot = filename.rfind('.')?;
    Some(ParsedPath {
        directory,
        stem: &filename[..dot],
        extension: &filename[dot + 1..],
    })
}
