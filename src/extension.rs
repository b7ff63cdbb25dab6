//! Image extension allow-list.

/// Extensions rewritten by the stock configuration.
pub const DEFAULT_EXTENSIONS: [&str; 9] = [
    "jpg", "jpeg", // JPEG
    "png", "webp", "gif", "avif", // web raster formats
    "tif", "tiff", // TIFF
    "svg",
];

/// Check an extension against the allow-list, ignoring ASCII case.
///
/// `JPG` matches an allow-list entry of `jpg`. Allow-list entries are compared
/// as written, without a leading dot.
pub fn is_allowed_extension<S: AsRef<str>>(extension: &str, allowed: &[S]) -> bool {
    allowed
        .iter()
        .any(|candidate| candidate.as_ref().eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_default_extension_is_allowed() {
        for ext in DEFAULT_EXTENSIONS {
            assert!(is_allowed_extension(ext, &DEFAULT_EXTENSIONS), "{ext}");
        }
    }

    #[test]
    fn comparison_ignores_case() {
        assert!(is_allowed_extension("JPG", &DEFAULT_EXTENSIONS));
        assert!(is_allowed_extension("WebP", &DEFAULT_EXTENSIONS));
    }

    #[test]
    fn non_image_extensions_rejected() {
        assert!(!is_allowed_extension("html", &DEFAULT_EXTENSIONS));
        assert!(!is_allowed_extension("js", &DEFAULT_EXTENSIONS));
        assert!(!is_allowed_extension("", &DEFAULT_EXTENSIONS));
    }

    #[test]
    fn near_misses_rejected() {
        assert!(!is_allowed_extension("jpgx", &DEFAULT_EXTENSIONS));
        assert!(!is_allowed_extension(".jpg", &DEFAULT_EXTENSIONS));
    }

    #[test]
    fn custom_allow_list() {
        let allowed = vec!["heic".to_string()];
        assert!(is_allowed_extension("HEIC", &allowed));
        assert!(!is_allowed_extension("jpg", &allowed));
    }
}
