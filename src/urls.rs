use url::Url;

/// Convenience wrapper for URL generation functions.
#[derive(Clone, Debug)]
pub struct Urls {
    /// Top-level URL, including trailing slash.
    base: Url,
}

impl Urls {
    /// Create a new instance. A trailing slash is added to `base` if it
    /// is missing, so that paths are resolved beneath it.
    pub fn new(base: Url) -> Self {
        let mut base = base;

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Urls { base }
    }

    pub fn submit(&self) -> Result<Url, url::ParseError> {
        self.base.join("submit")
    }
}
