/// Prefixes the gate never runs for: API routes, framework static assets,
/// the favicon and the public assets folder.
///
/// Comma-separated so the same value can serve as a CLI default.
pub const DEFAULT_EXCLUDED_PREFIXES: &str = "/api,/_next/static,/_next/image,/favicon.ico,/public";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MatcherError {
    #[error("Invalid excluded prefix {0:?}: must start with '/'")]
    InvalidPrefix(String),
}

/// Decides which paths bypass the gate entirely.
///
/// Matching is a plain string prefix test, so `/api` also covers `/apiary`.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    prefixes: Vec<String>,
}

impl PathMatcher {
    pub fn new<I, S>(prefixes: I) -> Result<Self, MatcherError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefixes = prefixes
            .into_iter()
            .map(Into::into)
            .map(|prefix: String| {
                let prefix = prefix.trim().to_string();
                if prefix.starts_with('/') {
                    Ok(prefix)
                } else {
                    Err(MatcherError::InvalidPrefix(prefix))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { prefixes })
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for PathMatcher {
    fn default() -> Self {
        Self {
            prefixes: DEFAULT_EXCLUDED_PREFIXES.split(',').map(str::to_string).collect(),
        }
    }
}
