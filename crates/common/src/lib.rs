use clap::Parser;
use gate::{MatcherError, PathMatcher};

pub mod auth;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub matcher: PathMatcher,
}

impl AppState {
    /// Blank entries are skipped, so an empty `GATE_EXCLUDED_PREFIXES` gates every path.
    pub fn from_config(config: Config) -> Result<Self, MatcherError> {
        let prefixes = config
            .excluded_prefixes
            .iter()
            .map(|prefix| prefix.trim())
            .filter(|prefix| !prefix.is_empty());
        let matcher = PathMatcher::new(prefixes)?;
        Ok(Self { config, matcher })
    }
}

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Cookie whose presence marks a visitor as signed in
    #[arg(long, env = "ACCESS_TOKEN_COOKIE", default_value = gate::DEFAULT_ACCESS_TOKEN_COOKIE)]
    pub access_token_cookie: String,

    /// Comma-separated path prefixes the gate never runs for
    #[arg(
        long,
        env = "GATE_EXCLUDED_PREFIXES",
        value_delimiter = ',',
        default_value = gate::DEFAULT_EXCLUDED_PREFIXES
    )]
    pub excluded_prefixes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, FromArgMatches};

    // Parse CLI args only, so variables in the developer's shell don't leak in.
    fn parse_args(args: &[&str]) -> Config {
        let matches = Config::command()
            .mut_args(|arg| arg.env(None::<&'static str>))
            .try_get_matches_from(args)
            .unwrap();
        Config::from_arg_matches(&matches).unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = parse_args(&["app"]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.access_token_cookie, "access_token");
        assert_eq!(
            config.excluded_prefixes,
            ["/api", "/_next/static", "/_next/image", "/favicon.ico", "/public"]
        );
    }

    #[test]
    fn test_config_overrides() {
        let config = parse_args(&[
            "app",
            "--port",
            "8080",
            "--access-token-cookie",
            "sid",
            "--excluded-prefixes",
            "/api,/assets",
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.access_token_cookie, "sid");
        assert_eq!(config.excluded_prefixes, ["/api", "/assets"]);
    }

    #[test]
    fn test_state_rejects_bad_prefix() {
        let config = parse_args(&["app", "--excluded-prefixes", "/api,assets"]);
        assert!(AppState::from_config(config).is_err());
    }

    #[test]
    fn test_empty_exclusions_gate_everything() {
        let config = parse_args(&["app", "--excluded-prefixes", ""]);
        let state = AppState::from_config(config).unwrap();
        assert!(state.matcher.prefixes().is_empty());
        assert!(!state.matcher.is_excluded("/favicon.ico"));
    }

    #[test]
    fn test_blank_entries_are_skipped() {
        let config = parse_args(&["app", "--excluded-prefixes", "/api, ,/public,"]);
        let state = AppState::from_config(config).unwrap();
        assert_eq!(state.matcher.prefixes(), ["/api", "/public"]);
        assert!(!state.matcher.is_excluded("/favicon.ico"));
    }
}
