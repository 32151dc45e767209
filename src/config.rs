//! Build-time configuration for the Supabase gateway.
//!
//! Trunk injects `SUPABASE_URL` and `SUPABASE_ANON_KEY` at compile
//! time, the same role Vite env vars play for a JS frontend. Both are
//! required; the app refuses to mount without them.

/// Raised when a required environment value is missing at build time.
pub const MISSING_ENV_MESSAGE: &str =
    "Variáveis de ambiente do Supabase não encontradas. Verifique o arquivo .env";

const SUPABASE_URL: Option<&str> = option_env!("SUPABASE_URL");
const SUPABASE_ANON_KEY: Option<&str> = option_env!("SUPABASE_ANON_KEY");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Supabase project, without a trailing slash.
    pub supabase_url: String,
    /// Public (anon) API key sent with every request.
    pub supabase_anon_key: String,
}

impl Config {
    /// Reads the compile-time environment. Fatal when either value is
    /// absent or blank.
    pub fn from_env() -> Result<Self, &'static str> {
        Self::build(SUPABASE_URL, SUPABASE_ANON_KEY)
    }

    fn build(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, &'static str> {
        match (url, anon_key) {
            (Some(url), Some(key)) if !url.trim().is_empty() && !key.trim().is_empty() => {
                Ok(Self {
                    supabase_url: url.trim_end_matches('/').to_string(),
                    supabase_anon_key: key.to_string(),
                })
            }
            _ => Err(MISSING_ENV_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_both_values() {
        assert_eq!(Config::build(None, None), Err(MISSING_ENV_MESSAGE));
        assert_eq!(
            Config::build(Some("https://x.supabase.co"), None),
            Err(MISSING_ENV_MESSAGE)
        );
        assert_eq!(
            Config::build(None, Some("anon-key")),
            Err(MISSING_ENV_MESSAGE)
        );
        assert_eq!(Config::build(Some(""), Some("anon-key")), Err(MISSING_ENV_MESSAGE));
    }

    #[test]
    fn build_strips_trailing_slash() {
        let config = Config::build(Some("https://x.supabase.co/"), Some("anon-key")).unwrap();
        assert_eq!(config.supabase_url, "https://x.supabase.co");
        assert_eq!(config.supabase_anon_key, "anon-key");
    }
}
