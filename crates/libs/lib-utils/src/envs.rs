//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.
//!
//! On `wasm32-unknown-unknown` there is no process environment, so the
//! runtime lookup always misses there. Callers pass the value captured at
//! compile time (`option_env!`) as the fallback, which is what the browser
//! build actually sees.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, or the value `built_in` captured when the
/// crate was compiled.
///
/// ```rust
/// use lib_utils::envs::get_env_or_built;
///
/// let value = get_env_or_built("LIB_UTILS_DOC_UNSET", Some("baked"));
/// assert_eq!(value.as_deref(), Ok("baked"));
/// ```
pub fn get_env_or_built(name: &'static str, built_in: Option<&'static str>) -> Result<String, Error> {
    get_env(name).or_else(|err| built_in.map(str::to_string).ok_or(err))
}

/// Parse a raw variable value, surrounding whitespace ignored.
pub fn parse_env<T: FromStr>(name: &'static str, raw: &str) -> Result<T, Error> {
    raw.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: &str = "LIB_UTILS_TEST_SURELY_UNSET";

    #[test]
    fn test_missing_env() {
        assert_eq!(get_env(NAME), Err(Error::MissingEnv(NAME)));
        assert_eq!(get_env_or_built(NAME, None), Err(Error::MissingEnv(NAME)));
    }

    #[test]
    fn test_built_in_fallback() {
        assert_eq!(get_env_or_built(NAME, Some("THB")), Ok("THB".to_string()));
    }

    #[test]
    fn test_parse_env() {
        assert_eq!(parse_env::<bool>(NAME, " false "), Ok(false));
        assert_eq!(parse_env::<u32>(NAME, "12"), Ok(12));
        assert_eq!(parse_env::<bool>(NAME, "nope"), Err(Error::WrongFormat(NAME)));
    }
}
