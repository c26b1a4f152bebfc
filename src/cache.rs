//! Compiled pattern and matcher caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::ast::Pattern;
use crate::error::PatternError;
use crate::locale::Locale;
use crate::matcher::Matcher;
use crate::system::CalendarSystem;

/// Matchers depend on the calendar's month names and the locale, which is
/// identified by its id.
type MatcherKey = (String, CalendarSystem, &'static str);

/// Global cache for compiled patterns.
static PATTERNS: Mutex<Option<LruCache<String, Pattern>>> = Mutex::new(None);

/// Global cache for parse matchers.
static MATCHERS: Mutex<Option<LruCache<MatcherKey, Matcher>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(size) => size,
    None => panic!("cache size must be non-zero"),
};

/// Get or compile a pattern, using the cache.
pub fn get_or_compile(pattern: &str) -> Result<Pattern, PatternError> {
    let mut cache_guard = PATTERNS.lock().unwrap_or_else(PoisonError::into_inner);
    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(compiled) = cache.get(pattern) {
        return Ok(compiled.clone());
    }

    debug!(pattern, "pattern cache miss");
    let compiled = Pattern::compile(pattern)?;
    cache.put(pattern.to_string(), compiled.clone());
    Ok(compiled)
}

/// Get or build the matcher for a pattern, using the cache.
pub(crate) fn get_or_build_matcher(
    pattern: &Pattern,
    system: CalendarSystem,
    locale: &Locale,
) -> Result<Matcher, regex::Error> {
    let key = (pattern.source().to_string(), system, locale.id);
    let mut cache_guard = MATCHERS.lock().unwrap_or_else(PoisonError::into_inner);
    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(matcher) = cache.get(&key) {
        return Ok(matcher.clone());
    }

    debug!(pattern = pattern.source(), %system, locale = locale.id, "matcher cache miss");
    let matcher = Matcher::build(pattern, system, locale)?;
    cache.put(key, matcher.clone());
    Ok(matcher)
}

impl Pattern {
    /// Compile a pattern string, reusing a previously compiled copy when the
    /// same string was seen recently.
    ///
    /// # Errors
    ///
    /// See [`Pattern::compile`].
    pub fn cached(pattern: &str) -> Result<Pattern, PatternError> {
        get_or_compile(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_matches_compiled() {
        let cached = Pattern::cached("yyyy-MM-dd").unwrap();
        assert_eq!(cached, Pattern::compile("yyyy-MM-dd").unwrap());
        assert_eq!(Pattern::cached("yyyy-MM-dd").unwrap(), cached);
        assert!(Pattern::cached("'open").is_err());
    }

    #[test]
    fn test_matcher_cache_per_system() {
        let pattern = Pattern::compile("MMMM").unwrap();
        let locale = Locale::en();
        assert!(get_or_build_matcher(&pattern, CalendarSystem::Jalali, &locale).is_ok());
        assert!(get_or_build_matcher(&pattern, CalendarSystem::Hijri, &locale).is_ok());
    }
}
