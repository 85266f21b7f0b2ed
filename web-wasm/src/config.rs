//! Build-time service configuration
//!
//! `ALGOMATCH_ENDPOINT` and `ALGOMATCH_TOP_K` are read when the bundle is
//! compiled. Missing or invalid values fall back to the defaults.

use algomatch_common::ServiceConfig;

/// Resolves the service configuration from optional build-time values.
///
/// # Arguments
/// * `endpoint` - base URL of the classifier service
/// * `top_k` - number of candidates per file, as text
pub fn resolve(endpoint: Option<&str>, top_k: Option<&str>) -> ServiceConfig {
    let defaults = ServiceConfig::default();
    let base_url = endpoint
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| defaults.base_url.clone());
    let top_k = match top_k.map(|k| k.trim().parse::<usize>()) {
        Some(Ok(k)) => k,
        Some(Err(_)) => {
            log::warn!("ALGOMATCH_TOP_K is not a number, using {}", defaults.top_k);
            defaults.top_k
        }
        None => defaults.top_k,
    };

    ServiceConfig::new(base_url, top_k).unwrap_or_else(|err| {
        log::warn!("{}; using {}", err, defaults.base_url);
        defaults
    })
}

pub fn service_config() -> ServiceConfig {
    resolve(option_env!("ALGOMATCH_ENDPOINT"), option_env!("ALGOMATCH_TOP_K"))
}
