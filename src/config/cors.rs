use url::Url;

/// Entry in the origins list that allows every origin
pub const ANY_ORIGIN: &str = "*";

/// Check that an entry is a bare origin: scheme and host, optional port,
/// and nothing after the authority.
pub fn validate_origin(origin: &str) -> Result<(), String> {
    if origin == ANY_ORIGIN {
        return Ok(());
    }

    let parsed = Url::parse(origin)
        .map_err(|_| format!("Origin {} in CORS_ALLOWED_ORIGINS is missing scheme or host", origin))?;

    if !parsed.has_host() {
        return Err(format!(
            "Origin {} in CORS_ALLOWED_ORIGINS is missing scheme or host",
            origin
        ));
    }

    // Url normalizes an empty path to "/", so inspect the raw authority.
    let authority = origin
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or_default();
    if authority.contains(['/', '?', '#']) {
        return Err(format!(
            "Origin {} in CORS_ALLOWED_ORIGINS should not have a path, query or fragment",
            origin
        ));
    }

    if !parsed.username().is_empty() || parsed.password().is_some() {
        return Err(format!(
            "Origin {} in CORS_ALLOWED_ORIGINS should not have userinfo",
            origin
        ));
    }

    Ok(())
}
