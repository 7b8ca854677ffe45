//! Host header validation against the configured allow-list.
//!
//! Entries are matched against the domain part of the request host:
//! - `*` matches any well-formed host
//! - `.example.com` matches `example.com` and every subdomain of it
//! - anything else must equal the domain (case-insensitive)
//!
//! The port is never part of the comparison.

use crate::error::{AppError, AppResult};
use regex::Regex;

/// Domain part of a host: a DNS-style name or a bracketed IPv6 literal
const DOMAIN_PATTERN: &str = r"[a-z0-9.-]+|\[[a-f0-9]*:[a-f0-9.:]+\]";

/// Check that an allowed-hosts entry can ever match a request domain.
///
/// Accepts `*`, a leading-dot domain, a name or a bracketed IPv6 literal.
/// Ports, userinfo, paths and whitespace are rejected since the port is
/// stripped from the request host before comparison.
pub fn validate_host_entry(entry: &str) -> Result<(), String> {
    if entry == "*" {
        return Ok(());
    }

    let entry_re = Regex::new(&format!(r"^\.?(?:{})$", DOMAIN_PATTERN))
        .map_err(|e| format!("Invalid regex pattern: {}", e))?;

    let lowered = entry.to_ascii_lowercase();
    if lowered.len() > 1 && entry_re.is_match(&lowered) {
        Ok(())
    } else {
        Err(format!(
            "Host {} in ALLOWED_HOSTS is not a valid hostname (no scheme, port or path)",
            entry
        ))
    }
}

/// A single allowed-host entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPattern {
    Any,
    /// Domain and subdomains, stored with the leading dot
    Subdomains(String),
    Exact(String),
}

impl HostPattern {
    pub fn parse(entry: &str) -> Self {
        let entry = entry.to_ascii_lowercase();
        if entry == "*" {
            HostPattern::Any
        } else if entry.starts_with('.') {
            HostPattern::Subdomains(entry)
        } else {
            HostPattern::Exact(entry)
        }
    }

    /// `domain` must already be lower-cased.
    pub fn matches(&self, domain: &str) -> bool {
        match self {
            HostPattern::Any => true,
            HostPattern::Subdomains(suffix) => {
                domain.ends_with(suffix.as_str()) || domain == &suffix[1..]
            }
            HostPattern::Exact(name) => domain == name,
        }
    }
}

/// Compiled allow-list used by the host validation middleware
#[derive(Debug, Clone)]
pub struct AllowedHosts {
    patterns: Vec<HostPattern>,
    host_re: Regex,
}

impl AllowedHosts {
    pub fn new(entries: &[String]) -> AppResult<Self> {
        let host_re = Regex::new(&format!(r"^({})(:[0-9]+)?$", DOMAIN_PATTERN))
            .map_err(|e| AppError::Internal(format!("Invalid regex pattern: {}", e)))?;

        Ok(Self {
            patterns: entries.iter().map(|e| HostPattern::parse(e)).collect(),
            host_re,
        })
    }

    /// Split a host into its lower-cased domain and optional port.
    ///
    /// Returns `None` when the host is not a valid `name[:port]` or
    /// `[ipv6][:port]` string. A single trailing dot is removed from the domain.
    pub fn split_domain_port(&self, host: &str) -> Option<(String, Option<u16>)> {
        let host = host.to_ascii_lowercase();
        let caps = self.host_re.captures(&host)?;

        let domain = caps.get(1)?.as_str();
        let domain = domain.strip_suffix('.').unwrap_or(domain);

        let port = match caps.get(2) {
            Some(m) => Some(m.as_str()[1..].parse::<u16>().ok()?),
            None => None,
        };

        Some((domain.to_string(), port))
    }

    /// Whether a raw `Host` value is well-formed and matches an entry
    pub fn is_allowed(&self, host: &str) -> bool {
        match self.split_domain_port(host) {
            Some((domain, _)) if !domain.is_empty() => {
                self.patterns.iter().any(|p| p.matches(&domain))
            }
            _ => false,
        }
    }
}
