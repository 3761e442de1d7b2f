//! URL matching against the allow-list.
//!
//! The only part of the gate with real algorithmic content. A URL matches
//! when its normalized host equals an entry's host or is a proper subdomain
//! of it (the entry host is a dot-suffix at a label boundary). Anything that
//! fails to parse fails closed: no host, no match.
//!
//! Normalization must agree between stored entries and incoming URLs —
//! entries are normalized once at the config boundary, request hosts here.
//! A case or `www.` mismatch between the two sides silently loses matches,
//! which is the primary correctness risk in this module.

use url::Url;

use crate::entries::AllowlistEntry;

/// Normalize a host: lowercase, strip one leading `www.` label.
/// Returns `None` when nothing is left.
pub fn normalize_host(host: &str) -> Option<String> {
    let lowered = host.trim().to_ascii_lowercase();
    let stripped = lowered.strip_prefix("www.").unwrap_or(&lowered);
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// Parse a URL and return its normalized host, or `None` for anything
/// unparsable or hostless (fail closed).
pub fn request_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    normalize_host(parsed.host_str()?)
}

/// Test whether `request_host` equals `entry_host` or is a proper subdomain
/// of it. An empty entry host never matches — otherwise a blank config row
/// would exempt every URL.
///
/// Comparison is case-insensitive so entries that bypassed the config
/// normalization boundary still match correctly.
pub fn host_matches(request_host: &str, entry_host: &str) -> bool {
    if entry_host.is_empty() {
        return false;
    }
    if request_host.eq_ignore_ascii_case(entry_host) {
        return true;
    }
    // Proper subdomain: entry host is a dot-suffix ("." + entry_host)
    let (rlen, elen) = (request_host.len(), entry_host.len());
    if rlen <= elen {
        return false;
    }
    match request_host.get(rlen - elen..) {
        Some(suffix) => {
            suffix.eq_ignore_ascii_case(entry_host)
                && request_host.as_bytes()[rlen - elen - 1] == b'.'
        }
        None => false,
    }
}

/// Find the first allow-list entry whose host matches the URL.
/// Match is a predicate, not a ranked lookup — ordering among entries is
/// insignificant beyond first-wins.
pub fn matching_entry<'a>(
    url: &str,
    allowlist: &'a [AllowlistEntry],
) -> Option<&'a AllowlistEntry> {
    let host = request_host(url)?;
    allowlist
        .iter()
        .find(|entry| host_matches(&host, &entry.host))
}
