//! Display labels for auto-linked URLs.

use url::{Host, Url};

/// Schemes recognised at the start of a URL.
const SCHEMES: [&str; 2] = ["http://", "https://"];

/// Returns the URL without its scheme when it starts with `http://` or
/// `https://` (ASCII case-insensitive).
#[must_use]
pub fn strip_scheme(url: &str) -> Option<&str> {
    SCHEMES.into_iter().find_map(|scheme| {
        let head = url.get(..scheme.len())?;
        if head.eq_ignore_ascii_case(scheme) {
            url.get(scheme.len()..)
        } else {
            None
        }
    })
}

/// Parses the host of an `http(s)` URL.
///
/// The URL must spell out `http://` or `https://` and an authority right after
/// it. Domains come back lowercased (IDNs in their ASCII form).
#[must_use]
pub fn host(url: &str) -> Option<Host> {
    let after_scheme = strip_scheme(url)?;
    if after_scheme.is_empty() || after_scheme.starts_with(['/', '\\', '?', '#']) {
        return None;
    }
    Url::parse(url).ok()?.host().map(|parsed| parsed.to_owned())
}

/// Derives the short label shown for a link.
///
/// One leading subdomain label is dropped from a domain: `www.` when present,
/// otherwise the first label of a host with three or more labels. IP
/// addresses are returned whole.
///
/// ```
/// use fchat_input::markup::display_label;
///
/// assert_eq!(display_label("http://www.google.com").as_deref(), Some("google.com"));
/// assert_eq!(display_label("http://i.imgur.com/gallery/x").as_deref(), Some("imgur.com"));
/// assert_eq!(display_label("https://foo.bar").as_deref(), Some("foo.bar"));
/// assert_eq!(display_label("ftp://foo.bar"), None);
/// ```
#[must_use]
pub fn display_label(url: &str) -> Option<String> {
    match host(url)? {
        Host::Domain(domain) => short_domain(&domain),
        address @ (Host::Ipv4(_) | Host::Ipv6(_)) => Some(address.to_string()),
    }
}

fn short_domain(domain: &str) -> Option<String> {
    let name = domain.trim_end_matches('.');
    if name.is_empty() {
        return None;
    }

    let label = match name.strip_prefix("www.") {
        Some(stripped) if !stripped.is_empty() => stripped,
        Some(_) => name,
        None if name.split('.').count() >= 3 => {
            name.split_once('.').map_or(name, |(_, parent)| parent)
        }
        None => name,
    };
    Some(label.to_owned())
}
