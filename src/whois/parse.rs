//! WHOIS response field extraction.
//!
//! Registries disagree on labels (`OrgName` at ARIN, `org-name` at RIPE,
//! `owner` at LACNIC), so each field is a case-insensitive pattern over the
//! whole response. The first line carrying the label with a value wins.

use std::sync::LazyLock;

use regex::Regex;

use super::types::WhoisFields;

// `[ \t]*(\S.*)`: the value must start on the label's own line; `.` never crosses a newline
static NETNAME: LazyLock<Regex> = LazyLock::new(|| field_pattern("netname"));
static ORGNAME: LazyLock<Regex> =
    LazyLock::new(|| field_pattern("(?:org-?name|organization|owner)"));
static LOCATION: LazyLock<Regex> = LazyLock::new(|| field_pattern("location"));
static ADDRESS: LazyLock<Regex> = LazyLock::new(|| field_pattern("address"));
static COUNTRY: LazyLock<Regex> = LazyLock::new(|| field_pattern("country"));

fn field_pattern(label: &str) -> Regex {
    Regex::new(&format!(r"(?i){label}:[ \t]*(\S.*)")).expect("whois field pattern is valid")
}

/// Extracts network name, organization, location and country from raw whois text.
///
/// Missing labels yield empty fields; this never fails.
pub fn extract_fields(raw: &str) -> WhoisFields {
    let location = match capture(&LOCATION, raw) {
        value if value.is_empty() => capture(&ADDRESS, raw),
        value => value,
    };
    WhoisFields {
        netname: capture(&NETNAME, raw),
        orgname: capture(&ORGNAME, raw),
        location,
        country: capture(&COUNTRY, raw),
    }
}

fn capture(pattern: &Regex, raw: &str) -> String {
    pattern
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
