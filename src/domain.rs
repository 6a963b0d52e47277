use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Multi-level public suffixes recognized by the parser.
///
/// Checked in declaration order before falling back to the last label;
/// the first suffix whose labels match the domain's trailing labels wins,
/// so the order of this table is load-bearing.
pub const MULTI_LEVEL_TLDS: &[&str] = &[
    "co.uk", "com.au", "com.br", "com.ru", "co.jp", "co.za", "co.in", "com.mx", "com.ar",
    "com.pe", "com.co", "com.ve", "com.ec", "org.uk", "net.au", "gov.uk", "edu.au", "ac.uk",
    "org.za",
];

lazy_static! {
    // RFC-1035-ish label syntax; hostname validation beyond this lives at the
    // CLI boundary, not in the parser.
    static ref DOMAIN_FORMAT: Regex =
        Regex::new(r"^([a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$")
            .expect("domain format regex is valid");
}

/// A dotted name split into its structural parts.
///
/// `tld` always includes the leading dot (".com", ".co.uk").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDomain {
    pub full_domain: String,
    pub subdomain: String,
    pub sld: String,
    pub tld: String,
}

/// Split a domain into subdomain, second-level label, and TLD.
///
/// The input is lowercased first. Returns `None` when the name has fewer
/// than two dot-separated labels and therefore has no second-level label.
pub fn parse(domain: &str) -> Option<ParsedDomain> {
    let full_domain = domain.to_lowercase();
    let parts: Vec<&str> = full_domain.split('.').collect();
    if parts.len() < 2 {
        return None;
    }

    for suffix in MULTI_LEVEL_TLDS {
        let suffix_parts: Vec<&str> = suffix.split('.').collect();
        if parts.len() >= suffix_parts.len() + 1 {
            let ending = parts[parts.len() - suffix_parts.len()..].join(".");
            if ending == *suffix {
                let sld_index = parts.len() - suffix_parts.len() - 1;
                return Some(ParsedDomain {
                    subdomain: parts[..sld_index].join("."),
                    sld: parts[sld_index].to_string(),
                    tld: format!(".{suffix}"),
                    full_domain,
                });
            }
        }
    }

    Some(ParsedDomain {
        subdomain: parts[..parts.len() - 2].join("."),
        sld: parts[parts.len() - 2].to_string(),
        tld: format!(".{}", parts[parts.len() - 1]),
        full_domain,
    })
}

/// Syntactic validity check for user-supplied domain strings.
///
/// ASCII letters, digits, and interior hyphens only, 4 to 253 characters.
/// This guards the CLI boundary; `parse` itself accepts anything.
pub fn is_valid_format(domain: &str) -> bool {
    (4..=253).contains(&domain.len()) && DOMAIN_FORMAT.is_match(domain)
}
