use crate::config::ReferenceCompany;
use crate::domain::{self, ParsedDomain};
use crate::similarity;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Words commonly concatenated onto a brand name in scam domains.
const SUSPICIOUS_WORDS: &[&str] = &[
    "support", "help", "tech", "service", "customer", "care", "assist", "call", "secure",
    "safety", "protection", "verify", "account", "login", "signin", "official", "portal",
    "center", "desk", "team", "agent", "advisor", "billing", "payment", "refund", "claim",
    "settlement", "resolution", "update", "renewal", "upgrade", "premium", "pro", "plus",
    "alert", "notice", "warning", "urgent", "important", "critical", "techsupport", "helpdesk",
    "customercare", "customersupport", "callcenter", "onlinesupport", "livesupport", "techhelp",
    "servicedesk", "supportcenter",
];

/// Superset of [`SUSPICIOUS_WORDS`] used when a brand name is embedded inside
/// a longer label; the extra entries are generic filler ("usa", "shop") that
/// only means something next to a brand name.
const EXTENDED_SUSPICIOUS_TERMS: &[&str] = &[
    "support", "help", "tech", "service", "customer", "care", "assist", "call", "secure",
    "safety", "protection", "verify", "account", "login", "signin", "official", "portal",
    "center", "desk", "team", "agent", "advisor", "billing", "payment", "refund", "claim",
    "settlement", "resolution", "update", "renewal", "upgrade", "premium", "pro", "plus",
    "alert", "notice", "warning", "urgent", "important", "critical", "techsupport", "helpdesk",
    "customercare", "customersupport", "callcenter", "onlinesupport", "livesupport", "techhelp",
    "servicedesk", "supportcenter", "usa", "us", "online", "web", "net", "digital", "store",
    "shop", "mall",
];

/// Infixes seen in scam naming like "walmart2support" or "paypal24help".
const NUMBER_VARIATIONS: &[&str] = &["1", "2", "24", "247", "365"];

/// Known look-alike spellings of heavily-targeted brands, matched against the
/// sld independently of the reference-company list. Several alternatives use
/// Cyrillic or Greek characters, so these stay literal rather than generated.
const BRAND_PATTERNS: &[(&str, &str, &str)] = &[
    (
        r"^(gmail|g00gle|g0ogle|goog1e|googIe)$",
        "Google",
        "gmail.com / google.com",
    ),
    (
        r"^(facebok|faceb00k|facebook1|facebοοk)$",
        "Meta",
        "facebook.com",
    ),
    (r"^(paypaI|paypa1|paypaII|раypal)$", "PayPal", "paypal.com"),
    (r"^(amazοn|amaz0n|amazon1|amаzon)$", "Amazon", "amazon.com"),
    (
        r"^(micrοsoft|micr0soft|microsoft1|miсrosoft)$",
        "Microsoft",
        "microsoft.com",
    ),
    (r"^(app1e|аpple|apple1|appIe)$", "Apple", "apple.com"),
];

/// Outcome of a fraud check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudVerdict {
    pub is_fraudulent: bool,
    pub reason: Option<String>,
}

impl FraudVerdict {
    fn benign() -> Self {
        FraudVerdict {
            is_fraudulent: false,
            reason: None,
        }
    }

    fn flagged(reason: String) -> Self {
        FraudVerdict {
            is_fraudulent: true,
            reason: Some(reason),
        }
    }
}

/// How a suspicious word was attached to the brand name.
#[derive(Debug, Clone)]
enum ConcatStyle {
    Joined,
    Hyphenated,
    Numbered,
}

/// The first rule that fired, with enough detail to render the reason.
/// Rules are evaluated strictly in variant order per official domain.
#[derive(Debug, Clone)]
enum FraudSignal {
    TldSwap {
        company: String,
        official: String,
        sld: String,
        tld: String,
        official_tld: String,
    },
    KeywordConcat {
        company: String,
        official: String,
        sld: String,
        word: String,
        style: ConcatStyle,
    },
    Containment {
        company: String,
        official: String,
        sld: String,
        // The extraneous text around the embedded brand name when it
        // contained a suspicious term; None means the bare catch-all fired.
        extra: Option<String>,
    },
    ExactMatch {
        company: String,
    },
    Typosquat {
        company: String,
        official: String,
    },
    StaticPattern {
        company: String,
        legitimate: String,
        sld: String,
    },
}

impl FraudSignal {
    fn describe(&self) -> String {
        match self {
            FraudSignal::TldSwap {
                company,
                official,
                sld,
                tld,
                official_tld,
            } => format!(
                "FRAUD ALERT: Domain \"{sld}\" belongs to {company} (official domain: \
                 \"{official}\"). Using a different TLD \"{tld}\" instead of \"{official_tld}\" \
                 is a common fraud technique to impersonate legitimate businesses."
            ),
            FraudSignal::KeywordConcat {
                company,
                official,
                sld,
                word,
                style: ConcatStyle::Joined,
            } => format!(
                "FRAUD ALERT: Domain \"{sld}\" appears to impersonate {company} by adding \
                 \"{word}\" to their name. Legitimate companies rarely use such domain patterns. \
                 Official domain: \"{official}\". This is commonly used in tech support scams \
                 and phishing."
            ),
            FraudSignal::KeywordConcat {
                company,
                official,
                sld,
                word,
                style: ConcatStyle::Hyphenated,
            } => format!(
                "FRAUD ALERT: Domain \"{sld}\" appears to impersonate {company} by adding \
                 \"-{word}\" to their name. This is a common fraud technique. Official domain: \
                 \"{official}\"."
            ),
            FraudSignal::KeywordConcat {
                company,
                official,
                sld,
                word,
                style: ConcatStyle::Numbered,
            } => format!(
                "FRAUD ALERT: Domain \"{sld}\" appears to impersonate {company} by combining \
                 their name with numbers and \"{word}\". This is typically used in scam \
                 operations. Official domain: \"{official}\"."
            ),
            FraudSignal::Containment {
                company,
                official,
                sld,
                extra: Some(extra),
            } => format!(
                "FRAUD ALERT: Domain \"{sld}\" appears to impersonate {company} by embedding \
                 their name within a suspicious domain pattern. The added text \"{extra}\" \
                 suggests this may be a scam operation. Official domain: \"{official}\"."
            ),
            FraudSignal::Containment {
                company,
                official,
                sld,
                extra: None,
            } => format!(
                "POTENTIAL FRAUD: Domain \"{sld}\" contains the name of {company} but is not \
                 their official domain. This could be an impersonation attempt. Official \
                 domain: \"{official}\". Please verify authenticity before proceeding."
            ),
            FraudSignal::ExactMatch { company } => format!(
                "This is the official domain of {company}. If this shows as available, there \
                 may be an error in availability checking."
            ),
            FraudSignal::Typosquat { company, official } => format!(
                "Domain name is very similar to {company}'s official domain \"{official}\". \
                 This appears to be a typosquatting attempt designed to deceive users."
            ),
            FraudSignal::StaticPattern {
                company,
                legitimate,
                sld,
            } => format!(
                "Domain name \"{sld}\" appears to be impersonating {company} (legitimate \
                 domain: {legitimate}). This uses character substitution or similar techniques \
                 commonly used in fraud."
            ),
        }
    }
}

struct BrandPattern {
    pattern: Regex,
    company: &'static str,
    legitimate: &'static str,
}

/// Heuristic engine deciding whether a candidate domain impersonates a known
/// brand. Holds only immutable compiled tables, so one instance can be
/// shared across threads.
pub struct FraudEngine {
    brand_patterns: Vec<BrandPattern>,
}

impl FraudEngine {
    pub fn new() -> anyhow::Result<Self> {
        // Pre-compile the brand look-alike patterns once.
        let mut brand_patterns = Vec::with_capacity(BRAND_PATTERNS.len());
        for &(pattern, company, legitimate) in BRAND_PATTERNS {
            brand_patterns.push(BrandPattern {
                pattern: Regex::new(pattern)?,
                company,
                legitimate,
            });
        }
        Ok(FraudEngine { brand_patterns })
    }

    /// Assess a candidate domain against the reference companies.
    ///
    /// Total over any input string: anything the parser rejects comes back
    /// as a benign verdict rather than an error. The first rule that fires
    /// wins; later companies and rules are never consulted.
    pub fn assess(&self, candidate: &str, companies: &[ReferenceCompany]) -> FraudVerdict {
        let parsed = match domain::parse(candidate) {
            Some(parsed) => parsed,
            None => return FraudVerdict::benign(),
        };

        if let Some(signal) = self.scan_companies(&parsed, companies) {
            log::debug!("{candidate}: matched {signal:?}");
            return FraudVerdict::flagged(signal.describe());
        }

        if let Some(signal) = self.match_brand_patterns(&parsed.sld) {
            log::debug!("{candidate}: matched {signal:?}");
            return FraudVerdict::flagged(signal.describe());
        }

        FraudVerdict::benign()
    }

    fn scan_companies(
        &self,
        parsed: &ParsedDomain,
        companies: &[ReferenceCompany],
    ) -> Option<FraudSignal> {
        for company in companies {
            for official in &company.domains {
                let legit = match domain::parse(official) {
                    Some(legit) => legit,
                    None => continue,
                };
                if let Some(signal) = check_against_official(parsed, &company.name, official, &legit)
                {
                    return Some(signal);
                }
            }
        }
        None
    }

    fn match_brand_patterns(&self, sld: &str) -> Option<FraudSignal> {
        for brand in &self.brand_patterns {
            if brand.pattern.is_match(sld) {
                return Some(FraudSignal::StaticPattern {
                    company: brand.company.to_string(),
                    legitimate: brand.legitimate.to_string(),
                    sld: sld.to_string(),
                });
            }
        }
        None
    }
}

/// Run the per-domain rule tiers in order against one official domain.
fn check_against_official(
    parsed: &ParsedDomain,
    company: &str,
    official: &str,
    legit: &ParsedDomain,
) -> Option<FraudSignal> {
    // Exact brand name registered under a different TLD.
    if parsed.sld == legit.sld && parsed.tld != legit.tld {
        return Some(FraudSignal::TldSwap {
            company: company.to_string(),
            official: official.to_string(),
            sld: parsed.sld.clone(),
            tld: parsed.tld.clone(),
            official_tld: legit.tld.clone(),
        });
    }

    // Brand name glued to a suspicious word, with or without a hyphen or a
    // numeric infix: walmartsupport, walmart-support, walmart2support.
    for word in SUSPICIOUS_WORDS {
        if parsed.sld == format!("{}{word}", legit.sld)
            || parsed.sld == format!("{word}{}", legit.sld)
        {
            return Some(keyword_signal(parsed, company, official, word, ConcatStyle::Joined));
        }

        if parsed.sld == format!("{}-{word}", legit.sld)
            || parsed.sld == format!("{word}-{}", legit.sld)
        {
            return Some(keyword_signal(parsed, company, official, word, ConcatStyle::Hyphenated));
        }

        for num in NUMBER_VARIATIONS {
            if parsed.sld == format!("{}{num}{word}", legit.sld)
                || parsed.sld == format!("{}{word}{num}", legit.sld)
            {
                return Some(keyword_signal(parsed, company, official, word, ConcatStyle::Numbered));
            }
        }
    }

    // Brand name embedded somewhere inside a longer label.
    if parsed.sld != legit.sld {
        if let Some(start) = parsed.sld.find(&legit.sld) {
            let before = &parsed.sld[..start];
            let after = &parsed.sld[start + legit.sld.len()..];

            for term in EXTENDED_SUSPICIOUS_TERMS {
                if before.contains(term) || after.contains(term) {
                    let extra = if before.is_empty() { after } else { before };
                    return Some(FraudSignal::Containment {
                        company: company.to_string(),
                        official: official.to_string(),
                        sld: parsed.sld.clone(),
                        extra: Some(extra.to_string()),
                    });
                }
            }

            // Catch-all: any label containing the brand name is flagged even
            // without a recognized term. Aggressive on purpose; short brand
            // names make this a known false-positive source.
            return Some(FraudSignal::Containment {
                company: company.to_string(),
                official: official.to_string(),
                sld: parsed.sld.clone(),
                extra: None,
            });
        }
    }

    // An official domain showing up as a candidate means the availability
    // layer upstream got something wrong.
    if parsed.full_domain == official.to_lowercase() {
        return Some(FraudSignal::ExactMatch {
            company: company.to_string(),
        });
    }

    if similarity::is_similar_domain(&parsed.sld, &legit.sld) {
        return Some(FraudSignal::Typosquat {
            company: company.to_string(),
            official: official.to_string(),
        });
    }

    None
}

fn keyword_signal(
    parsed: &ParsedDomain,
    company: &str,
    official: &str,
    word: &str,
    style: ConcatStyle,
) -> FraudSignal {
    FraudSignal::KeywordConcat {
        company: company.to_string(),
        official: official.to_string(),
        sld: parsed.sld.clone(),
        word: word.to_string(),
        style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn engine() -> FraudEngine {
        FraudEngine::new().unwrap()
    }

    fn companies() -> Vec<ReferenceCompany> {
        Config::default().companies
    }

    #[test]
    fn test_tld_swap() {
        let verdict = engine().assess("walmart.net", &companies());
        assert!(verdict.is_fraudulent);
        let reason = verdict.reason.unwrap();
        assert!(reason.contains("Walmart"));
        assert!(reason.contains("\".net\""));
        assert!(reason.contains("\".com\""));
    }

    #[test]
    fn test_tld_swap_multi_level() {
        // bbc.co.uk is the first BBC entry; bbc.org swaps its TLD.
        let verdict = engine().assess("bbc.org", &companies());
        assert!(verdict.is_fraudulent);
        assert!(verdict.reason.unwrap().contains("BBC"));
    }

    #[test]
    fn test_tld_swap_for_every_official_domain() {
        let engine = engine();
        let companies = companies();
        for company in &companies {
            for official in &company.domains {
                let legit = crate::domain::parse(official).unwrap();
                if legit.tld == ".biz" {
                    continue;
                }
                let swapped = format!("{}.biz", legit.sld);
                let verdict = engine.assess(&swapped, &companies);
                assert!(verdict.is_fraudulent, "{swapped} should be flagged");
            }
        }
    }

    #[test]
    fn test_keyword_concatenation() {
        let verdict = engine().assess("walmartsupport.com", &companies());
        assert!(verdict.is_fraudulent);
        let reason = verdict.reason.unwrap();
        assert!(reason.contains("Walmart"));
        assert!(reason.contains("\"support\""));
    }

    #[test]
    fn test_keyword_prefix_concatenation() {
        let verdict = engine().assess("helpwalmart.com", &companies());
        assert!(verdict.is_fraudulent);
        assert!(verdict.reason.unwrap().contains("Walmart"));
    }

    #[test]
    fn test_single_letter_sld_containment() {
        // Twitter's x.com makes any sld with an "x" in it a containment hit;
        // the surrounding text is quoted when it holds a suspicious term.
        let verdict = engine().assess("helpnetflix.com", &companies());
        assert!(verdict.is_fraudulent);
        assert!(verdict.reason.unwrap().contains("Twitter"));
    }

    #[test]
    fn test_keyword_hyphenated() {
        let verdict = engine().assess("walmart-support.com", &companies());
        assert!(verdict.is_fraudulent);
        assert!(verdict.reason.unwrap().contains("\"-support\""));
    }

    #[test]
    fn test_keyword_numeric_infix() {
        let verdict = engine().assess("walmart2support.com", &companies());
        assert!(verdict.is_fraudulent);
        assert!(verdict.reason.unwrap().contains("numbers"));

        let verdict = engine().assess("walmartsupport247.com", &companies());
        assert!(verdict.is_fraudulent);
        assert!(verdict.reason.unwrap().contains("numbers"));
    }

    #[test]
    fn test_containment_with_suspicious_term() {
        let verdict = engine().assess("walmartonlineshop.com", &companies());
        assert!(verdict.is_fraudulent);
        let reason = verdict.reason.unwrap();
        assert!(reason.contains("embedding"));
        assert!(reason.contains("\"onlineshop\""));
    }

    #[test]
    fn test_containment_quotes_leading_text() {
        let verdict = engine().assess("usawalmart.com", &companies());
        assert!(verdict.is_fraudulent);
        assert!(verdict.reason.unwrap().contains("\"usa\""));
    }

    #[test]
    fn test_containment_catch_all() {
        // No suspicious term around the brand name, still flagged.
        let verdict = engine().assess("walmartian.com", &companies());
        assert!(verdict.is_fraudulent);
        assert!(verdict.reason.unwrap().starts_with("POTENTIAL FRAUD"));
    }

    #[test]
    fn test_containment_catch_all_false_positive() {
        // Known over-reach: "target" is a common English word, so any
        // compound containing it is flagged against Target.
        let verdict = engine().assess("retargeting.com", &companies());
        assert!(verdict.is_fraudulent);
        assert!(verdict.reason.unwrap().contains("Target"));
    }

    #[test]
    fn test_exact_official_domain() {
        let verdict = engine().assess("google.com", &companies());
        assert!(verdict.is_fraudulent);
        let reason = verdict.reason.unwrap();
        assert!(reason.contains("official domain of Google"));
        assert!(reason.contains("availability"));
    }

    #[test]
    fn test_typosquat_edit_distance() {
        let verdict = engine().assess("gooogle.com", &companies());
        assert!(verdict.is_fraudulent);
        assert!(verdict.reason.unwrap().contains("typosquatting"));
    }

    #[test]
    fn test_typosquat_homograph() {
        let verdict = engine().assess("krаken.com", &companies()); // Cyrillic а
        assert!(verdict.is_fraudulent);
    }

    #[test]
    fn test_static_brand_pattern() {
        // paypa1 is distance 1 from paypal, but the pattern table also covers
        // it for candidates checked without PayPal in the reference list.
        let verdict = engine().assess("paypa1.com", &[]);
        assert!(verdict.is_fraudulent);
        let reason = verdict.reason.unwrap();
        assert!(reason.contains("PayPal"));
        assert!(reason.contains("character substitution"));

        let verdict = engine().assess("amaz0n.net", &[]);
        assert!(verdict.is_fraudulent);
        assert!(verdict.reason.unwrap().contains("Amazon"));
    }

    #[test]
    fn test_benign_domain() {
        let verdict = engine().assess("my-new-domain.com", &companies());
        assert!(!verdict.is_fraudulent);
        assert_eq!(verdict.reason, None);
    }

    #[test]
    fn test_unparseable_input_is_benign() {
        let engine = engine();
        let companies = companies();
        for junk in ["", "localhost", "no dots here", "🦀", "\u{202E}evil"] {
            let verdict = engine.assess(junk, &companies);
            assert!(!verdict.is_fraudulent, "{junk:?} should be benign");
        }
    }

    #[test]
    fn test_first_match_short_circuits() {
        // google.net swaps the TLD of google.com, the very first official
        // domain; the verdict must name the swap, not a later tier.
        let verdict = engine().assess("google.net", &companies());
        assert!(verdict.is_fraudulent);
        assert!(verdict.reason.unwrap().contains("different TLD"));
    }

    #[test]
    fn test_assess_is_deterministic() {
        let engine = engine();
        let companies = companies();
        let first = engine.assess("walmart-support.com", &companies);
        let second = engine.assess("walmart-support.com", &companies);
        assert_eq!(first, second);
    }

    #[test]
    fn test_company_order_decides_reported_brand() {
        let shadow = vec![
            ReferenceCompany {
                name: "First".to_string(),
                domains: vec!["brand.com".to_string()],
            },
            ReferenceCompany {
                name: "Second".to_string(),
                domains: vec!["brand.com".to_string()],
            },
        ];
        let verdict = engine().assess("brand.net", &shadow);
        assert!(verdict.reason.unwrap().contains("First"));
    }
}
