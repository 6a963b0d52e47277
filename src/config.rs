use serde::{Deserialize, Serialize};

/// A legitimate brand and the domains it actually operates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCompany {
    pub name: String,
    pub domains: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Reference companies the heuristics match candidates against.
    #[serde(default = "default_companies")]
    pub companies: Vec<ReferenceCompany>,
    /// TLDs the registrar can actually register; anything else is reported
    /// as unsupported before any fraud check runs.
    #[serde(default = "default_supported_tlds")]
    pub supported_tlds: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            companies: default_companies(),
            supported_tlds: default_supported_tlds(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn is_supported_tld(&self, tld: &str) -> bool {
        self.supported_tlds.iter().any(|t| t == tld)
    }
}

fn company(name: &str, domains: &[&str]) -> ReferenceCompany {
    ReferenceCompany {
        name: name.to_string(),
        domains: domains.iter().map(|d| d.to_string()).collect(),
    }
}

/// Built-in reference list: major tech, retail, crypto, and banking brands,
/// plus international brands on multi-level TLDs.
fn default_companies() -> Vec<ReferenceCompany> {
    vec![
        company("Google", &["google.com", "gmail.com", "youtube.com", "googleblog.com"]),
        company("Apple", &["apple.com", "icloud.com", "itunes.com", "appstore.com"]),
        company("Microsoft", &["microsoft.com", "outlook.com", "office.com", "xbox.com"]),
        company("Amazon", &["amazon.com", "aws.com", "prime.com", "alexa.com"]),
        company("Meta", &["facebook.com", "instagram.com", "whatsapp.com", "meta.com"]),
        company("Twitter", &["twitter.com", "x.com"]),
        company("PayPal", &["paypal.com", "paypalobjects.com"]),
        company("Netflix", &["netflix.com", "netflixstudios.com"]),
        company("Spotify", &["spotify.com", "spotifycdn.com"]),
        company("Tesla", &["tesla.com", "teslamotors.com"]),
        company("Walmart", &["walmart.com", "walmartlabs.com"]),
        company("Target", &["target.com"]),
        company("Best Buy", &["bestbuy.com"]),
        company("Home Depot", &["homedepot.com"]),
        // Crypto platforms
        company("Coinbase", &["coinbase.com", "coinbasepro.com"]),
        company("Binance", &["binance.com", "binance.us"]),
        company("Kraken", &["kraken.com"]),
        company("Gemini", &["gemini.com"]),
        company("Atomic Wallet", &["atomicwallet.io"]),
        company("MetaMask", &["metamask.io"]),
        company("Trust Wallet", &["trustwallet.com"]),
        company("Exodus", &["exodus.com"]),
        company("Ledger", &["ledger.com"]),
        company("Trezor", &["trezor.io"]),
        company("Crypto.com", &["crypto.com"]),
        company("KuCoin", &["kucoin.com"]),
        company("Huobi", &["huobi.com"]),
        company("OKX", &["okx.com"]),
        // Banks
        company("JPMorgan Chase", &["chase.com", "jpmorganmarkets.com"]),
        company("Bank of America", &["bankofamerica.com", "bofa.com"]),
        company("Wells Fargo", &["wellsfargo.com"]),
        company("Citibank", &["citibank.com", "citi.com"]),
        // International brands on multi-level TLDs
        company("BBC", &["bbc.co.uk", "bbc.com"]),
        company("Tesco", &["tesco.com", "tesco.co.uk"]),
        company("Vodafone UK", &["vodafone.co.uk", "vodafone.com"]),
        company("Commonwealth Bank", &["commbank.com.au"]),
        company("Sberbank", &["sberbank.ru", "sberbank.com"]),
        company("Mail.ru", &["mail.ru"]),
    ]
}

/// TLDs the registrar offers, single- and multi-level.
fn default_supported_tlds() -> Vec<String> {
    [
        ".com", ".net", ".org", ".info", ".biz", ".name", ".mobi", ".tv", ".cc", ".co", ".me",
        ".io", ".ai", ".app", ".dev", ".online", ".store", ".tech", ".website", ".co.uk",
        ".com.au", ".com.br", ".com.ru", ".co.jp", ".co.za", ".co.in", ".com.mx", ".com.ar",
        ".com.pe", ".com.co", ".com.ve", ".com.ec", ".org.uk", ".net.au", ".gov.uk", ".edu.au",
        ".ac.uk", ".org.za",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_reference_data() {
        let config = Config::default();
        assert_eq!(config.companies.len(), 38);
        assert!(config.companies.iter().any(|c| c.name == "Walmart"));
        assert!(config
            .companies
            .iter()
            .any(|c| c.domains.contains(&"bbc.co.uk".to_string())));
    }

    #[test]
    fn test_supported_tld_lookup() {
        let config = Config::default();
        assert!(config.is_supported_tld(".com"));
        assert!(config.is_supported_tld(".co.uk"));
        assert!(!config.is_supported_tld(".xyz"));
    }

    #[test]
    fn test_yaml_parsing_with_defaults() {
        let yaml = r#"
companies:
  - name: Example Corp
    domains:
      - example.com
      - example.co.uk
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.companies.len(), 1);
        assert_eq!(config.companies[0].name, "Example Corp");
        // Omitted fields fall back to the built-in tables.
        assert!(config.is_supported_tld(".com"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let reloaded: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(reloaded.companies, config.companies);
        assert_eq!(reloaded.supported_tlds, config.supported_tlds);
    }
}
