use crate::models::Locale;
use crate::query::FilterCriteria;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "property-catalog")]
#[command(about = "Query the property catalog the way the listings page does")]
pub struct CliConfig {
    /// Catalog JSON file
    #[arg(long, env = "CATALOG_PATH", default_value = "data/properties.json")]
    pub catalog: String,

    /// Fetch the catalog from a URL instead of the file
    #[arg(long, env = "CATALOG_URL")]
    pub catalog_url: Option<String>,

    /// Display locale (el or en); anything else falls back to el
    #[arg(long, env = "SITE_LOCALE", default_value = "el")]
    pub locale: String,

    /// Listing query string, e.g. "type=buy&location=paros&sortBy=price-asc"
    #[arg(long, short, default_value = "")]
    pub query: String,

    /// Print matching records as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn locale(&self) -> Locale {
        Locale::resolve(&self.locale)
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_query_string(&self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortKey;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["property-catalog"]);
        assert_eq!(config.catalog, "data/properties.json");
        assert!(config.catalog_url.is_none());
        assert_eq!(config.locale(), Locale::El);
        assert_eq!(config.criteria(), FilterCriteria::default());
        assert!(!config.json);
    }

    #[test]
    fn test_query_and_locale() {
        let config = CliConfig::parse_from([
            "property-catalog",
            "--locale",
            "en",
            "--query",
            "type=rent&sortBy=price-asc",
            "--json",
        ]);
        assert_eq!(config.locale(), Locale::En);
        let criteria = config.criteria();
        assert_eq!(criteria.sort, SortKey::PriceAsc);
        assert!(criteria.transaction_type.is_some());
        assert!(config.json);
    }
}
