use crate::models::{Locale, PropertyType, TransactionType};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Ordering applied to a filtered listing
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Featured listings first, catalog order otherwise. There is no listing date.
    #[default]
    Date,
    PriceAsc,
    PriceDesc,
    AreaAsc,
    AreaDesc,
}

impl SortKey {
    /// Parse a sort key; anything unrecognised sorts by `date`
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "area-asc" => Self::AreaAsc,
            "area-desc" => Self::AreaDesc,
            _ => Self::Date,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::AreaAsc => "area-asc",
            Self::AreaDesc => "area-desc",
        }
    }
}

/// Filter and sort parameters for one listing query
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCriteria {
    pub transaction_type: Option<TransactionType>,
    pub property_type: Option<PropertyType>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_bedrooms: Option<i64>,
    /// Matched case-insensitively against every localized location
    pub location: Option<String>,
    pub sort: SortKey,
}

impl FilterCriteria {
    /// Build criteria from raw key/value parameters.
    ///
    /// Never fails: empty values, `all`, malformed numbers and unknown enum
    /// values leave the corresponding field unset. `location` is kept verbatim
    /// and only an empty value leaves it unset. Unknown keys are ignored and
    /// a repeated key overwrites the earlier value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut criteria = Self::default();

        for (key, value) in pairs {
            let key = key.as_ref();
            let raw = value.as_ref();
            let value = raw.trim();
            let value = if value.is_empty() || value == "all" {
                None
            } else {
                Some(value)
            };

            match key {
                "type" | "transactionType" => {
                    criteria.transaction_type = value.and_then(TransactionType::parse);
                }
                "propertyType" => {
                    criteria.property_type = value.and_then(PropertyType::parse);
                }
                "minPrice" => criteria.min_price = value.and_then(parse_int),
                "maxPrice" => criteria.max_price = value.and_then(parse_int),
                "bedrooms" | "minBedrooms" => criteria.min_bedrooms = value.and_then(parse_int),
                // Substring needle, matched exactly as given
                "location" | "locationSubstring" => {
                    criteria.location = Some(raw.to_string()).filter(|l| !l.is_empty());
                }
                "sortBy" | "sortKey" => {
                    criteria.sort = value.map(SortKey::parse).unwrap_or_default();
                }
                _ => {}
            }
        }

        criteria
    }

    /// Build criteria from a URL query string, with or without the leading `?`
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()))
    }

    /// Active parameters under their canonical URL keys. A `date` sort is implied.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(kind) = self.transaction_type {
            pairs.push(("type", kind.as_str().to_string()));
        }
        if let Some(kind) = self.property_type {
            pairs.push(("propertyType", kind.as_str().to_string()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice", max.to_string()));
        }
        if let Some(bedrooms) = self.min_bedrooms {
            pairs.push(("bedrooms", bedrooms.to_string()));
        }
        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            pairs.push(("location", location.to_string()));
        }
        if self.sort != SortKey::Date {
            pairs.push(("sortBy", self.sort.as_str().to_string()));
        }

        pairs
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_query_pairs())
            .finish()
    }

    pub fn has_active_filters(&self) -> bool {
        !self.to_query_pairs().is_empty()
    }

    /// Path of the listings page showing these criteria
    pub fn listing_path(&self, locale: Locale) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            format!("/{}/properties", locale)
        } else {
            format!("/{}/properties?{}", locale, query)
        }
    }
}

/// Read a leading integer the way form inputs are usually coerced: optional sign,
/// then digits, stopping at the first non-digit. Returns `None` without digits;
/// values outside the `i64` range saturate.
fn parse_int(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    match rest[..digits].parse::<i64>() {
        Ok(value) if negative => Some(-value),
        Ok(value) => Some(value),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_is_lenient() {
        assert_eq!(parse_int("120000"), Some(120000));
        assert_eq!(parse_int(" 42 "), Some(42));
        assert_eq!(parse_int("1500.50"), Some(1500));
        assert_eq!(parse_int("3bed"), Some(3));
        assert_eq!(parse_int("-5"), Some(-5));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_int("9223372036854775808"), Some(i64::MAX));
        assert_eq!(parse_int("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int("-99999999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn test_from_pairs_reads_every_field() {
        let criteria = FilterCriteria::from_pairs([
            ("type", "rent"),
            ("propertyType", "villa"),
            ("minPrice", "1000"),
            ("maxPrice", "5000"),
            ("bedrooms", "2"),
            ("location", "Paros"),
            ("sortBy", "area-desc"),
        ]);

        assert_eq!(criteria.transaction_type, Some(TransactionType::Rent));
        assert_eq!(criteria.property_type, Some(PropertyType::Villa));
        assert_eq!(criteria.min_price, Some(1000));
        assert_eq!(criteria.max_price, Some(5000));
        assert_eq!(criteria.min_bedrooms, Some(2));
        assert_eq!(criteria.location.as_deref(), Some("Paros"));
        assert_eq!(criteria.sort, SortKey::AreaDesc);
    }

    #[test]
    fn test_from_pairs_accepts_aliases() {
        let criteria = FilterCriteria::from_pairs([
            ("transactionType", "buy"),
            ("minBedrooms", "3"),
            ("locationSubstring", "crete"),
            ("sortKey", "price-desc"),
        ]);

        assert_eq!(criteria.transaction_type, Some(TransactionType::Buy));
        assert_eq!(criteria.min_bedrooms, Some(3));
        assert_eq!(criteria.location.as_deref(), Some("crete"));
        assert_eq!(criteria.sort, SortKey::PriceDesc);
    }

    #[test]
    fn test_malformed_values_are_unset() {
        let criteria = FilterCriteria::from_pairs([
            ("type", "lease"),
            ("propertyType", "castle"),
            ("minPrice", "abc"),
            ("maxPrice", ""),
            ("bedrooms", "all"),
            ("location", ""),
            ("sortBy", "newest"),
            ("page", "2"),
        ]);

        assert_eq!(criteria, FilterCriteria::default());
        assert!(!criteria.has_active_filters());
    }

    #[test]
    fn test_location_is_kept_verbatim() {
        let criteria = FilterCriteria::from_pairs([("location", "athens ")]);
        assert_eq!(criteria.location.as_deref(), Some("athens "));

        let criteria = FilterCriteria::from_pairs([("location", " ")]);
        assert_eq!(criteria.location.as_deref(), Some(" "));

        let criteria = FilterCriteria::from_pairs([("location", "all")]);
        assert_eq!(criteria.location.as_deref(), Some("all"));

        let criteria = FilterCriteria::from_query_string("location=athens%20");
        assert_eq!(FilterCriteria::from_query_string(&criteria.to_query_string()), criteria);
    }

    #[test]
    fn test_later_duplicate_overwrites() {
        let criteria = FilterCriteria::from_pairs([("minPrice", "100"), ("minPrice", "200")]);
        assert_eq!(criteria.min_price, Some(200));

        let criteria = FilterCriteria::from_pairs([("type", "buy"), ("type", "all")]);
        assert_eq!(criteria.transaction_type, None);
    }

    #[test]
    fn test_from_query_string_decodes() {
        let criteria = FilterCriteria::from_query_string("?location=new+york%20city&sortBy=price-asc");
        assert_eq!(criteria.location.as_deref(), Some("new york city"));
        assert_eq!(criteria.sort, SortKey::PriceAsc);

        let criteria = FilterCriteria::from_query_string("location=%CE%9C%CF%8D%CE%BA%CE%BF%CE%BD%CE%BF%CF%82");
        assert_eq!(criteria.location.as_deref(), Some("Μύκονος"));

        assert_eq!(FilterCriteria::from_query_string(""), FilterCriteria::default());
    }

    #[test]
    fn test_query_string_round_trip() {
        let criteria = FilterCriteria {
            transaction_type: Some(TransactionType::Buy),
            property_type: Some(PropertyType::Penthouse),
            min_price: Some(250000),
            max_price: None,
            min_bedrooms: Some(2),
            location: Some("Άγιος Νικόλαος".to_string()),
            sort: SortKey::PriceDesc,
        };

        let query = criteria.to_query_string();
        assert!(query.starts_with("type=buy&propertyType=penthouse&minPrice=250000&bedrooms=2"));
        assert!(query.ends_with("&sortBy=price-desc"));
        assert_eq!(FilterCriteria::from_query_string(&query), criteria);
    }

    #[test]
    fn test_date_sort_is_not_serialized() {
        let criteria = FilterCriteria::default();
        assert!(criteria.to_query_pairs().is_empty());
        assert_eq!(criteria.listing_path(Locale::El), "/el/properties");

        let criteria = FilterCriteria {
            sort: SortKey::AreaAsc,
            ..Default::default()
        };
        assert!(criteria.has_active_filters());
        assert_eq!(criteria.listing_path(Locale::En), "/en/properties?sortBy=area-asc");
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("date"), SortKey::Date);
        assert_eq!(SortKey::parse("price-asc"), SortKey::PriceAsc);
        assert_eq!(SortKey::parse("PRICE-ASC"), SortKey::Date);
        assert_eq!(SortKey::parse(""), SortKey::Date);
    }
}
