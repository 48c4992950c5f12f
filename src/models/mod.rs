use serde::{Deserialize, Serialize};
use std::fmt;

/// Display language of the site
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    El,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::El, Locale::En];

    /// Resolve a raw locale code, falling back to Greek for anything unsupported
    pub fn resolve(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" => Locale::En,
            _ => Locale::El,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::El => "el",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A value present in every supported locale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Localized<T> {
    pub el: T,
    pub en: T,
}

impl<T> Localized<T> {
    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::El => &self.el,
            Locale::En => &self.en,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        [&self.el, &self.en].into_iter()
    }
}

/// Whether a listing is for sale or for rent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Buy,
    Rent,
}

impl TransactionType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "buy" => Some(Self::Buy),
            "rent" => Some(Self::Rent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Rent => "rent",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    Villa,
    House,
    Land,
    Penthouse,
}

impl PropertyType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "apartment" => Some(Self::Apartment),
            "villa" => Some(Self::Villa),
            "house" => Some(Self::House),
            "land" => Some(Self::Land),
            "penthouse" => Some(Self::Penthouse),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::Villa => "villa",
            Self::House => "house",
            Self::Land => "land",
            Self::Penthouse => "penthouse",
        }
    }
}

/// Physical details of a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Specifications {
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Living area in square meters
    pub area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_class: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seo {
    pub title: Localized<String>,
    pub description: Localized<String>,
}

/// One listing in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: String,
    pub slug: String,
    pub title: Localized<String>,
    pub description: Localized<String>,
    /// Whole euros; monthly rent for rentals
    pub price: i64,
    pub transaction_type: TransactionType,
    pub property_type: PropertyType,
    pub location: Localized<String>,
    pub specifications: Specifications,
    pub features: Localized<Vec<String>>,
    pub images: Vec<String>,
    pub featured: bool,
    pub seo: Seo,
}

impl PropertyRecord {
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
