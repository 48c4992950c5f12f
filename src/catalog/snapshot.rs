use crate::error::{CatalogError, Result};
use crate::models::{Locale, PropertyRecord};
use crate::query::{self, FilterCriteria};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, info};

/// Number of listings shown in the home page highlight
pub const HOME_FEATURED_LIMIT: usize = 6;

/// Immutable, validated set of properties
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<PropertyRecord>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Validate `records` and freeze them in load order
    pub fn new(records: Vec<PropertyRecord>) -> Result<Self> {
        validate(&records)?;
        info!("Catalog ready with {} properties", records.len());

        Ok(Self {
            records,
            loaded_at: Utc::now(),
        })
    }

    /// Parse a JSON array of properties
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<PropertyRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn query(&self, criteria: &FilterCriteria) -> Vec<&PropertyRecord> {
        query::query(&self.records, criteria)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&PropertyRecord> {
        self.records.iter().find(|p| p.slug == slug)
    }

    /// First `limit` featured properties in catalog order
    pub fn featured(&self, limit: usize) -> Vec<&PropertyRecord> {
        self.records.iter().filter(|p| p.featured).take(limit).collect()
    }

    /// Every detail page to pre-render, one per locale per property
    pub fn static_params(&self) -> Vec<(Locale, &str)> {
        self.records
            .iter()
            .flat_map(|p| Locale::ALL.into_iter().map(move |locale| (locale, p.slug.as_str())))
            .collect()
    }
}

pub fn detail_path(locale: Locale, slug: &str) -> String {
    format!("/{}/properties/{}", locale, slug)
}

/// Detail page path in every locale, for alternate-language links
pub fn alternate_paths(slug: &str) -> Vec<(Locale, String)> {
    Locale::ALL
        .into_iter()
        .map(|locale| (locale, detail_path(locale, slug)))
        .collect()
}

fn validate(records: &[PropertyRecord]) -> Result<()> {
    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();

    for (index, record) in records.iter().enumerate() {
        if record.id.trim().is_empty() {
            return Err(CatalogError::MissingIdentity { index, field: "id" });
        }
        if record.slug.trim().is_empty() {
            return Err(CatalogError::MissingIdentity { index, field: "slug" });
        }
        if !ids.insert(record.id.as_str()) {
            return Err(CatalogError::DuplicateId(record.id.clone()));
        }
        if !slugs.insert(record.slug.as_str()) {
            return Err(CatalogError::DuplicateSlug(record.slug.clone()));
        }

        if record.price < 0 {
            return Err(invalid(record, "price", format!("{} is negative", record.price)));
        }
        check_measure(record, "area", record.specifications.area)?;
        if let Some(plot) = record.specifications.plot_size {
            check_measure(record, "plotSize", plot)?;
        }

        debug!("Validated property {} ({})", record.id, record.slug);
    }

    Ok(())
}

fn check_measure(record: &PropertyRecord, field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(invalid(record, field, format!("{} is not a finite number", value)));
    }
    if value < 0.0 {
        return Err(invalid(record, field, format!("{} is negative", value)));
    }
    Ok(())
}

fn invalid(record: &PropertyRecord, field: &'static str, reason: String) -> CatalogError {
    CatalogError::InvalidValue {
        id: record.id.clone(),
        field,
        reason,
    }
}
