use super::criteria::{FilterCriteria, SortKey};
use crate::models::PropertyRecord;
use std::cmp::Ordering;
use tracing::debug;

type Predicate<'c> = Box<dyn Fn(&PropertyRecord) -> bool + 'c>;

/// Filter and order `records` by `criteria`.
///
/// The result borrows from `records`, keeps only records passing every active
/// filter and is stably sorted, so equal keys keep catalog order.
pub fn query<'a>(
    records: &'a [PropertyRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a PropertyRecord> {
    let predicates = predicates(criteria);

    let mut matched: Vec<&PropertyRecord> = records
        .iter()
        .filter(|record| predicates.iter().all(|keep| keep(*record)))
        .collect();

    sort(&mut matched, criteria.sort);

    debug!(
        "Query matched {} of {} properties ({} filters, sort={})",
        matched.len(),
        records.len(),
        predicates.len(),
        criteria.sort.as_str()
    );

    matched
}

fn predicates(criteria: &FilterCriteria) -> Vec<Predicate<'_>> {
    let mut predicates: Vec<Predicate<'_>> = Vec::new();

    if let Some(kind) = criteria.transaction_type {
        predicates.push(Box::new(move |p: &PropertyRecord| p.transaction_type == kind));
    }
    if let Some(kind) = criteria.property_type {
        predicates.push(Box::new(move |p: &PropertyRecord| p.property_type == kind));
    }
    if let Some(min) = criteria.min_price {
        predicates.push(Box::new(move |p: &PropertyRecord| p.price >= min));
    }
    if let Some(max) = criteria.max_price {
        predicates.push(Box::new(move |p: &PropertyRecord| p.price <= max));
    }
    if let Some(min) = criteria.min_bedrooms {
        predicates.push(Box::new(move |p: &PropertyRecord| {
            i64::from(p.specifications.bedrooms) >= min
        }));
    }
    if let Some(needle) = criteria.location.as_deref().filter(|n| !n.is_empty()) {
        let needle = needle.to_lowercase();
        predicates.push(Box::new(move |p: &PropertyRecord| {
            p.location
                .iter()
                .any(|place| place.to_lowercase().contains(&needle))
        }));
    }

    predicates
}

fn sort(records: &mut [&PropertyRecord], key: SortKey) {
    match key {
        SortKey::PriceAsc => records.sort_by_key(|p| p.price),
        SortKey::PriceDesc => records.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::AreaAsc => records.sort_by(|a, b| compare_area(a, b)),
        SortKey::AreaDesc => records.sort_by(|a, b| compare_area(b, a)),
        // false < true, so featured listings move to the front
        SortKey::Date => records.sort_by_key(|p| !p.featured),
    }
}

// Areas are finite after load, and -0.0 equals 0.0 here
fn compare_area(a: &PropertyRecord, b: &PropertyRecord) -> Ordering {
    a.specifications
        .area
        .partial_cmp(&b.specifications.area)
        .unwrap_or(Ordering::Equal)
}
