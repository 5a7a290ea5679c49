//! Vocabulary → auxiliary-ontology property cross-reference.
//!
//! The base vocabulary does not encode cardinality restrictions; the
//! auxiliary ontology (GoodRelations) does, but under its own property
//! IRIs. This bundled table maps the vocabulary properties that have a
//! cardinality-bearing counterpart to that counterpart. Absence of a
//! mapping is a normal, expected outcome.

use schemagen_vocab::iris;

/// Version of the bundled cross-reference table.
pub const TABLE_VERSION: &str = "2024-03";

/// The bundled mapping, sorted by vocabulary property IRI for binary
/// search. Covers the schema.org properties aligned with GoodRelations.
static TABLE: &[(&str, &str)] = &[
    (
        "https://schema.org/acceptedPaymentMethod",
        "http://purl.org/goodrelations/v1#acceptedPaymentMethods",
    ),
    (
        "https://schema.org/availableAtOrFrom",
        "http://purl.org/goodrelations/v1#availableAtOrFrom",
    ),
    (
        "https://schema.org/brand",
        "http://purl.org/goodrelations/v1#hasBrand",
    ),
    (
        "https://schema.org/businessFunction",
        "http://purl.org/goodrelations/v1#hasBusinessFunction",
    ),
    (
        "https://schema.org/eligibleQuantity",
        "http://purl.org/goodrelations/v1#hasEligibleQuantity",
    ),
    (
        "https://schema.org/eligibleRegion",
        "http://purl.org/goodrelations/v1#eligibleRegions",
    ),
    (
        "https://schema.org/gtin13",
        "http://purl.org/goodrelations/v1#hasEAN_UCC-13",
    ),
    (
        "https://schema.org/includesObject",
        "http://purl.org/goodrelations/v1#includesObject",
    ),
    (
        "https://schema.org/inventoryLevel",
        "http://purl.org/goodrelations/v1#hasInventoryLevel",
    ),
    (
        "https://schema.org/makesOffer",
        "http://purl.org/goodrelations/v1#offers",
    ),
    (
        "https://schema.org/manufacturer",
        "http://purl.org/goodrelations/v1#hasManufacturer",
    ),
    (
        "https://schema.org/model",
        "http://purl.org/goodrelations/v1#hasMakeAndModel",
    ),
    (
        "https://schema.org/mpn",
        "http://purl.org/goodrelations/v1#hasMPN",
    ),
    (
        "https://schema.org/openingHoursSpecification",
        "http://purl.org/goodrelations/v1#hasOpeningHoursSpecification",
    ),
    (
        "https://schema.org/owns",
        "http://purl.org/goodrelations/v1#owns",
    ),
    (
        "https://schema.org/priceSpecification",
        "http://purl.org/goodrelations/v1#hasPriceSpecification",
    ),
    (
        "https://schema.org/seeks",
        "http://purl.org/goodrelations/v1#seeks",
    ),
    (
        "https://schema.org/sku",
        "http://purl.org/goodrelations/v1#hasStockKeepingUnit",
    ),
    (
        "https://schema.org/typeOfGood",
        "http://purl.org/goodrelations/v1#typeOfGood",
    ),
    (
        "https://schema.org/validFrom",
        "http://purl.org/goodrelations/v1#validFrom",
    ),
    (
        "https://schema.org/validThrough",
        "http://purl.org/goodrelations/v1#validThrough",
    ),
    (
        "https://schema.org/warranty",
        "http://purl.org/goodrelations/v1#hasWarrantyPromise",
    ),
];

/// Static cross-reference from vocabulary property IRIs to
/// auxiliary-ontology property IRIs.
#[derive(Debug, Clone, Copy)]
pub struct OntologyBridge {
    table: &'static [(&'static str, &'static str)],
}

impl OntologyBridge {
    /// Returns the bridge over the bundled table.
    #[must_use]
    pub fn bundled() -> Self {
        Self { table: TABLE }
    }

    /// Returns a bridge over an alternative static table. The table must be
    /// sorted by vocabulary property IRI. Generation ships the bundled
    /// table; this exists for exercising alternative bundles.
    #[must_use]
    pub fn with_table(table: &'static [(&'static str, &'static str)]) -> Self {
        Self { table }
    }

    /// Looks up the auxiliary-ontology counterpart of a vocabulary
    /// property. `None` when the property has no cardinality-bearing
    /// counterpart — a normal outcome, not an error.
    #[must_use]
    pub fn lookup(&self, property_iri: &str) -> Option<&'static str> {
        let normalized = iris::normalize_schema_iri(property_iri);
        self.table
            .binary_search_by(|(key, _)| (*key).cmp(normalized.as_str()))
            .ok()
            .map(|i| self.table[i].1)
    }

    /// Number of mapped properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True when the table is empty (never for the bundled table).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
