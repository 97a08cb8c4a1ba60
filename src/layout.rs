//! Fixed shape of the benchmark table.
//!
//! The flat results CSV carries exactly one data row per (variant,
//! size-class) combination: four consecutive size-class rows per variant,
//! eight variants. The index->bucket mapping lives here as an explicit
//! ordered layout so the fixed-shape assumption stays auditable.

/// Request/response payload size bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Tiny,
    Small,
    Medium,
    Large,
}

impl SizeClass {
    /// Size-class order within each variant's group of rows.
    pub const ALL: [SizeClass; 4] = [
        SizeClass::Tiny,
        SizeClass::Small,
        SizeClass::Medium,
        SizeClass::Large,
    ];
}

/// (protocol, proxy) variants in input group order, which is also the output
/// row order.
pub const VARIANTS: [&str; 8] = [
    "http-monolake",
    "http-nginx",
    "http-traefik",
    "http-envoy",
    "https-monolake",
    "https-nginx",
    "https-traefik",
    "https-envoy",
];

/// Data rows a well-formed input must have after the header.
pub const EXPECTED_ROWS: usize = VARIANTS.len() * SizeClass::ALL.len();

/// Bucket for the data row at `index` (0-based, header excluded), or None
/// past the end of the fixed table.
pub fn slot(index: usize) -> Option<(&'static str, SizeClass)> {
    if index >= EXPECTED_ROWS {
        return None;
    }
    let group = SizeClass::ALL.len();
    Some((VARIANTS[index / group], SizeClass::ALL[index % group]))
}
