use std::collections::BTreeMap;

use crate::domain::validation::ValidationError;

/// Region the API assumes when only an edge is given.
pub const DEFAULT_REGION: &str = "us1";

const API_DOMAIN: &str = "twilio.com";

fn validate_host_label(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::InvalidHostLabel {
            field,
            input: trimmed.to_owned(),
        });
    }
    Ok(trimmed.to_owned())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Edge location a request enters the network through (e.g. `dublin`).
///
/// Invariant: a non-empty DNS label of lowercase ASCII letters, digits and `-`.
pub struct Edge(String);

impl Edge {
    pub const FIELD: &'static str = "edge";

    /// Create a validated [`Edge`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        validate_host_label(Self::FIELD, value.into()).map(Self)
    }

    /// Borrow the edge label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Processing region code (e.g. `ie1`).
///
/// Invariant: a non-empty DNS label of lowercase ASCII letters, digits and `-`.
pub struct RegionCode(String);

impl RegionCode {
    pub const FIELD: &'static str = "region";

    /// Create a validated [`RegionCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        validate_host_label(Self::FIELD, value.into()).map(Self)
    }

    /// Borrow the region code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
/// Transport-level routing parameters.
///
/// The default value routes nowhere: requests go to the global host.
pub struct Routing {
    edge: Option<Edge>,
    region: Option<RegionCode>,
}

impl Routing {
    /// Routing with an optional edge and an optional region.
    pub fn new(edge: Option<Edge>, region: Option<RegionCode>) -> Self {
        Self { edge, region }
    }

    /// Dublin edge, `ie1` region.
    pub fn ireland() -> Self {
        Self {
            edge: Some(Edge("dublin".to_owned())),
            region: Some(RegionCode("ie1".to_owned())),
        }
    }

    /// Sydney edge only; the region falls back to [`DEFAULT_REGION`].
    pub fn australia() -> Self {
        Self {
            edge: Some(Edge("sydney".to_owned())),
            region: None,
        }
    }

    pub fn edge(&self) -> Option<&Edge> {
        self.edge.as_ref()
    }

    pub fn region(&self) -> Option<&RegionCode> {
        self.region.as_ref()
    }

    /// `true` when neither an edge nor a region is set.
    pub fn is_default(&self) -> bool {
        self.edge.is_none() && self.region.is_none()
    }

    /// Host name for `product` under this routing.
    ///
    /// - edge and region: `{product}.{edge}.{region}.twilio.com`
    /// - edge only: region falls back to [`DEFAULT_REGION`]
    /// - region only: `{product}.{region}.twilio.com`
    /// - neither: `{product}.twilio.com`
    pub fn host(&self, product: &str) -> String {
        let region = match (&self.edge, &self.region) {
            (_, Some(region)) => Some(region.as_str()),
            (Some(_), None) => Some(DEFAULT_REGION),
            (None, None) => None,
        };

        let mut labels = vec![product];
        if let Some(edge) = &self.edge {
            labels.push(edge.as_str());
        }
        if let Some(region) = region {
            labels.push(region);
        }
        labels.push(API_DOMAIN);
        labels.join(".")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Table of human-readable region aliases.
///
/// Lookups trim surrounding whitespace and otherwise match the alias exactly, so `DUBLIN`
/// is not `dublin`. Anything not in the table resolves to `None`, which callers must treat
/// as "keep the default routing".
pub struct RegionAliases {
    aliases: BTreeMap<String, Routing>,
}

impl RegionAliases {
    /// A table with no aliases.
    pub fn empty() -> Self {
        Self {
            aliases: BTreeMap::new(),
        }
    }

    /// Add or replace an alias.
    pub fn with_alias(mut self, alias: impl AsRef<str>, routing: Routing) -> Self {
        self.insert(alias, routing);
        self
    }

    /// Add or replace an alias in place. Blank aliases are ignored.
    pub fn insert(&mut self, alias: impl AsRef<str>, routing: Routing) {
        let key = alias.as_ref().trim();
        if !key.is_empty() {
            self.aliases.insert(key.to_owned(), routing);
        }
    }

    /// Resolve an optional alias to routing parameters.
    pub fn resolve(&self, alias: Option<&str>) -> Option<&Routing> {
        let key = alias?.trim();
        if key.is_empty() {
            return None;
        }
        self.aliases.get(key)
    }
}

impl Default for RegionAliases {
    fn default() -> Self {
        Self::empty()
            .with_alias("dublin", Routing::ireland())
            .with_alias("ie1", Routing::ireland())
            .with_alias("ireland", Routing::ireland())
            .with_alias("sydney", Routing::australia())
            .with_alias("au1", Routing::australia())
    }
}
