//! Inclusion flags selecting which fields a query projects.
//!
//! Every flag defaults to `true`. The structs deserialize from query strings,
//! so a missing parameter keeps its default.

use serde_derive::{Deserialize, Serialize};

use crate::error::{CovidError, Result};

/// Case counts shared by provinces, cities and countries.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CountFields {
    pub current: bool,
    pub confirmed: bool,
    pub cured: bool,
    pub dead: bool,
}

impl Default for CountFields {
    fn default() -> Self {
        Self { current: true, confirmed: true, cured: true, dead: true }
    }
}

impl CountFields {
    pub fn none() -> Self {
        Self { current: false, confirmed: false, cured: false, dead: false }
    }

    pub fn is_empty(&self) -> bool {
        !(self.current || self.confirmed || self.cured || self.dead)
    }

    pub(crate) fn require_any(&self) -> Result<()> {
        if self.is_empty() {
            return Err(CovidError::InvalidArgument(
                "at least one of current, confirmed, cured, dead must be requested".to_string(),
            ));
        }
        Ok(())
    }
}

/// Country counts plus the daily increments.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct WorldFields {
    pub current: bool,
    pub confirmed: bool,
    pub cured: bool,
    pub dead: bool,
    pub confirmed_incr: bool,
    pub cured_incr: bool,
    pub dead_incr: bool,
}

impl Default for WorldFields {
    fn default() -> Self {
        Self {
            current: true,
            confirmed: true,
            cured: true,
            dead: true,
            confirmed_incr: true,
            cured_incr: true,
            dead_incr: true,
        }
    }
}

impl WorldFields {
    pub fn none() -> Self {
        Self {
            current: false,
            confirmed: false,
            cured: false,
            dead: false,
            confirmed_incr: false,
            cured_incr: false,
            dead_incr: false,
        }
    }

    pub fn counts(&self) -> CountFields {
        CountFields { current: self.current, confirmed: self.confirmed, cured: self.cured, dead: self.dead }
    }

    pub fn is_empty(&self) -> bool {
        self.counts().is_empty() && !(self.confirmed_incr || self.cured_incr || self.dead_incr)
    }

    pub(crate) fn require_any(&self) -> Result<()> {
        if self.is_empty() {
            return Err(CovidError::InvalidArgument(
                "at least one of current, confirmed, cured, dead, confirmed_incr, cured_incr, dead_incr must be requested"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct DangerOptions {
    /// Per-city high/mid risk counts.
    pub include_cities: bool,
    /// Per-province high/mid risk counts.
    pub include_counts: bool,
    /// Area names bucketed by risk level.
    pub include_areas: bool,
}

impl Default for DangerOptions {
    fn default() -> Self {
        Self { include_cities: true, include_counts: true, include_areas: true }
    }
}

impl DangerOptions {
    pub(crate) fn require_any(&self) -> Result<()> {
        if !(self.include_cities || self.include_counts || self.include_areas) {
            return Err(CovidError::InvalidArgument(
                "at least one of include_cities, include_counts, include_areas must be true".to_string(),
            ));
        }
        Ok(())
    }

    /// Without per-city or per-province counts the report collapses into one merged listing.
    pub fn is_merged(&self) -> bool {
        !self.include_cities && !self.include_counts
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct NewsFields {
    pub time: bool,
    pub source: bool,
    pub url: bool,
    pub summary: bool,
}

impl Default for NewsFields {
    fn default() -> Self {
        Self { time: true, source: true, url: true, summary: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_fields_empty() {
        assert!(!CountFields::default().is_empty());
        assert!(CountFields::none().is_empty());
        assert!(matches!(CountFields::none().require_any(), Err(CovidError::InvalidArgument(_))));

        let only_dead = CountFields { dead: true, ..CountFields::none() };
        assert!(only_dead.require_any().is_ok());
    }

    #[test]
    fn test_world_fields_increment_only_is_not_empty() {
        let incr = WorldFields { dead_incr: true, ..WorldFields::none() };
        assert!(incr.counts().is_empty());
        assert!(!incr.is_empty());
        assert!(WorldFields::none().require_any().is_err());
    }

    #[test]
    fn test_danger_options() {
        let none = DangerOptions { include_cities: false, include_counts: false, include_areas: false };
        assert!(none.require_any().is_err());

        let areas_only = DangerOptions { include_areas: true, ..none };
        assert!(areas_only.require_any().is_ok());
        assert!(areas_only.is_merged());
        assert!(!DangerOptions::default().is_merged());
    }

    #[test]
    fn test_missing_flags_keep_defaults() {
        let fields: CountFields = serde_json::from_str(r#"{"dead": false}"#).unwrap();
        assert_eq!(fields, CountFields { dead: false, ..CountFields::default() });

        let news: NewsFields = serde_json::from_str("{}").unwrap();
        assert_eq!(news, NewsFields::default());
    }
}
