//! Projected records returned by the dashboard queries.
//!
//! Fields that were not requested are `None` and left out of the serialized form,
//! so `{"provinceName": "粤", "dead": 5}` is the projection with only `dead` enabled.

use serde_derive::{Deserialize, Serialize};

use crate::covid::{CityStat, CountryStat, ProvinceStat};
use crate::fields::{CountFields, WorldFields};

/// The four case counts, each present only when requested.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Counts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_confirmed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cured: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dead: Option<i64>,
}

impl Counts {
    fn project(fields: &CountFields, current: i64, confirmed: i64, cured: i64, dead: i64) -> Self {
        Self {
            current_confirmed: fields.current.then_some(current),
            confirmed: fields.confirmed.then_some(confirmed),
            cured: fields.cured.then_some(cured),
            dead: fields.dead.then_some(dead),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceSummary {
    pub province_name: String,
    #[serde(flatten)]
    pub counts: Counts,
}

impl ProvinceSummary {
    pub(crate) fn project(province: &ProvinceStat, fields: &CountFields) -> Self {
        Self {
            province_name: province.province_short_name.clone(),
            counts: Counts::project(
                fields,
                province.current_confirmed_count,
                province.confirmed_count,
                province.cured_count,
                province.dead_count,
            ),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CitySummary {
    pub city_name: String,
    #[serde(flatten)]
    pub counts: Counts,
}

impl CitySummary {
    pub(crate) fn project(city: &CityStat, city_name: String, fields: &CountFields) -> Self {
        Self {
            city_name,
            counts: Counts::project(
                fields,
                city.current_confirmed_count,
                city.confirmed_count,
                city.cured_count,
                city.dead_count,
            ),
        }
    }
}

/// Cities of one province, either bare or wrapped with the province name.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum CityListing {
    #[serde(rename_all = "camelCase")]
    Named { province_name: String, cities: Vec<CitySummary> },
    Flat(Vec<CitySummary>),
}

impl CityListing {
    pub fn cities(&self) -> &[CitySummary] {
        match self {
            CityListing::Named { cities, .. } => cities,
            CityListing::Flat(cities) => cities,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CountrySummary {
    pub country_name_en: String,
    pub country_name_cn: String,
    #[serde(flatten)]
    pub counts: Counts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_incr: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cured_incr: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dead_incr: Option<i64>,
}

impl CountrySummary {
    pub(crate) fn project(country: &CountryStat, english_name: &str, fields: &WorldFields) -> Self {
        let incr = country.increment();
        Self {
            country_name_en: english_name.to_string(),
            country_name_cn: country.province_name.clone(),
            counts: Counts::project(
                &fields.counts(),
                country.current_confirmed_count,
                country.confirmed_count,
                country.cured_count,
                country.dead_count,
            ),
            confirmed_incr: fields.confirmed_incr.then_some(incr.confirmed_incr),
            cured_incr: fields.cured_incr.then_some(incr.cured_incr),
            dead_incr: fields.dead_incr.then_some(incr.dead_incr),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CityDanger {
    pub city_name: String,
    pub high_danger: i64,
    pub mid_danger: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProvinceDanger {
    pub province_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cities: Option<Vec<CityDanger>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_danger: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid_danger: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid_danger_areas: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_danger_areas: Option<Vec<String>>,
}

/// Risk areas of the whole country, each prefixed with its province.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MergedDangerAreas {
    pub mid_danger_areas: Vec<String>,
    pub high_danger_areas: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum DangerReport {
    Merged(MergedDangerAreas),
    Provinces(Vec<ProvinceDanger>),
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewsSummary {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    fn guangdong() -> ProvinceStat {
        ProvinceStat {
            province_name: "广东省".to_string(),
            province_short_name: "粤".to_string(),
            current_confirmed_count: 5,
            confirmed_count: 100,
            cured_count: 90,
            dead_count: 5,
            ..Default::default()
        }
    }

    #[test]
    fn test_province_projection_omits_unrequested_fields() {
        let fields = CountFields { current: false, cured: false, ..CountFields::default() };
        let summary = ProvinceSummary::project(&guangdong(), &fields);

        assert_json_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({"provinceName": "粤", "confirmed": 100, "dead": 5})
        );
    }

    #[test]
    fn test_province_projection_key_order() {
        let summary = ProvinceSummary::project(&guangdong(), &CountFields::default());
        let text = serde_json::to_string(&summary).unwrap();
        assert_eq!(
            text,
            r#"{"provinceName":"粤","currentConfirmed":5,"confirmed":100,"cured":90,"dead":5}"#
        );
    }

    #[test]
    fn test_named_listing_shape() {
        let listing = CityListing::Named {
            province_name: "粤".to_string(),
            cities: vec![CitySummary {
                city_name: "广州市".to_string(),
                counts: Counts { dead: Some(1), ..Default::default() },
            }],
        };

        assert_json_eq!(
            serde_json::to_value(&listing).unwrap(),
            json!({"provinceName": "粤", "cities": [{"cityName": "广州市", "dead": 1}]})
        );
        assert_eq!(listing.cities().len(), 1);
    }

    #[test]
    fn test_danger_report_decodes_back_to_same_variant() {
        let merged = DangerReport::Merged(MergedDangerAreas {
            mid_danger_areas: vec!["北京市朝阳区某小区".to_string()],
            high_danger_areas: vec![],
        });
        let text = serde_json::to_string(&merged).unwrap();
        let back: DangerReport = serde_json::from_str(&text).unwrap();
        assert_eq!(back, merged);
    }
}
