use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

/// One province (or special region) from the `getAreaStat` payload.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProvinceStat {
    pub province_name: String,
    pub province_short_name: String,
    pub current_confirmed_count: i64,
    pub confirmed_count: i64,
    pub cured_count: i64,
    pub dead_count: i64,
    pub high_danger_count: i64,
    pub mid_danger_count: i64,
    pub cities: Vec<CityStat>,
    pub danger_areas: Vec<DangerArea>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CityStat {
    pub city_name: String,
    pub current_confirmed_count: i64,
    pub confirmed_count: i64,
    pub cured_count: i64,
    pub dead_count: i64,
    pub high_danger_count: i64,
    pub mid_danger_count: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DangerArea {
    pub city_name: String,
    pub area_name: String,
    pub danger_level: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DangerLevel {
    High,
    Mid,
    Other,
}

impl DangerArea {
    pub fn level(&self) -> DangerLevel {
        match self.danger_level {
            1 => DangerLevel::High,
            2 => DangerLevel::Mid,
            _ => DangerLevel::Other,
        }
    }
}

/// One country from the `getListByCountryTypeService2true` payload.
/// Upstream reuses the province schema, so the Chinese name sits in `provinceName`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CountryStat {
    pub province_name: String,
    pub current_confirmed_count: i64,
    pub confirmed_count: i64,
    pub cured_count: i64,
    pub dead_count: i64,
    /// Absent or `null` for countries without a daily update.
    pub incr_vo: Option<Increment>,
}

impl CountryStat {
    pub fn increment(&self) -> Increment {
        self.incr_vo.unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Increment {
    pub current_confirmed_incr: i64,
    pub confirmed_incr: i64,
    pub cured_incr: i64,
    pub dead_incr: i64,
}

/// One entry of the `getTimelineService1` news timeline.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsItem {
    pub title: String,
    pub summary: String,
    pub info_source: String,
    pub source_url: String,
    pub pub_date_str: String,
    /// Publish time in epoch milliseconds.
    pub pub_date: Option<i64>,
}

impl NewsItem {
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.pub_date.and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_province_decodes_with_missing_fields() {
        let json = r#"{
            "provinceName": "广东省",
            "provinceShortName": "广东",
            "currentConfirmedCount": 5,
            "confirmedCount": 100,
            "suspectedCount": 0,
            "curedCount": 90,
            "deadCount": 5,
            "comment": "",
            "cities": [{"cityName": "广州", "confirmedCount": 40}]
        }"#;

        let province: ProvinceStat = serde_json::from_str(json).unwrap();
        assert_eq!(province.province_short_name, "广东");
        assert_eq!(province.cured_count, 90);
        assert_eq!(province.high_danger_count, 0);
        assert_eq!(province.cities.len(), 1);
        assert_eq!(province.cities[0].confirmed_count, 40);
        assert_eq!(province.cities[0].dead_count, 0);
        assert!(province.danger_areas.is_empty());
    }

    #[test]
    fn test_danger_level_mapping() {
        let mut area = DangerArea { danger_level: 1, ..Default::default() };
        assert_eq!(area.level(), DangerLevel::High);
        area.danger_level = 2;
        assert_eq!(area.level(), DangerLevel::Mid);
        area.danger_level = 3;
        assert_eq!(area.level(), DangerLevel::Other);
    }

    #[test]
    fn test_country_increment_decodes() {
        let json = r#"{"provinceName": "日本", "confirmedCount": 10,
            "incrVo": {"confirmedIncr": 3, "curedIncr": -1, "deadIncr": 0}}"#;
        let country: CountryStat = serde_json::from_str(json).unwrap();
        assert_eq!(country.increment().confirmed_incr, 3);
        assert_eq!(country.increment().cured_incr, -1);

        let json = r#"{"provinceName": "火星国", "incrVo": null}"#;
        let country: CountryStat = serde_json::from_str(json).unwrap();
        assert_eq!(country.increment(), Increment::default());
    }

    #[test]
    fn test_news_published_at() {
        let item = NewsItem { pub_date: Some(1_656_979_200_000), ..Default::default() };
        let at = item.published_at().unwrap();
        assert_eq!(at.to_rfc3339(), "2022-07-05T00:00:00+00:00");
        assert!(NewsItem::default().published_at().is_none());
    }
}
