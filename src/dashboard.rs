//! One snapshot of the dashboard and the queries over it.
//!
//! A [`Dashboard`] is built from a single page fetch and never changes afterwards.
//! Every query is a pure projection of the captured payloads.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::constants::{
    english_country_name, ADMINISTRATIVE_SUFFIXES, CITY_SUFFIX_EXEMPT, CRUISE_SHIP, IGNORED_CITIES,
    MUNICIPAL_SUFFIX, PREFECTURE_SHORT_SUFFIX, SPECIAL_REGIONS,
};
use crate::covid::{CountryStat, DangerLevel, NewsItem, ProvinceStat};
use crate::error::{CovidError, Result};
use crate::extract::{extract_payloads, Payloads};
use crate::fetch::{fetch_page, HttpsClient};
use crate::fields::{CountFields, DangerOptions, NewsFields, WorldFields};
use crate::records::{
    CityDanger, CityListing, CitySummary, CountrySummary, DangerReport, MergedDangerAreas,
    NewsSummary, ProvinceDanger, ProvinceSummary,
};

#[derive(Debug, Clone)]
pub struct Dashboard {
    payloads: Payloads,
    fetched_at: DateTime<Utc>,
}

impl Dashboard {
    /// Fetch the page at `url` and decode its three payloads.
    pub async fn fetch(client: &HttpsClient, url: &str) -> Result<Self> {
        let html = fetch_page(client, url).await?;
        Self::from_html(&html)
    }

    pub fn from_html(html: &str) -> Result<Self> {
        let payloads = extract_payloads(html)?;
        debug!(
            "Snapshot holds {} provinces, {} countries, {} news items",
            payloads.domestic.len(),
            payloads.world.len(),
            payloads.news.len()
        );
        Ok(Self::from_payloads(payloads))
    }

    pub fn from_payloads(payloads: Payloads) -> Self {
        Self { payloads, fetched_at: Utc::now() }
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn provinces(&self) -> &[ProvinceStat] {
        &self.payloads.domestic
    }

    pub fn countries(&self) -> &[CountryStat] {
        &self.payloads.world
    }

    pub fn news_items(&self) -> &[NewsItem] {
        &self.payloads.news
    }

    /// Case counts of every province, in upstream order.
    pub fn domestic(&self, fields: &CountFields) -> Result<Vec<ProvinceSummary>> {
        fields.require_any()?;
        Ok(self
            .provinces()
            .iter()
            .map(|province| ProvinceSummary::project(province, fields))
            .collect())
    }

    /// Case counts of the province whose short or full name is `name`.
    pub fn find_domestic(&self, name: &str, fields: &CountFields) -> Result<ProvinceSummary> {
        fields.require_any()?;
        self.lookup_province(name)
            .map(|province| ProvinceSummary::project(province, fields))
            .ok_or_else(|| CovidError::NotFound(format!("no data for province {name}")))
    }

    /// City case counts of one province.
    pub fn province(&self, name: &str, fields: &CountFields, include_province_name: bool) -> Result<CityListing> {
        let province = self.drill_down(name, fields)?;
        let cities = province
            .cities
            .iter()
            .filter(|city| !IGNORED_CITIES.contains(&city.city_name.as_str()))
            .map(|city| CitySummary::project(city, qualify_city_name(&city.city_name), fields))
            .collect();

        if include_province_name {
            Ok(CityListing::Named { province_name: province.province_short_name.clone(), cities })
        } else {
            Ok(CityListing::Flat(cities))
        }
    }

    /// Case counts of one city, matched by its upstream or suffixed name.
    pub fn find_city(&self, province: &str, city: &str, fields: &CountFields) -> Result<CitySummary> {
        let record = self.drill_down(province, fields)?;
        record
            .cities
            .iter()
            .filter(|c| !IGNORED_CITIES.contains(&c.city_name.as_str()))
            .find_map(|c| {
                let qualified = qualify_city_name(&c.city_name);
                (c.city_name == city || qualified == city).then(|| CitySummary::project(c, qualified, fields))
            })
            .ok_or_else(|| CovidError::NotFound(format!("no data for city {city} in {province}")))
    }

    /// Case counts of every country, skipping the cruise ship entry.
    pub fn world(&self, fields: &WorldFields) -> Result<Vec<CountrySummary>> {
        fields.require_any()?;
        Ok(self
            .reported_countries()
            .map(|country| CountrySummary::project(country, english_country_name(&country.province_name), fields))
            .collect())
    }

    /// Case counts of the country whose Chinese or English name is `name`.
    pub fn find_country(&self, name: &str, fields: &WorldFields) -> Result<CountrySummary> {
        fields.require_any()?;
        self.reported_countries()
            .find_map(|country| {
                let english = english_country_name(&country.province_name);
                let matches = country.province_name == name || (!english.is_empty() && english == name);
                matches.then(|| CountrySummary::project(country, english, fields))
            })
            .ok_or_else(|| CovidError::NotFound(format!("no data for country {name}")))
    }

    /// High and mid risk areas. `None` when no province reports any.
    pub fn danger_areas(&self, options: &DangerOptions) -> Result<Option<DangerReport>> {
        options.require_any()?;

        let mut provinces = Vec::new();
        let mut merged = MergedDangerAreas::default();

        for province in self.provinces().iter().filter(|p| p.high_danger_count > 0 || p.mid_danger_count > 0) {
            let mut report = ProvinceDanger {
                province_name: province.province_short_name.clone(),
                ..Default::default()
            };

            if options.include_cities {
                report.cities = Some(
                    province
                        .cities
                        .iter()
                        .filter(|city| city.high_danger_count > 0 || city.mid_danger_count > 0)
                        .map(|city| CityDanger {
                            city_name: city.city_name.clone(),
                            high_danger: city.high_danger_count,
                            mid_danger: city.mid_danger_count,
                        })
                        .collect(),
                );
            }

            if options.include_counts {
                report.high_danger = Some(province.high_danger_count);
                report.mid_danger = Some(province.mid_danger_count);
            }

            if options.include_areas {
                let mut high = Vec::new();
                let mut mid = Vec::new();
                for area in &province.danger_areas {
                    let bucket = match area.level() {
                        DangerLevel::High => (&mut high, &mut merged.high_danger_areas),
                        DangerLevel::Mid => (&mut mid, &mut merged.mid_danger_areas),
                        DangerLevel::Other => continue,
                    };
                    let name = normalize_area_name(province, &area.city_name, &area.area_name);
                    bucket.1.push(format!("{}{}", province.province_name, name));
                    bucket.0.push(name);
                }
                report.mid_danger_areas = Some(mid);
                report.high_danger_areas = Some(high);
            }

            provinces.push(report);
        }

        if provinces.is_empty() {
            info!("No medium or high risk areas found");
            return Ok(None);
        }

        if options.is_merged() {
            Ok(Some(DangerReport::Merged(merged)))
        } else {
            Ok(Some(DangerReport::Provinces(provinces)))
        }
    }

    /// The news timeline, or `None` when upstream lists no news.
    pub fn news(&self, fields: &NewsFields) -> Option<Vec<NewsSummary>> {
        if self.news_items().is_empty() {
            info!("No recent news found");
            return None;
        }

        Some(
            self.news_items()
                .iter()
                .map(|item| NewsSummary {
                    title: item.title.clone(),
                    published_time: fields.time.then(|| item.pub_date_str.clone()),
                    source: fields.source.then(|| item.info_source.clone()),
                    url: fields.url.then(|| item.source_url.clone()),
                    summary: fields.summary.then(|| item.summary.clone()),
                })
                .collect(),
        )
    }

    fn lookup_province(&self, name: &str) -> Option<&ProvinceStat> {
        self.provinces()
            .iter()
            .find(|p| p.province_short_name == name || p.province_name == name)
    }

    /// Validate a city-level request and find its province.
    fn drill_down(&self, name: &str, fields: &CountFields) -> Result<&ProvinceStat> {
        fields.require_any()?;
        if name.is_empty() {
            return Err(CovidError::InvalidArgument("province name must not be empty".to_string()));
        }

        let province = self.lookup_province(name);
        let special = SPECIAL_REGIONS.contains(&name)
            || province.is_some_and(|p| SPECIAL_REGIONS.contains(&p.province_short_name.as_str()));
        if special {
            return Err(CovidError::UnsupportedRegion(format!(
                "{name} has no city breakdown, query it through the domestic listing"
            )));
        }

        province.ok_or_else(|| CovidError::NotFound(format!("no data for province {name}")))
    }

    fn reported_countries(&self) -> impl Iterator<Item = &CountryStat> {
        self.countries().iter().filter(|c| c.province_name != CRUISE_SHIP)
    }
}

/// Append the municipal suffix unless the name is already a qualified
/// administrative name or a prefecture reported without one.
pub fn qualify_city_name(name: &str) -> String {
    let exempt = CITY_SUFFIX_EXEMPT.iter().any(|exempt| {
        name.strip_prefix(exempt)
            .map_or(false, |rest| rest.is_empty() || rest == PREFECTURE_SHORT_SUFFIX)
    }) || ADMINISTRATIVE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix));

    if exempt || name.is_empty() {
        name.to_string()
    } else {
        format!("{name}{MUNICIPAL_SUFFIX}")
    }
}

/// Drop a leading province name and make sure the city name leads the area.
fn normalize_area_name(province: &ProvinceStat, city: &str, area: &str) -> String {
    let stripped = match area.strip_prefix(province.province_name.as_str()) {
        Some(rest) if !province.province_name.is_empty() => rest,
        _ if !city.is_empty() && area.starts_with(city) => area,
        _ => area.strip_prefix(province.province_short_name.as_str()).unwrap_or(area),
    };

    if stripped.contains(city) {
        stripped.to_string()
    } else {
        format!("{city}{stripped}")
    }
}
