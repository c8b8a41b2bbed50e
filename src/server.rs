//! HTTP surface: one route per dashboard query.
//!
//! Every request scrapes a fresh snapshot, runs the query and discards the snapshot.

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_derive::Deserialize;
use serde_json::json;

use crate::dashboard::Dashboard;
use crate::error::CovidError;
use crate::fetch::HttpsClient;
use crate::fields::{CountFields, DangerOptions, NewsFields, WorldFields};
use crate::license::{banner, Language};
use crate::output::to_pretty_json;

#[derive(Clone)]
pub struct AppState {
    source_url: String,
    language: Language,
    client: HttpsClient,
}

impl AppState {
    pub fn new(client: HttpsClient, source_url: String, language: Language) -> Self {
        Self { source_url, language, client }
    }

    async fn snapshot(&self) -> Result<Dashboard, CovidError> {
        Dashboard::fetch(&self.client, &self.source_url).await
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Format {
    pretty: bool,
}

#[derive(Deserialize)]
#[serde(default)]
struct ProvinceQuery {
    include_province_name: bool,
}

impl Default for ProvinceQuery {
    fn default() -> Self {
        Self { include_province_name: true }
    }
}

type Reply = Result<Response, CovidError>;

fn respond<T: Serialize>(value: &T, format: &Format) -> Reply {
    if format.pretty {
        let body = to_pretty_json(value)?;
        Ok(([(header::CONTENT_TYPE, "application/json; charset=utf-8")], body).into_response())
    } else {
        Ok(Json(value).into_response())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/domestic", get(domestic_endpoint))
        .route("/domestic/:name", get(find_domestic_endpoint))
        .route("/province/:name", get(province_endpoint))
        .route("/province/:name/:city", get(find_city_endpoint))
        .route("/world", get(world_endpoint))
        .route("/world/:name", get(find_country_endpoint))
        .route("/danger-areas", get(danger_areas_endpoint))
        .route("/news", get(news_endpoint))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Reply {
    let dashboard = state.snapshot().await?;
    Ok(Json(json!({
        "banner": banner(state.language),
        "source": state.source_url,
        "fetchedAt": dashboard.fetched_at(),
        "provinces": dashboard.provinces().len(),
        "countries": dashboard.countries().len(),
        "news": dashboard.news_items().len(),
    }))
    .into_response())
}

async fn domestic_endpoint(
    State(state): State<AppState>,
    Query(fields): Query<CountFields>,
    Query(format): Query<Format>,
) -> Reply {
    let dashboard = state.snapshot().await?;
    respond(&dashboard.domestic(&fields)?, &format)
}

async fn find_domestic_endpoint(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(fields): Query<CountFields>,
    Query(format): Query<Format>,
) -> Reply {
    let dashboard = state.snapshot().await?;
    respond(&dashboard.find_domestic(&name, &fields)?, &format)
}

async fn province_endpoint(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(fields): Query<CountFields>,
    Query(query): Query<ProvinceQuery>,
    Query(format): Query<Format>,
) -> Reply {
    let dashboard = state.snapshot().await?;
    respond(&dashboard.province(&name, &fields, query.include_province_name)?, &format)
}

async fn find_city_endpoint(
    State(state): State<AppState>,
    Path((name, city)): Path<(String, String)>,
    Query(fields): Query<CountFields>,
    Query(format): Query<Format>,
) -> Reply {
    let dashboard = state.snapshot().await?;
    respond(&dashboard.find_city(&name, &city, &fields)?, &format)
}

async fn world_endpoint(
    State(state): State<AppState>,
    Query(fields): Query<WorldFields>,
    Query(format): Query<Format>,
) -> Reply {
    let dashboard = state.snapshot().await?;
    respond(&dashboard.world(&fields)?, &format)
}

async fn find_country_endpoint(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(fields): Query<WorldFields>,
    Query(format): Query<Format>,
) -> Reply {
    let dashboard = state.snapshot().await?;
    respond(&dashboard.find_country(&name, &fields)?, &format)
}

async fn danger_areas_endpoint(
    State(state): State<AppState>,
    Query(options): Query<DangerOptions>,
    Query(format): Query<Format>,
) -> Reply {
    let dashboard = state.snapshot().await?;
    respond(&dashboard.danger_areas(&options)?, &format)
}

async fn news_endpoint(
    State(state): State<AppState>,
    Query(fields): Query<NewsFields>,
    Query(format): Query<Format>,
) -> Reply {
    let dashboard = state.snapshot().await?;
    respond(&dashboard.news(&fields), &format)
}
