//! Locates the inline script payloads of the dashboard page and decodes them.

use scraper::{Html, Selector};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::constants::{
    DOMESTIC_SCRIPT_ID, NEWS_SCRIPT_ID, SCRIPT_PREFIX_HEAD, SCRIPT_PREFIX_TAIL, SCRIPT_SUFFIX,
    WORLD_SCRIPT_ID,
};
use crate::covid::{CountryStat, NewsItem, ProvinceStat};
use crate::error::{CovidError, Result};

/// The three decoded payloads of one page.
#[derive(Debug, Clone, Default)]
pub struct Payloads {
    pub domestic: Vec<ProvinceStat>,
    pub world: Vec<CountryStat>,
    pub news: Vec<NewsItem>,
}

pub fn extract_payloads(html: &str) -> Result<Payloads> {
    let document = Html::parse_document(html);

    Ok(Payloads {
        domestic: decode_script(&document, DOMESTIC_SCRIPT_ID)?,
        world: decode_script(&document, WORLD_SCRIPT_ID)?,
        news: decode_script(&document, NEWS_SCRIPT_ID)?,
    })
}

fn decode_script<T: DeserializeOwned>(document: &Html, id: &str) -> Result<T> {
    let text = script_text(document, id)?;
    let json = unwrap_payload(&text, id)?;
    debug!("Decoding {} payload ({} bytes)", id, json.len());

    serde_json::from_str(json)
        .map_err(|e| CovidError::Parse(format!("malformed JSON in script #{id}: {e}")))
}

/// Text content of the `<script id="...">` element.
pub fn script_text(document: &Html, id: &str) -> Result<String> {
    let selector = Selector::parse(&format!("script#{id}"))
        .map_err(|e| CovidError::Parse(format!("invalid selector for #{id}: {e}")))?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .ok_or_else(|| CovidError::Parse(format!("script #{id} not found")))
}

/// Strip the `try { window.<id> = ... }catch(e){}` wrapper around a payload.
pub fn unwrap_payload<'a>(text: &'a str, id: &str) -> Result<&'a str> {
    let prefix = format!("{SCRIPT_PREFIX_HEAD}{id}{SCRIPT_PREFIX_TAIL}");

    text.trim()
        .strip_prefix(prefix.as_str())
        .and_then(|rest| rest.strip_suffix(SCRIPT_SUFFIX))
        .ok_or_else(|| CovidError::Parse(format!("unexpected wrapper around script #{id}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{page, script};

    #[test]
    fn test_extracts_all_three_payloads() {
        let payloads = extract_payloads(&page()).unwrap();

        assert_eq!(payloads.domestic.len(), 4);
        assert_eq!(payloads.domestic[0].province_short_name, "粤");
        assert_eq!(payloads.world.len(), 4);
        assert_eq!(payloads.world[1].province_name, "钻石公主号邮轮");
        assert_eq!(payloads.news.len(), 2);
    }

    #[test]
    fn test_missing_script_is_parse_error() {
        let html = format!(
            "<html><body>{}{}</body></html>",
            script(DOMESTIC_SCRIPT_ID, "[]"),
            script(WORLD_SCRIPT_ID, "[]"),
        );

        match extract_payloads(&html) {
            Err(CovidError::Parse(msg)) => assert!(msg.contains(NEWS_SCRIPT_ID)),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let html = format!(
            "<html><body>{}{}{}</body></html>",
            script(DOMESTIC_SCRIPT_ID, "[{\"provinceName\": "),
            script(WORLD_SCRIPT_ID, "[]"),
            script(NEWS_SCRIPT_ID, "[]"),
        );

        assert!(matches!(extract_payloads(&html), Err(CovidError::Parse(_))));
    }

    #[test]
    fn test_unwrap_payload() {
        let text = "  try { window.getAreaStat = [1, 2]}catch(e){}\n";
        assert_eq!(unwrap_payload(text, "getAreaStat").unwrap(), "[1, 2]");

        // The wrapper names a different variable.
        assert!(unwrap_payload(text, "getTimelineService1").is_err());
        assert!(unwrap_payload("[1, 2]", "getAreaStat").is_err());
    }

    #[test]
    fn test_empty_payloads_decode() {
        let html = format!(
            "<html><head>{}{}{}</head></html>",
            script(DOMESTIC_SCRIPT_ID, "[]"),
            script(WORLD_SCRIPT_ID, "[]"),
            script(NEWS_SCRIPT_ID, "[]"),
        );

        let payloads = extract_payloads(&html).unwrap();
        assert!(payloads.domestic.is_empty());
        assert!(payloads.news.is_empty());
    }
}
