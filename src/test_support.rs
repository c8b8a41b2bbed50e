//! Synthetic dashboard pages shared by unit tests.

use serde_json::{json, Value};

use crate::constants::{DOMESTIC_SCRIPT_ID, NEWS_SCRIPT_ID, WORLD_SCRIPT_ID};

/// A `<script>` element wrapped the way the dashboard embeds its payloads.
pub fn script(id: &str, json: &str) -> String {
    format!(r#"<script id="{id}">try {{ window.{id} = {json}}}catch(e){{}}</script>"#)
}

pub fn page_with(domestic: &Value, world: &Value, news: &Value) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>疫情地图</title>{}{}</head><body>{}</body></html>",
        script(DOMESTIC_SCRIPT_ID, &domestic.to_string()),
        script(WORLD_SCRIPT_ID, &world.to_string()),
        script(NEWS_SCRIPT_ID, &news.to_string()),
    )
}

pub fn page() -> String {
    page_with(&domestic(), &world(), &news())
}

pub fn domestic() -> Value {
    json!([
        {
            "provinceName": "广东省",
            "provinceShortName": "粤",
            "currentConfirmedCount": 5,
            "confirmedCount": 100,
            "suspectedCount": 0,
            "curedCount": 90,
            "deadCount": 5,
            "highDangerCount": 0,
            "midDangerCount": 0,
            "cities": [
                {"cityName": "广州", "currentConfirmedCount": 2, "confirmedCount": 50, "curedCount": 47, "deadCount": 1},
                {"cityName": "深圳", "currentConfirmedCount": 3, "confirmedCount": 40, "curedCount": 37, "deadCount": 0},
                {"cityName": "境外输入", "currentConfirmedCount": 0, "confirmedCount": 10, "curedCount": 10, "deadCount": 0}
            ],
            "dangerAreas": []
        },
        {
            "provinceName": "北京市",
            "provinceShortName": "北京",
            "currentConfirmedCount": 1,
            "confirmedCount": 20,
            "curedCount": 19,
            "deadCount": 0,
            "highDangerCount": 1,
            "midDangerCount": 2,
            "cities": [
                {"cityName": "朝阳区", "currentConfirmedCount": 1, "confirmedCount": 10, "curedCount": 9, "deadCount": 0,
                 "highDangerCount": 1, "midDangerCount": 1},
                {"cityName": "海淀区", "currentConfirmedCount": 0, "confirmedCount": 8, "curedCount": 8, "deadCount": 0,
                 "highDangerCount": 0, "midDangerCount": 1},
                {"cityName": "外地来京", "currentConfirmedCount": 0, "confirmedCount": 2, "curedCount": 2, "deadCount": 0}
            ],
            "dangerAreas": [
                {"cityName": "朝阳区", "areaName": "北京市朝阳区望京街道", "dangerLevel": 1},
                {"cityName": "朝阳区", "areaName": "朝阳区三里屯", "dangerLevel": 2},
                {"cityName": "海淀区", "areaName": "中关村", "dangerLevel": 2}
            ]
        },
        {
            "provinceName": "吉林省",
            "provinceShortName": "吉林",
            "currentConfirmedCount": 2,
            "confirmedCount": 30,
            "curedCount": 28,
            "deadCount": 0,
            "highDangerCount": 0,
            "midDangerCount": 1,
            "cities": [
                {"cityName": "吉林", "currentConfirmedCount": 2, "confirmedCount": 20, "curedCount": 18, "deadCount": 0,
                 "highDangerCount": 0, "midDangerCount": 1},
                {"cityName": "延边", "currentConfirmedCount": 0, "confirmedCount": 10, "curedCount": 10, "deadCount": 0}
            ],
            "dangerAreas": [
                {"cityName": "吉林市", "areaName": "吉林市船营区某小区", "dangerLevel": 2},
                {"cityName": "延边", "areaName": "吉林省延边某村", "dangerLevel": 3}
            ]
        },
        {
            "provinceName": "香港",
            "provinceShortName": "香港",
            "currentConfirmedCount": 100,
            "confirmedCount": 1000,
            "curedCount": 800,
            "deadCount": 100,
            "cities": [],
            "dangerAreas": []
        }
    ])
}

pub fn world() -> Value {
    json!([
        {
            "provinceName": "日本",
            "currentConfirmedCount": 10,
            "confirmedCount": 100,
            "curedCount": 85,
            "deadCount": 5,
            "incrVo": {"currentConfirmedIncr": 1, "confirmedIncr": 3, "curedIncr": 2, "deadIncr": 0}
        },
        {
            "provinceName": "钻石公主号邮轮",
            "currentConfirmedCount": 0,
            "confirmedCount": 712,
            "curedCount": 699,
            "deadCount": 13,
            "incrVo": {"confirmedIncr": 0, "curedIncr": 0, "deadIncr": 0}
        },
        {
            "provinceName": "美国",
            "currentConfirmedCount": 50,
            "confirmedCount": 500,
            "curedCount": 400,
            "deadCount": 50,
            "incrVo": {"confirmedIncr": 10, "curedIncr": 8, "deadIncr": 1}
        },
        {
            "provinceName": "火星国",
            "currentConfirmedCount": 1,
            "confirmedCount": 1,
            "curedCount": 0,
            "deadCount": 0
        }
    ])
}

pub fn news() -> Value {
    json!([
        {
            "id": 1,
            "pubDate": 1656979200000i64,
            "pubDateStr": "2小时前",
            "title": "新闻一",
            "summary": "摘要一",
            "infoSource": "央视新闻",
            "sourceUrl": "http://example.com/1"
        },
        {
            "id": 2,
            "pubDate": 1656975600000i64,
            "pubDateStr": "3小时前",
            "title": "新闻二",
            "summary": "摘要二",
            "infoSource": "人民日报",
            "sourceUrl": "http://example.com/2"
        }
    ])
}
