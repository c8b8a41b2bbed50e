use std::fmt;
use std::str::FromStr;

use crate::constants::DXY_DASHBOARD_URL;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    ZhCn,
    EnUs,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zh_CN" | "zh-CN" | "zh" => Ok(Language::ZhCn),
            "en_US" | "en-US" | "en" => Ok(Language::EnUs),
            other => Err(format!("unsupported banner language: {other}")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::ZhCn => write!(f, "zh_CN"),
            Language::EnUs => write!(f, "en_US"),
        }
    }
}

pub fn banner(language: Language) -> String {
    let lines = match language {
        Language::ZhCn => [
            "许可证：GNU GPLv3".to_string(),
            format!("数据来源：{DXY_DASHBOARD_URL}"),
            "您可以免费使用、修改和再发布本程序，但必须保留许可证信息。".to_string(),
            "本程序禁止用于商业用途。".to_string(),
            format!("版本：{VERSION}"),
        ],
        Language::EnUs => [
            "License: GNU General Public License v3".to_string(),
            format!("Data: {DXY_DASHBOARD_URL}"),
            "You may freely use, modify and redistribute this program, but the license notice must be kept.".to_string(),
            "This program is forbidden for commercial use.".to_string(),
            format!("Version: {VERSION}"),
        ],
    };
    lines.join("\n")
}

pub fn print_banner(language: Language) {
    println!("{}", banner(language));
}
