use std::collections::HashMap;
use once_cell::sync::Lazy;

pub const DXY_DASHBOARD_URL: &str = "https://ncov.dxy.cn/ncovh5/view/pneumonia";

/// Script element ids of the three payloads embedded in the dashboard page.
pub(crate) const DOMESTIC_SCRIPT_ID: &str = "getAreaStat";
pub(crate) const WORLD_SCRIPT_ID: &str = "getListByCountryTypeService2true";
pub(crate) const NEWS_SCRIPT_ID: &str = "getTimelineService1";

/// Every payload is wrapped as `try { window.<id> = <json>}catch(e){}`.
pub(crate) const SCRIPT_PREFIX_HEAD: &str = "try { window.";
pub(crate) const SCRIPT_PREFIX_TAIL: &str = " = ";
pub(crate) const SCRIPT_SUFFIX: &str = "}catch(e){}";

pub(crate) const MUNICIPAL_SUFFIX: &str = "市";

/// The cruise ship line item reported alongside countries.
pub(crate) const CRUISE_SHIP: &str = "钻石公主号邮轮";

/// Special administrative regions carry no city breakdown upstream.
pub(crate) const SPECIAL_REGIONS: [&str; 6] = [
    "香港", "香港特别行政区",
    "澳门", "澳门特别行政区",
    "台湾", "台湾省",
];

/// Placeholder entries listed among a province's cities.
pub(crate) const IGNORED_CITIES: [&str; 9] = [
    "待明确地区",
    "境外输入",
    "外地来沪",
    "境外来沪",
    "境外输入人员",
    "外地来津",
    "外地来京",
    "省十里丰监狱",
    "省级（湖北输入）",
];

/// Administrative suffixes that already qualify a city name.
/// A bare `州` is not one of them: 广州 and 杭州 are cities that still need `市`.
pub(crate) const ADMINISTRATIVE_SUFFIXES: [&str; 7] = ["市", "区", "县", "自治州", "盟", "旗", "师"];

/// Short form of an autonomous prefecture, e.g. 恩施州.
pub(crate) const PREFECTURE_SHORT_SUFFIX: &str = "州";

/// Prefecture, league and autonomous-prefecture names that upstream reports without a suffix.
pub(crate) const CITY_SUFFIX_EXEMPT: [&str; 41] = [
    "延边", "恩施", "湘西", "黔南", "黔东南", "黔西南",
    "阿坝", "甘孜", "凉山", "西双版纳", "德宏", "大理",
    "红河", "文山", "楚雄", "怒江", "迪庆", "临夏",
    "甘南", "伊犁", "博尔塔拉", "巴音郭楞", "克孜勒苏", "昌吉",
    "海北", "黄南", "果洛", "玉树", "海西", "神农架",
    "大兴安岭", "锡林郭勒", "兴安", "阿拉善", "阿克苏", "喀什",
    "和田", "塔城", "阿勒泰", "阿里", "兵团",
];

/// Chinese country names as reported upstream, mapped to English.
pub(crate) static COUNTRY_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(||
    HashMap::from([
        ("法国", "France"),
        ("德国", "Germany"),
        ("韩国", "Korea"),
        ("英国", "United Kingdom"),
        ("西班牙", "Spain"),
        ("意大利", "Italy"),
        ("巴西", "Brazil"),
        ("土耳其", "Turkey"),
        ("荷兰", "Netherlands"),
        ("俄罗斯", "Russia"),
        ("日本", "Japan"),
        ("比利时", "Belgium"),
        ("中国", "China"),
        ("奥地利", "Austria"),
        ("瑞士", "Switzerland"),
        ("希腊", "Greece"),
        ("伊朗", "Iran"),
        ("丹麦", "Denmark"),
        ("墨西哥", "Mexico"),
        ("瑞典", "Sweden"),
        ("斯洛伐克", "Slovakia"),
        ("智利", "Chile"),
        ("塞尔维亚", "Serbia"),
        ("伊拉克", "Iraq"),
        ("美国", "United States"),
        ("爱尔兰", "Ireland"),
        ("乌克兰", "Ukraine"),
        ("哈萨克斯坦", "Kazakhstan"),
        ("秘鲁", "Peru"),
        ("格鲁吉亚", "Georgia"),
        ("斯洛文尼亚", "Slovenia"),
        ("罗马尼亚", "Romanian"),
        ("约旦", "Jordan"),
        ("黎巴嫩", "Lebanon"),
        ("葡萄牙", "Portugal"),
        ("波多黎各", "Puerto Rico"),
        ("危地马拉", "Guatemala"),
        ("立陶宛", "Lithuania"),
        ("蒙古", "Mongolia"),
        ("阿塞拜疆", "Azerbaijan"),
        ("澳大利亚", "Australia"),
        ("克罗地亚", "Croatia"),
        ("多米尼加", "dominica"),
        ("玻利维亚", "Bolivia"),
        ("巴拿马", "Panama"),
        ("孟加拉国", "Bangladesh"),
        ("捷克", "Czech Republic"),
        ("塞浦路斯", "Cyprus"),
        ("留尼旺", "Reunion"),
        ("印度", "India"),
        ("加拿大", "Canada"),
        ("保加利亚", "Bulgaria"),
        ("摩洛哥", "Morocco"),
        ("拉脱维亚", "Latvia"),
        ("巴勒斯坦", "Palestine"),
        ("乌拉圭", "Uruguay"),
        ("巴基斯坦", "Pakistan"),
        ("沙特阿拉伯", "Saudi Arabia"),
        ("以色列", "Israel"),
        ("利比亚", "Libya"),
        ("毛里求斯", "Mauritius"),
        ("亚美尼亚", "Armenia"),
        ("阿联酋", "U.A.E"),
        ("马提尼克", "Martinique"),
        ("巴拉圭", "Paraguay"),
        ("埃及", "Egypt"),
        ("爱沙尼亚", "Estonia"),
        ("新西兰", "New Zealand"),
        ("瓜德罗普岛", "Guadeloupe"),
        ("委内瑞拉", "Venezuela"),
        ("马来西亚", "Malaysia"),
        ("博茨瓦纳", "Botswana"),
        ("摩尔多瓦", "Moldova"),
        ("卡塔尔", "Qatar"),
        ("阿根廷", "Argentina"),
        ("巴林", "Bahrain"),
        ("埃塞俄比亚", "Ethiopia"),
        ("阿尔及利亚", "Algeria"),
        ("文莱", "Brunei"),
        ("特立尼达和多巴哥", "Trinidad and Tobago"),
        ("阿曼", "Oman"),
        ("缅甸", "Myanmar"),
        ("法属圭亚那", "French Guiana"),
        ("牙买加", "Jamaica"),
        ("黑山", "Montenegro"),
        ("哥斯达黎加", "Costa Rica"),
        ("古巴", "Cuba"),
        ("白俄罗斯", "Belarus"),
        ("莫桑比克", "Mozambique"),
        ("阿尔巴尼亚", "Albania"),
        ("巴巴多斯", "Barbados"),
        ("芬兰", "Finland"),
        ("肯尼亚", "Kenya"),
        ("斯威士兰", "Eswatini"),
        ("斯里兰卡", "Sri Lanka"),
        ("贝宁", "Benin"),
        ("刚果（金）", "Democratic Republic of the Congo"),
        ("不丹", "Bhutan"),
        ("阿富汗", "Afghanistan"),
        ("苏里南", "Suriname"),
        ("新喀里多尼亚", "New Caledonia"),
        ("哥伦比亚", "Colombia"),
        ("伯利兹", "Belize"),
        ("尼日利亚", "Nigeria"),
        ("圭亚那", "Guyana"),
        ("泽西岛", "Jersey"),
        ("乌兹别克斯坦", "Uzbekistan"),
        ("布隆迪共和国", "Burundi"),
        ("加纳", "Ghana"),
        ("纳米比亚", "Namibia"),
        ("厄瓜多尔", "Ecuador"),
        ("库拉索岛", "Curacao"),
        ("卢旺达", "Rwanda"),
        ("马约特", "Mayotte"),
        ("喀麦隆", "Cameroon"),
        ("安哥拉", "Angola"),
        ("坦桑尼亚", "Tanzania"),
        ("萨尔瓦多", "El Salvador"),
        ("关岛", "Guam"),
        ("马尔代夫", "Maldives"),
        ("阿鲁巴", "Aruba"),
        ("叙利亚", "Syria"),
        ("开曼群岛", "Cayman Islands"),
        ("根西岛", "Guernsey"),
        ("巴哈马", "Bahamas"),
        ("莱索托", "Lesotho"),
        ("科特迪瓦", "Côte d’Ivoire"),
        ("苏丹", "Sudan"),
        ("马拉维", "Malawi"),
        ("越南", "Vietnam"),
        ("毛里塔尼亚", "Mauritania"),
        ("吉尔吉斯斯坦", "Kyrgyzstan"),
        ("佛得角", "Cape Verde"),
        ("塞舌尔", "Seychelles"),
        ("马恩岛", "Isle of Man"),
        ("马达加斯加", "Madagascar"),
        ("泰国", "Thailand"),
        ("海地", "Haiti"),
        ("加蓬", "Gabon"),
        ("挪威", "Norway"),
        ("卢森堡", "Luxembourg"),
        ("索马里", "Somalia"),
        ("马里", "Mali"),
        ("刚果（布）", "Congo (Brazzaville)"),
        ("新加坡", "Singapore"),
        ("印度尼西亚", "Indonesia"),
        ("多米尼克", "Dominica"),
        ("赞比亚共和国", "Zambia"),
        ("百慕大", "Bermuda"),
        ("美属维尔京群岛", "United States Virgin Islands"),
        ("多哥", "Togo"),
        ("斐济", "Fiji"),
        ("尼加拉瓜", "Nicaragua"),
        ("塞内加尔", "Senegal"),
        ("格林那达", "Grenada"),
        ("北马里亚纳群岛联邦", "Commonwealth of the Northern Mariana Islands"),
        ("突尼斯", "Tunisia"),
        ("摩纳哥", "Monaco"),
        ("匈牙利", "Hungary"),
        ("圣马丁岛", "Saint Martin"),
        ("也门共和国", "Yemen"),
        ("格陵兰", "Greenland"),
        ("圣文森特和格林纳丁斯", "Saint Vincent and the Grenadines"),
        ("冰岛", "Iceland"),
        ("波兰", "Poland"),
        ("中非共和国", "Central African Republic"),
        ("几内亚", "Guinea"),
        ("马耳他", "Malta"),
        ("安提瓜和巴布达", "Antigua and Barbuda"),
        ("布基纳法索", "Burkina Faso"),
        ("荷属圣马丁", "St. Maarten, The Netherlands"),
        ("南苏丹", "South Sudan"),
        ("科威特", "Kuwait"),
        ("圣其茨和尼维斯", "Saint-Žić and Nevis"),
        ("安道尔", "Andorra"),
        ("列支敦士登", "Liechtenstein"),
        ("科摩罗", "Comoros"),
        ("圣巴泰勒米岛", "Saint Barthelemy Island"),
        ("赤道几内亚", "Equatorial Guinea"),
        ("东帝汶", "Timor-Leste"),
        ("圣马力诺", "San Marino"),
        ("英属维尔京群岛", "British Virgin Islands"),
        ("巴布亚新几内亚", "Papua New Guinea"),
        ("乌干达", "Uganda"),
        ("特克斯和凯科斯群岛", "Turks and Caicos Islands"),
        ("圣卢西亚", "Saint Lucia"),
        ("安圭拉", "Anguilla"),
        ("吉布提", "Djibouti"),
        ("圣多美和普林西比", "Sao Tome and Principe"),
        ("法罗群岛", "Faroe Islands"),
        ("塞拉利昂", "Sierra Leone"),
        ("洪都拉斯", "Honduras"),
        ("厄立特里亚", "Eritrea"),
        ("直布罗陀", "Gibraltar"),
        ("几内亚比绍", "Guinea-Bissau"),
        ("尼日尔", "Niger"),
        ("津巴布韦", "Zimbabwe"),
        ("圣皮埃尔和密克隆群岛", "Saint Pierre and Miquelon"),
        ("波黑", "Bosnia"),
        ("乍得", "Chad"),
        ("冈比亚", "Gambia"),
        ("福克兰群岛", "Falkland Islands"),
        ("利比里亚", "Liberia"),
        ("北马其顿", "North Macedonia"),
        ("蒙特塞拉特", "Montserrat"),
        ("尼泊尔", "Nepal"),
        ("老挝", "Laos"),
        ("法属波利尼西亚", "French Polynesia"),
        ("塔吉克斯坦", "Tajikistan"),
        ("荷兰加勒比地区", "Netherlands Caribbean"),
        ("柬埔寨", "Cambodia"),
        ("梵蒂冈", "Vatican City"),
        ("菲律宾", "Philippines"),
        ("南非", "South Africa"),
    ])
);

/// English name for a Chinese country name, or `""` when the table has no entry.
pub fn english_country_name(chinese: &str) -> &'static str {
    COUNTRY_NAMES.get(chinese).copied().unwrap_or("")
}
