use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{CovidError, Result};

/// Render `value` as JSON indented by four spaces. Non-ASCII text is kept as is.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| CovidError::Parse(e.to_string()))
}
