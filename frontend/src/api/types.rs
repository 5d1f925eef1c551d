use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Discriminator carried by every record of `GET /holidays-events`.
///
/// Only `"Holiday"` is significant; every other tag, including a missing one,
/// is treated as a plain event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarItemKind {
    Holiday,
    #[default]
    #[serde(other)]
    Event,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCalendarItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Kept verbatim; non-string values are stringified so date parsing can
    /// reject them per item.
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(rename = "type", default, deserialize_with = "kind_or_event")]
    pub kind: CalendarItemKind,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => value,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn kind_or_event<'de, D>(deserializer: D) -> Result<CalendarItemKind, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(tag) if tag == "Holiday" => CalendarItemKind::Holiday,
        _ => CalendarItemKind::Event,
    })
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidaysEventsResponse {
    #[serde(default)]
    pub holidays: Option<Vec<Value>>,
}

impl HolidaysEventsResponse {
    /// Decodes records one at a time. A record that is not an object is
    /// logged and dropped without affecting the rest.
    pub fn into_items(self) -> Vec<RawCalendarItem> {
        self.holidays
            .unwrap_or_default()
            .into_iter()
            .filter_map(|raw| match serde_json::from_value::<RawCalendarItem>(raw) {
                Ok(item) => Some(item),
                Err(err) => {
                    log::warn!("Skipping malformed calendar item: {}", err);
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn http_status(status: u16) -> Self {
        Self {
            error: format!("Request failed with status {}", status),
            code: format!("HTTP_{}", status),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_codes() {
        let unknown = ApiError::unknown("something failed");
        assert_eq!(unknown.code, "UNKNOWN");
        assert!(unknown.details.is_none());

        let request_failed = ApiError::request_failed("network error");
        assert_eq!(request_failed.code, "REQUEST_FAILED");

        let status = ApiError::http_status(503);
        assert_eq!(status.code, "HTTP_503");
        assert_eq!(status.error, "Request failed with status 503");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::request_failed("offline").into();
        assert_eq!(raw, "offline");
    }

    #[test]
    fn api_error_can_be_converted_to_view() {
        let _: View = ApiError::request_failed("request failed").into_view();
    }

    #[test]
    fn api_error_deserializes_without_code() {
        let error: ApiError = serde_json::from_value(json!({ "error": "nope" })).unwrap();
        assert_eq!(error.error, "nope");
        assert!(error.code.is_empty());
    }

    #[test]
    fn raw_item_reads_type_field() {
        let item: RawCalendarItem = serde_json::from_value(json!({
            "name": "Diwali",
            "date": "2024-11-01",
            "type": "Holiday"
        }))
        .unwrap();
        assert_eq!(item.kind, CalendarItemKind::Holiday);
        assert_eq!(item.name, "Diwali");
        assert_eq!(item.date, "2024-11-01");
    }

    #[test]
    fn unrecognised_type_tag_decodes_as_event() {
        let item: RawCalendarItem = serde_json::from_value(json!({
            "name": "Offsite",
            "date": "2024-06-12",
            "type": "Meeting"
        }))
        .unwrap();
        assert_eq!(item.kind, CalendarItemKind::Event);
    }

    #[test]
    fn type_tag_is_case_sensitive() {
        let item: RawCalendarItem = serde_json::from_value(json!({
            "name": "Lowercase",
            "date": "2024-06-12",
            "type": "holiday"
        }))
        .unwrap();
        assert_eq!(item.kind, CalendarItemKind::Event);
    }

    #[test]
    fn missing_or_null_holidays_key_is_empty_list() {
        let body: HolidaysEventsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(body.into_items().is_empty());
        let body: HolidaysEventsResponse =
            serde_json::from_value(json!({ "holidays": null })).unwrap();
        assert!(body.into_items().is_empty());
    }

    #[test]
    fn malformed_records_do_not_sink_the_batch() {
        let body: HolidaysEventsResponse = serde_json::from_value(json!({
            "holidays": [
                { "name": "Republic Day", "date": "2024-01-26", "type": "Holiday" },
                { "name": "Null Date", "date": null, "type": "Holiday" },
                { "name": "Numeric Date", "date": 20240126, "type": "Event" },
                { "name": "No Type", "date": "2024-01-24" },
                { "name": "Null Type", "date": "2024-01-25", "type": null },
                "not an object",
                { "date": "2024-01-29", "type": "Holiday" }
            ]
        }))
        .unwrap();

        let items = body.into_items();
        let names: Vec<_> = items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(
            names,
            ["Republic Day", "Null Date", "Numeric Date", "No Type", "Null Type", ""]
        );
        assert_eq!(items[1].date, "");
        assert_eq!(items[2].date, "20240126");
        assert_eq!(items[3].kind, CalendarItemKind::Event);
        assert_eq!(items[4].kind, CalendarItemKind::Event);
        assert_eq!(items[5].kind, CalendarItemKind::Holiday);
    }
}
