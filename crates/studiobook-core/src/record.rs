//! Client record model.
//!
//! A `ClientRecord` is one studio engagement. Records are persisted as a JSON
//! array with camelCase keys; fields the model does not know about are kept in
//! `extra` and written back unchanged.
//!
//! Mutations arrive as a `ClientInput`, where every business field is optional
//! and `None` means "not supplied". Normalization (trimming, money coercion)
//! happens when the input is built, never when a record is read.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Date format accepted for wedding dates.
pub const WEDDING_DATE_FORMAT: &str = "%Y-%m-%d";

/// Persisted keys owned by the record model. They can never be extra fields.
pub const KNOWN_FIELDS: [&str; 11] = [
    "id",
    "clientName",
    "weddingDate",
    "venue",
    "mapLink",
    "packageDetails",
    "deliverables",
    "paymentInfo",
    "advancePayment",
    "paymentStatus",
    "createdAt",
];

/// Whether `key` is one of [`KNOWN_FIELDS`].
pub fn is_known_field(key: &str) -> bool {
    KNOWN_FIELDS.contains(&key)
}

/// A persisted client engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    /// Opaque identifier, unique within the store
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub client_name: String,

    /// Raw date text; see [`ClientRecord::wedding_day`]
    #[serde(default, deserialize_with = "lenient_text")]
    pub wedding_date: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub venue: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub map_link: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub package_details: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub deliverables: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub payment_info: String,

    #[serde(default, deserialize_with = "lenient_money")]
    pub advance_payment: f64,

    /// Free-text label ("Pending", "In Progress", "Paid", ...)
    #[serde(default, deserialize_with = "lenient_text")]
    pub payment_status: String,

    /// Creation time, stored as epoch milliseconds
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        serialize_with = "chrono::serde::ts_milliseconds_option::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// Unrecognized fields, preserved across load/save
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClientRecord {
    /// Decode one element of the persisted record list.
    ///
    /// A `createdAt` that is not a timestamp is kept verbatim in `extra`, so
    /// it is written back exactly as it was read.
    pub fn from_stored(value: Value) -> serde_json::Result<Self> {
        let raw_created_at = value.get("createdAt").cloned();
        let mut record: Self = serde_json::from_value(value)?;
        if record.created_at.is_none() {
            if let Some(raw) = raw_created_at {
                record.extra.insert("createdAt".to_string(), raw);
            }
        }
        Ok(record)
    }

    /// Build a new record from an insert request.
    ///
    /// Fields the request leaves unspecified take their defaults (empty text,
    /// zero advance).
    pub fn from_input(input: ClientInput, id: String, now: DateTime<Utc>) -> Self {
        let mut record = Self {
            id,
            client_name: String::new(),
            wedding_date: String::new(),
            venue: String::new(),
            map_link: String::new(),
            package_details: String::new(),
            deliverables: String::new(),
            payment_info: String::new(),
            advance_payment: 0.0,
            payment_status: String::new(),
            created_at: Some(now),
            extra: Map::new(),
        };
        record.merge(input);
        record
    }

    /// Shallow-merge an update request into this record.
    ///
    /// Supplied fields win; everything else, including `id` and `created_at`,
    /// is left as it was. Extra fields merge key by key; keys that name a
    /// model field are ignored.
    pub fn merge(&mut self, input: ClientInput) {
        let ClientInput {
            id: _,
            client_name,
            wedding_date,
            venue,
            map_link,
            package_details,
            deliverables,
            payment_info,
            advance_payment,
            payment_status,
            extra,
        } = input;

        if let Some(value) = client_name {
            self.client_name = value;
        }
        if let Some(value) = wedding_date {
            self.wedding_date = value;
        }
        if let Some(value) = venue {
            self.venue = value;
        }
        if let Some(value) = map_link {
            self.map_link = value;
        }
        if let Some(value) = package_details {
            self.package_details = value;
        }
        if let Some(value) = deliverables {
            self.deliverables = value;
        }
        if let Some(value) = payment_info {
            self.payment_info = value;
        }
        if let Some(value) = advance_payment {
            self.advance_payment = value;
        }
        if let Some(value) = payment_status {
            self.payment_status = value;
        }
        self.extra
            .extend(extra.into_iter().filter(|(key, _)| !is_known_field(key)));
    }

    /// Parsed wedding date, or `None` when missing or invalid.
    pub fn wedding_day(&self) -> Option<NaiveDate> {
        parse_wedding_date(&self.wedding_date)
    }

    /// Whether the payment status is "pending" (case-insensitive).
    pub fn is_pending(&self) -> bool {
        self.payment_status.eq_ignore_ascii_case("pending")
    }

    /// Advance amount if it is a finite number.
    pub fn finite_advance(&self) -> Option<f64> {
        self.advance_payment
            .is_finite()
            .then_some(self.advance_payment)
    }
}

/// An upsert request.
///
/// `id: None` inserts a record under a freshly generated id. Setters trim
/// text and coerce money so the store only ever sees normalized values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientInput {
    pub id: Option<String>,
    pub client_name: Option<String>,
    pub wedding_date: Option<String>,
    pub venue: Option<String>,
    pub map_link: Option<String>,
    pub package_details: Option<String>,
    pub deliverables: Option<String>,
    pub payment_info: Option<String>,
    pub advance_payment: Option<f64>,
    pub payment_status: Option<String>,
    pub extra: Map<String, Value>,
}

impl ClientInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target an existing id. A blank id behaves like [`ClientInput::new`].
    pub fn for_id(id: impl AsRef<str>) -> Self {
        let trimmed = id.as_ref().trim();
        Self {
            id: (!trimmed.is_empty()).then(|| trimmed.to_string()),
            ..Self::default()
        }
    }

    pub fn client_name(mut self, value: impl AsRef<str>) -> Self {
        self.client_name = Some(clean_text(value));
        self
    }

    pub fn wedding_date(mut self, value: impl AsRef<str>) -> Self {
        self.wedding_date = Some(clean_text(value));
        self
    }

    pub fn venue(mut self, value: impl AsRef<str>) -> Self {
        self.venue = Some(clean_text(value));
        self
    }

    pub fn map_link(mut self, value: impl AsRef<str>) -> Self {
        self.map_link = Some(clean_text(value));
        self
    }

    pub fn package_details(mut self, value: impl AsRef<str>) -> Self {
        self.package_details = Some(clean_text(value));
        self
    }

    pub fn deliverables(mut self, value: impl AsRef<str>) -> Self {
        self.deliverables = Some(clean_text(value));
        self
    }

    pub fn payment_info(mut self, value: impl AsRef<str>) -> Self {
        self.payment_info = Some(clean_text(value));
        self
    }

    pub fn payment_status(mut self, value: impl AsRef<str>) -> Self {
        self.payment_status = Some(clean_text(value));
        self
    }

    /// Set the advance from a number; negative or non-finite becomes 0.
    pub fn advance_payment(mut self, value: f64) -> Self {
        self.advance_payment = Some(normalize_money(value));
        self
    }

    /// Set the advance from raw text, using [`parse_money`].
    pub fn advance_payment_text(mut self, value: impl AsRef<str>) -> Self {
        self.advance_payment = Some(parse_money(value.as_ref()));
        self
    }

    /// Carry a field the record model has no slot for.
    ///
    /// Keys in [`KNOWN_FIELDS`] are dropped; use the typed setters instead.
    pub fn extra_field(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if !is_known_field(&key) {
            self.extra.insert(key, value);
        }
        self
    }

    /// The target id, if one was supplied.
    pub fn target_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Generate a fresh record id.
pub fn generate_client_id() -> String {
    Uuid::new_v4().to_string()
}

/// Parse a `YYYY-MM-DD` wedding date.
pub fn parse_wedding_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, WEDDING_DATE_FORMAT).ok()
}

/// Parse a money amount from free text.
///
/// Reads the longest leading decimal number (so `"90000 INR"` is `90000` and
/// `"1,20,000"` is `1`). Anything unparsable, negative, or non-finite is `0`.
pub fn parse_money(value: &str) -> f64 {
    let text = value.trim_start();
    numeric_prefix(text)
        .parse::<f64>()
        .map(normalize_money)
        .unwrap_or(0.0)
}

fn normalize_money(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let mut cursor = end + 1;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        mantissa_digits += cursor - (end + 1);
        if mantissa_digits > 0 {
            end = cursor;
        }
    }

    if mantissa_digits == 0 {
        return "";
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut cursor = end + 1;
        if cursor < bytes.len() && matches!(bytes[cursor], b'+' | b'-') {
            cursor += 1;
        }
        let exp_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exp_start {
            end = cursor;
        }
    }

    &text[..end]
}

fn clean_text(value: impl AsRef<str>) -> String {
    value.as_ref().trim().to_string()
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_money<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64().map(normalize_money).unwrap_or(0.0),
        Value::String(text) => parse_money(&text),
        _ => 0.0,
    })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|millis| millis as i64))
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        Value::String(text) => DateTime::parse_from_rfc3339(&text)
            .ok()
            .map(|parsed| parsed.with_timezone(&Utc)),
        _ => None,
    })
}
