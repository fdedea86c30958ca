use crate::line_protocol_formatter::format_line_protocol;

/// A single time-series point: measurement, ordered tags, typed fields and a
/// nanosecond timestamp.
///
/// Tags are emitted in the order they were added. Fields are emitted sorted by
/// key, whatever order they were added in.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    measurement: String,
    tags: Vec<(String, String)>,
    fields: Vec<(String, FieldValue)>,
    timestamp: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Boolean(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(String),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        // Rendering by kind is part of the wire contract with the database.
        // String values are quoted but not escaped, so embedded `"` or `\`
        // pass through untouched.
        match self {
            FieldValue::I64(v) => write!(f, "{}i", v),
            FieldValue::F64(v) => write!(f, "{:.6}", v),
            FieldValue::String(v) => write!(f, "\"{}\"", v),
            FieldValue::Boolean(v) => v.fmt(f),
            FieldValue::U64(v) => v.fmt(f),
        }
    }
}

macro_rules! impl_from_for_field_value {
    ($variant:ident, $inner:ty, $($from:ty),+) => {
        $(
            impl From<$from> for FieldValue {
                fn from(value: $from) -> Self {
                    FieldValue::$variant(<$inner>::from(value))
                }
            }
        )+
    };
}

impl_from_for_field_value!(I64, i64, i64, i32, i16, i8);
impl_from_for_field_value!(U64, u64, u64, u32);
impl_from_for_field_value!(F64, f64, f64, f32);
impl_from_for_field_value!(Boolean, bool, bool);
impl_from_for_field_value!(String, String, String, &str);

impl Metric {
    pub fn new(
        measurement: String,
        tags: Vec<(String, String)>,
        fields: Vec<(String, FieldValue)>,
        timestamp: i64,
    ) -> Self {
        Metric {
            measurement,
            tags,
            fields,
            timestamp,
        }
    }

    /// Appends a tag. Any value with a textual representation is accepted.
    pub fn add_tag(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.tags.push((key.into(), value.to_string()));
        self
    }

    pub fn add_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    pub fn measurement(&self) -> &str {
        &self.measurement
    }

    pub fn tags(&self) -> &[(String, String)] {
        &self.tags
    }

    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&format_line_protocol(self))
    }
}
