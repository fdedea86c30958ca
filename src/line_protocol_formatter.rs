use crate::metric::{FieldValue, Metric};
use log::trace;
use std::fmt::Write;
use std::time::Instant;

#[tracing::instrument(skip_all, level = tracing::Level::TRACE)]
pub fn format_line_protocol(metric: &Metric) -> String {
    // Renders a Metric as a single line of line protocol:
    // measurement[,tag=val...] [field=val[,field=val...]] timestamp
    //
    // No escaping is applied to the measurement, tag keys or tag values.

    let function_start = Instant::now();
    let mut line = String::from(metric.measurement());

    for (tag_key, tag_value) in metric.tags() {
        line.push(',');
        line.push_str(tag_key);
        line.push('=');
        line.push_str(tag_value);
    }

    if !metric.fields().is_empty() {
        line.push(' ');
        let fields = sorted_fields(metric.fields());
        for (i, (field_key, field_value)) in fields.into_iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            // Writing into a String cannot fail.
            let _ = write!(line, "{}={}", field_key, field_value);
        }
    }

    let _ = write!(line, " {}", metric.timestamp());

    trace!("format_line_protocol duration: {:?}", function_start.elapsed());
    line
}

fn sorted_fields(fields: &[(String, FieldValue)]) -> Vec<&(String, FieldValue)> {
    // Stable, so duplicate keys keep their relative order.
    let mut sorted: Vec<&(String, FieldValue)> = fields.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    sorted
}
