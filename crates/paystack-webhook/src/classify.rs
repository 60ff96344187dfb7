//! Classification of verified delivery bodies against the event catalog.

use paystack_core::{
    events::{DISCRIMINATOR_FIELD, PAYLOAD_FIELD},
    Event, EventKind,
};
use serde_json::Value;

use crate::error::ValidationFailure;

/// Parses `raw` and validates it against the shape of the kind it names.
///
/// The body must be a JSON object whose `event` field names a catalog kind;
/// its `data` field must then match that kind's payload shape. Extra fields
/// anywhere are ignored.
///
/// # Errors
///
/// - `MalformedBody` if `raw` is not valid JSON.
/// - `UnknownEventKind` if the body is not an object, has no string `event`
///   field, or names a kind outside the catalog.
/// - `SchemaMismatch` if `data` is absent or violates the kind's shape.
pub fn classify(raw: &[u8]) -> Result<Event, ValidationFailure> {
    let parsed: Value = serde_json::from_slice(raw)
        .map_err(|e| ValidationFailure::malformed_body(e.to_string()))?;

    let Value::Object(mut body) = parsed else {
        return Err(ValidationFailure::unknown_kind(None));
    };

    let kind = match body.get(DISCRIMINATOR_FIELD) {
        Some(Value::String(tag)) => EventKind::from_tag(tag)
            .ok_or_else(|| ValidationFailure::unknown_kind(Some(tag.clone())))?,
        _ => return Err(ValidationFailure::unknown_kind(None)),
    };

    let data = body.remove(PAYLOAD_FIELD).unwrap_or(Value::Null);
    Event::from_data(kind, data)
        .map_err(|e| ValidationFailure::schema_mismatch(kind, e.to_string()))
}
