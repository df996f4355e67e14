use crate::errors::GasParseError;
use crate::form::FieldRole;

/// Gas remaining after a dive: `start - end`. Negative results are allowed;
/// the difference saturates at the `i64` bounds.
pub fn gas_remaining(start: &str, end: &str) -> Result<i64, GasParseError> {
    let start = parse_reading(FieldRole::GasStart, start)?;
    let end = parse_reading(FieldRole::GasEnd, end)?;
    Ok(start.saturating_sub(end))
}

/// Live variant used while rendering: `None` until both readings parse.
pub fn preview(start: &str, end: &str) -> Option<i64> {
    if start.is_empty() || end.is_empty() {
        return None;
    }
    gas_remaining(start, end).ok()
}

fn parse_reading(field: FieldRole, value: &str) -> Result<i64, GasParseError> {
    value.parse::<i64>().map_err(|source| GasParseError {
        field,
        value: value.to_string(),
        source,
    })
}
