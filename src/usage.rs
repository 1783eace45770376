use serde_json::Value;
use std::fmt;
use tracing::trace;

/// One submitted figure, rendered into the prompt exactly as received.
#[derive(Debug, Clone, PartialEq)]
pub enum UsageFigure {
    Number(f64),
    /// A string as sent, or the JSON text of any other truthy value.
    Text(String),
}

impl From<f64> for UsageFigure {
    fn from(value: f64) -> Self {
        UsageFigure::Number(value)
    }
}

impl fmt::Display for UsageFigure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageFigure::Number(n) => write!(f, "{n}"),
            UsageFigure::Text(s) => f.write_str(s),
        }
    }
}

/// Household electricity figures submitted with a suggestions request.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageInput {
    pub units_used: UsageFigure,
    pub per_unit_cost: UsageFigure,
    pub total_bill: UsageFigure,
}

/// At least one field is absent or falsy (`0` included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError;

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Missing required values")
    }
}

impl std::error::Error for UsageError {}

const FIELDS: [&str; 3] = ["unitsUsed", "perUnitCost", "totalBill"];

impl UsageInput {
    pub fn new(
        units_used: impl Into<UsageFigure>,
        per_unit_cost: impl Into<UsageFigure>,
        total_bill: impl Into<UsageFigure>,
    ) -> Self {
        Self {
            units_used: units_used.into(),
            per_unit_cost: per_unit_cost.into(),
            total_bill: total_bill.into(),
        }
    }

    /// Validate a decoded request body.
    ///
    /// Only presence is checked, following truthiness: `null`, `false`, `0`,
    /// `""`, `[]` and `{}` all count as missing. Present values are not
    /// checked for type or sign and reach the prompt unchanged.
    pub fn from_json(body: &Value) -> Result<Self, UsageError> {
        let mut figures = FIELDS.iter().map(|field| {
            let value = body.get(field).unwrap_or(&Value::Null);
            is_truthy(value).then(|| to_figure(value))
        });

        match (figures.next(), figures.next(), figures.next()) {
            (Some(Some(units_used)), Some(Some(per_unit_cost)), Some(Some(total_bill))) => {
                Ok(Self {
                    units_used,
                    per_unit_cost,
                    total_bill,
                })
            }
            _ => {
                trace!(?body, "usage input missing a required value");
                Err(UsageError)
            }
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn to_figure(value: &Value) -> UsageFigure {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(UsageFigure::Number)
            .unwrap_or_else(|| UsageFigure::Text(n.to_string())),
        Value::String(s) => UsageFigure::Text(s.clone()),
        other => UsageFigure::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_numbers_and_strings() {
        let input = UsageInput::from_json(&json!({
            "unitsUsed": 100,
            "perUnitCost": "5.5",
            "totalBill": 550.5
        }))
        .unwrap();
        assert_eq!(input.units_used, UsageFigure::Number(100.0));
        assert_eq!(input.per_unit_cost, UsageFigure::Text("5.5".to_string()));
        assert_eq!(input.total_bill.to_string(), "550.5");
    }

    #[test]
    fn zero_counts_as_missing() {
        let body = json!({"unitsUsed": 0, "perUnitCost": 5, "totalBill": 500});
        assert_eq!(UsageInput::from_json(&body), Err(UsageError));
    }

    #[test]
    fn falsy_values_count_as_missing() {
        for falsy in [json!(null), json!(false), json!(""), json!([]), json!({})] {
            let body = json!({"unitsUsed": 10, "perUnitCost": falsy, "totalBill": 500});
            assert_eq!(UsageInput::from_json(&body), Err(UsageError));
        }
    }

    #[test]
    fn absent_field_and_non_object_body() {
        let body = json!({"unitsUsed": 10, "perUnitCost": 5});
        assert_eq!(UsageInput::from_json(&body), Err(UsageError));
        assert_eq!(UsageInput::from_json(&json!([1, 2, 3])), Err(UsageError));
    }

    #[test]
    fn string_zero_is_present() {
        let body = json!({"unitsUsed": "0", "perUnitCost": 5, "totalBill": 500});
        let input = UsageInput::from_json(&body).unwrap();
        assert_eq!(input.units_used.to_string(), "0");
    }

    #[test]
    fn truthy_non_numbers_pass_through() {
        let body = json!({"unitsUsed": "lots", "perUnitCost": [1], "totalBill": true});
        let input = UsageInput::from_json(&body).unwrap();
        assert_eq!(input.units_used.to_string(), "lots");
        assert_eq!(input.per_unit_cost.to_string(), "[1]");
        assert_eq!(input.total_bill.to_string(), "true");
    }

    #[test]
    fn negative_values_pass_through() {
        let body = json!({"unitsUsed": -3, "perUnitCost": 5, "totalBill": 500});
        assert_eq!(
            UsageInput::from_json(&body).unwrap().units_used,
            UsageFigure::Number(-3.0)
        );
    }
}
