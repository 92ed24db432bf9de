use serde_json::{Map, Value};

const REQUIRED_FIELDS: [&str; 5] = ["firstName", "lastName", "email", "gpuType", "quantity"];

/// A validated GPU request, parsed from the raw request body.
#[derive(Debug, Clone)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gpu_type: String,
    pub quantity: i64,
    pub message: Option<String>,
}

impl Submission {
    /// Validate the parsed body. A required field is missing when it is
    /// absent, null, or an empty string. Quantity must be an integer.
    pub fn from_value(raw: &Value) -> Result<Self, String> {
        let Some(obj) = raw.as_object() else {
            return Err("Request body must be a JSON object or form data".to_string());
        };

        let missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|name| !is_present(obj.get(*name)))
            .collect();

        if !missing.is_empty() {
            return Err(format!("Missing required fields: {}", missing.join(", ")));
        }

        let quantity = parse_quantity(&obj["quantity"])?;

        Ok(Submission {
            first_name: string_field(obj, "firstName"),
            last_name: string_field(obj, "lastName"),
            email: string_field(obj, "email"),
            gpu_type: string_field(obj, "gpuType"),
            quantity,
            message: obj.get("message").and_then(Value::as_str).map(str::to_string),
        })
    }
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn string_field(obj: &Map<String, Value>, name: &str) -> String {
    match obj.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn parse_quantity(value: &Value) -> Result<i64, String> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| "quantity must be a whole number".to_string()),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("quantity must be a whole number, got '{s}'")),
        _ => Err("quantity must be a whole number".to_string()),
    }
}
