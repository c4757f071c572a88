use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The `{ success: true, data?, message? }` envelope of successful responses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuccessBody<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> SuccessBody<T> {
    pub fn data(data: T) -> SuccessBody<T> {
        SuccessBody {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn message(message: &str) -> SuccessBody<T> {
        SuccessBody {
            success: true,
            data: None,
            message: Some(message.to_string()),
        }
    }

    pub fn with_message(mut self, message: &str) -> SuccessBody<T> {
        self.message = Some(message.to_string());
        self
    }
}

/// Deserializes a field that may hold anything, mapping a value of the wrong
/// shape to `None` instead of failing the whole record.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;

    Ok(serde_json::from_value(value).ok())
}

/// Renders a json scalar the way it would read in a url segment.
pub fn value_as_path_segment(value: &Value) -> Option<String> {
    match value {
        Value::String(value) => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        Value::Bool(value) => Some(value.to_string()),
        _ => None,
    }
}
