use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong outside of normal pointer handling.
///
/// Pointer positions outside the grid are not errors; they resolve to "no cell".
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid color {0:?}: expected #rgb, #rgba, #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("dom error: {0}")]
    Dom(String),
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_convert_via_from() {
        let err: EngineError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, EngineError::ConfigParse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn invalid_color_message_names_the_input() {
        let err = EngineError::InvalidColor("#12".to_string());
        assert!(err.to_string().contains("\"#12\""));
    }
}
