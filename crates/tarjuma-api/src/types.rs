use serde::{Deserialize, Serialize};

/// One entry of the `/languages` catalog.
///
/// The backend names the code field `language`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    #[serde(rename = "language")]
    pub code: String,
    pub name: String,
}

/// Body of a `/translate` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub src_lang: String,
    pub tgt_lang: String,
}

/// `/translate` result. Error bodies carry no `translation` field, so the
/// field is optional rather than the status code being load-bearing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub translation: Option<String>,
}

/// `/translate_file` result. `detected_lang` is the language the backend
/// inferred from the file contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileTranslateResponse {
    #[serde(default)]
    pub translation: Option<String>,
    #[serde(default)]
    pub detected_lang: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_request_serializes_to_wire_shape() {
        let request = TranslateRequest {
            text: "hello".to_string(),
            src_lang: "en".to_string(),
            tgt_lang: "ur".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"text": "hello", "src_lang": "en", "tgt_lang": "ur"})
        );
    }

    #[test]
    fn language_catalog_parses_backend_field_names() {
        let languages: Vec<Language> = serde_json::from_str(
            r#"[{"language": "en", "name": "English"}, {"language": "ur", "name": "Urdu"}]"#,
        )
        .unwrap();
        assert_eq!(languages.len(), 2);
        assert_eq!(languages[0].code, "en");
        assert_eq!(languages[0].name, "English");
        assert_eq!(languages[1].code, "ur");
    }

    #[test]
    fn missing_translation_field_is_none() {
        let empty: TranslateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.translation, None);

        let null: TranslateResponse = serde_json::from_str(r#"{"translation": null}"#).unwrap();
        assert_eq!(null.translation, None);

        let present: TranslateResponse =
            serde_json::from_str(r#"{"translation": "bonjour"}"#).unwrap();
        assert_eq!(present.translation.as_deref(), Some("bonjour"));
    }

    #[test]
    fn file_response_carries_detected_language() {
        let response: FileTranslateResponse = serde_json::from_str(
            r#"{"translation": "bonjour", "detected_lang": "en", "history_id": "abc"}"#,
        )
        .unwrap();
        assert_eq!(response.translation.as_deref(), Some("bonjour"));
        assert_eq!(response.detected_lang.as_deref(), Some("en"));
    }
}
