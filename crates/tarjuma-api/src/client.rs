//! Endpoint client over the browser `fetch` API.
//!
//! All paths are relative to the page origin; the page is served by the
//! same host that answers these endpoints.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Headers, RequestInit, Response};

use crate::types::{FileTranslateResponse, Language, TranslateRequest, TranslateResponse};

pub const LANGUAGES_URL: &str = "/languages";
pub const TRANSLATE_URL: &str = "/translate";
pub const TRANSLATE_FILE_URL: &str = "/translate_file";
pub const DOWNLOAD_PDF_URL: &str = "/download_pdf";
pub const DOWNLOAD_DOCX_URL: &str = "/download_docx";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, aborted).
    #[error("request failed: {0}")]
    Network(String),
    /// The response body was not the JSON we expected.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Fetches the supported-language catalog. Called once at startup.
pub async fn get_languages() -> Result<Vec<Language>, ApiError> {
    let init = RequestInit::new();
    fetch_json(LANGUAGES_URL, &init).await
}

/// Translates a piece of text.
///
/// A non-2xx status with a JSON body still resolves to `Ok`; the caller
/// sees `translation: None`, matching how the backend reports failures.
pub async fn translate(request: &TranslateRequest) -> Result<TranslateResponse, ApiError> {
    let body =
        serde_json::to_string(request).map_err(|e| ApiError::Decode(e.to_string()))?;
    let headers = Headers::new().map_err(network_err)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(network_err)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));

    fetch_json(TRANSLATE_URL, &init).await
}

/// Submits a file plus its target language as multipart form data.
pub async fn translate_file(
    file: &File,
    target_lang: &str,
) -> Result<FileTranslateResponse, ApiError> {
    let form = FormData::new().map_err(network_err)?;
    form.append_with_blob("file", file).map_err(network_err)?;
    form.append_with_str("fileTargetLang", target_lang)
        .map_err(network_err)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&form);

    fetch_json(TRANSLATE_FILE_URL, &init).await
}

/// Download link for the PDF rendition of a translated text.
pub fn download_pdf_url(text: &str) -> String {
    format!("{DOWNLOAD_PDF_URL}?text={}", urlencoding::encode(text))
}

/// Download link for the DOCX rendition of a translated text.
pub fn download_docx_url(text: &str) -> String {
    format!("{DOWNLOAD_DOCX_URL}?text={}", urlencoding::encode(text))
}

async fn fetch_json<T: serde::de::DeserializeOwned>(
    url: &str,
    init: &RequestInit,
) -> Result<T, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

    let response_js = JsFuture::from(window.fetch_with_str_and_init(url, init))
        .await
        .map_err(network_err)?;
    let response: Response = response_js
        .dyn_into()
        .map_err(|_| ApiError::Decode("not a Response".to_string()))?;

    let json = JsFuture::from(response.json().map_err(network_err)?)
        .await
        .map_err(|e| ApiError::Decode(format!("{e:?}")))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

fn network_err(e: JsValue) -> ApiError {
    ApiError::Network(format!("{e:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_urls_carry_the_text_query() {
        assert_eq!(download_pdf_url("bonjour"), "/download_pdf?text=bonjour");
        assert_eq!(download_docx_url("bonjour"), "/download_docx?text=bonjour");
    }

    #[test]
    fn download_urls_percent_encode() {
        assert_eq!(
            download_pdf_url("hello world & more"),
            "/download_pdf?text=hello%20world%20%26%20more"
        );
        // Non-ASCII text goes through UTF-8 percent encoding.
        assert_eq!(
            download_docx_url("سلام"),
            "/download_docx?text=%D8%B3%D9%84%D8%A7%D9%85"
        );
    }
}
