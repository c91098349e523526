//! Typed helpers for the analysis backend's HTTP endpoints.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, Response};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::{AnalysisResult, DailyHistory, DateList, ErrorBody, ReanalyzeRequest, SaveReceipt};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base: config.api_base.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Where the browser can load a stored meal photo from.
    ///
    /// Absolute URLs are used as-is. Rooted paths are resolved against the
    /// API base, and bare filenames live under `/uploads/`.
    pub fn image_url(&self, image_path: &str) -> String {
        if image_path.starts_with("http://")
            || image_path.starts_with("https://")
            || image_path.starts_with("data:")
        {
            image_path.to_string()
        } else if image_path.starts_with('/') {
            self.url(image_path)
        } else {
            self.url(&format!("/uploads/{}", urlencoding::encode(image_path)))
        }
    }

    fn daily_data_url(&self, date: &str) -> String {
        self.url(&format!("/get_daily_data/{}", urlencoding::encode(date)))
    }

    /// Upload the analysis form (image file plus meal type).
    pub async fn analyze(&self, form: &FormData) -> Result<AnalysisResult, ClientError> {
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(form);
        let response = self.send("/analyze", &self.url("/analyze"), &init).await?;
        read_result(&response).await
    }

    /// Ask for a new analysis of an already uploaded image, with user corrections.
    pub async fn reanalyze(&self, request: &ReanalyzeRequest) -> Result<AnalysisResult, ClientError> {
        let init = json_post(request)?;
        let response = self.send("/reanalyze", &self.url("/reanalyze"), &init).await?;
        read_result(&response).await
    }

    /// Store a meal in the history. Returns the date it was filed under.
    pub async fn save_meal(&self, meal: &AnalysisResult) -> Result<String, ClientError> {
        let init = json_post(meal)?;
        let response = self.send("/save_meal", &self.url("/save_meal"), &init).await?;
        let body = read_text(&response).await?;
        log_failure(&response, classify_save(response.status(), &body))
    }

    pub async fn get_all_dates(&self) -> Result<DateList, ClientError> {
        let init = RequestInit::new();
        init.set_method("GET");
        let response = self.send("/get_all_dates", &self.url("/get_all_dates"), &init).await?;
        read_result(&response).await
    }

    pub async fn get_daily_data(&self, date: &str) -> Result<DailyHistory, ClientError> {
        let init = RequestInit::new();
        init.set_method("GET");
        let response = self.send("/get_daily_data", &self.daily_data_url(date), &init).await?;
        read_result(&response).await
    }

    async fn send(&self, endpoint: &str, url: &str, init: &RequestInit) -> Result<Response, ClientError> {
        leptos::logging::log!("Requesting {}", endpoint);

        let window = web_sys::window().ok_or_else(|| ClientError::Transport("no window available".to_string()))?;
        let request = Request::new_with_str_and_init(url, init).map_err(|e| transport_error(endpoint, e))?;

        JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| transport_error(endpoint, e))?
            .dyn_into::<Response>()
            .map_err(|_| ClientError::Parse(format!("{} did not return a Response", endpoint)))
    }
}

fn json_post<T: Serialize>(payload: &T) -> Result<RequestInit, ClientError> {
    let body = serde_json::to_string(payload).map_err(|e| ClientError::Parse(e.to_string()))?;

    let headers = Headers::new().map_err(|e| ClientError::Transport(js_message(&e)))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| ClientError::Transport(js_message(&e)))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));
    Ok(init)
}

async fn read_text(response: &Response) -> Result<String, ClientError> {
    let promise = response.text().map_err(|e| ClientError::Parse(js_message(&e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ClientError::Transport(js_message(&e)))?;
    value
        .as_string()
        .ok_or_else(|| ClientError::Parse("response body was not text".to_string()))
}

async fn read_result<T: DeserializeOwned>(response: &Response) -> Result<T, ClientError> {
    let body = read_text(response).await?;
    log_failure(response, classify_response(response.ok(), response.status(), &body))
}

fn log_failure<T>(response: &Response, result: Result<T, ClientError>) -> Result<T, ClientError> {
    if let Err(e) = &result {
        leptos::logging::error!("Request to {} failed: {}", response.url(), e);
    }
    result
}

/// Turn a finished response into a typed result.
///
/// Non-2xx replies carry `{error}`; when that body is missing the status code
/// stands in for the message.
pub fn classify_response<T: DeserializeOwned>(ok: bool, status: u16, body: &str) -> Result<T, ClientError> {
    if ok {
        return serde_json::from_str(body).map_err(|e| ClientError::Parse(e.to_string()));
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => Err(ClientError::Server(err.error)),
        Err(_) => Err(ClientError::Server(format!("Request failed with status {}", status))),
    }
}

/// The save endpoint reports failure in its body, whatever the status.
pub fn classify_save(status: u16, body: &str) -> Result<String, ClientError> {
    let receipt: SaveReceipt = match serde_json::from_str(body) {
        Ok(receipt) => receipt,
        Err(e) if (200..300).contains(&status) => return Err(ClientError::Parse(e.to_string())),
        Err(_) => return Err(ClientError::Server(format!("Request failed with status {}", status))),
    };

    if receipt.success {
        receipt
            .date
            .ok_or_else(|| ClientError::Parse("save succeeded without a date".to_string()))
    } else {
        Err(ClientError::Server(
            receipt.error.unwrap_or_else(|| "Failed to save meal".to_string()),
        ))
    }
}

fn transport_error(endpoint: &str, err: JsValue) -> ClientError {
    let message = js_message(&err);
    leptos::logging::error!("Request to {} failed: {}", endpoint, message);
    ClientError::Transport(message)
}

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "Unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient { base: base.to_string() }
    }

    #[test]
    fn test_image_url_for_bare_filename() {
        assert_eq!(client("").image_url("20240501_121500_lunch.jpg"), "/uploads/20240501_121500_lunch.jpg");
        assert_eq!(
            client("https://api.example.com").image_url("plate 1.png"),
            "https://api.example.com/uploads/plate%201.png"
        );
    }

    #[test]
    fn test_image_url_passes_through_absolute_paths() {
        let absolute = "http://localhost:5000/uploads/20240501_lunch.jpg";
        assert_eq!(client("").image_url(absolute), absolute);
        assert_eq!(client("").image_url("/uploads/a.jpg"), "/uploads/a.jpg");
    }

    #[test]
    fn test_image_url_rooted_path_uses_api_base() {
        assert_eq!(
            client("https://api.example.com").image_url("/uploads/a.jpg"),
            "https://api.example.com/uploads/a.jpg"
        );
    }

    #[test]
    fn test_daily_data_url_encodes_date() {
        assert_eq!(client("").daily_data_url("2024-05-01"), "/get_daily_data/2024-05-01");
        assert_eq!(client("/api").daily_data_url("2024/05/01"), "/api/get_daily_data/2024%2F05%2F01");
    }

    #[test]
    fn test_ok_response_parsed() {
        let dates: DateList = classify_response(true, 200, r#"["2024-05-01","2024-04-30"]"#).unwrap();
        assert_eq!(dates.latest(), Some("2024-05-01"));
    }

    #[test]
    fn test_ok_response_with_bad_json_is_parse_error() {
        let err = classify_response::<DailyHistory>(true, 200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[test]
    fn test_error_body_message_used() {
        let err = classify_response::<AnalysisResult>(false, 400, r#"{"error": "Invalid file type"}"#).unwrap_err();
        assert_eq!(err, ClientError::Server("Invalid file type".to_string()));
    }

    #[test]
    fn test_error_without_body_names_status() {
        let err = classify_response::<AnalysisResult>(false, 502, "Bad Gateway").unwrap_err();
        assert_eq!(err, ClientError::Server("Request failed with status 502".to_string()));
    }

    #[test]
    fn test_save_success_returns_date() {
        assert_eq!(classify_save(200, r#"{"success": true, "date": "2024-05-01"}"#).unwrap(), "2024-05-01");
    }

    #[test]
    fn test_save_reported_failure() {
        let err = classify_save(200, r#"{"success": false, "error": "storage unavailable"}"#).unwrap_err();
        assert_eq!(err, ClientError::Server("storage unavailable".to_string()));

        let err = classify_save(500, r#"{"success": false}"#).unwrap_err();
        assert_eq!(err, ClientError::Server("Failed to save meal".to_string()));
    }

    #[test]
    fn test_save_unparseable_body() {
        assert!(matches!(classify_save(200, "").unwrap_err(), ClientError::Parse(_)));
        assert_eq!(
            classify_save(500, "Internal Server Error").unwrap_err(),
            ClientError::Server("Request failed with status 500".to_string())
        );
    }
}
