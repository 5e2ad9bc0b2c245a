//! HTTP API Client
//!
//! Functions for communicating with the EcoTrack REST API.

use gloo_net::http::Request;

use crate::state::global::{unit_for_code, EnvironmentalRecord, RecordForm, SummaryEntry};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("ecotrack_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct RecordListResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<EnvironmentalRecord>,
}

/// The backend also sends `period`, `start_date` and `end_date` alongside the
/// summary; this client only consumes the entries.
#[derive(Debug, serde::Deserialize)]
pub struct SummaryResponse {
    pub success: bool,
    #[serde(default)]
    pub summary: Vec<SummaryEntry>,
}

#[derive(Debug, serde::Deserialize)]
pub struct CreateResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<EnvironmentalRecord>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: Option<String>,
}

// ============ API Functions ============

/// Fetch all environmental records
pub async fn fetch_records() -> Result<Vec<EnvironmentalRecord>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/environmental-data", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(rejection_message(response).await);
    }

    let result: RecordListResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    if !result.success {
        return Err("Request rejected by backend".to_string());
    }

    Ok(result.data)
}

/// Fetch the monthly aggregate summary
pub async fn fetch_summary() -> Result<Vec<SummaryEntry>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/environmental-data/summary?period=monthly", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(rejection_message(response).await);
    }

    let result: SummaryResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    if !result.success {
        return Err("Request rejected by backend".to_string());
    }

    Ok(result.summary)
}

/// Submit a new environmental record.
///
/// The payload `unit` is always recomputed from the category table using the
/// form's `data_type`; whatever the form previously held is irrelevant.
pub async fn create_record(form: &RecordForm) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct CreateRecordRequest {
        data_type: String,
        value: f64,
        unit: String,
        description: String,
        date_recorded: String,
    }

    let value: f64 = form.value.trim().parse()
        .map_err(|_| format!("Invalid value: {:?}", form.value))?;

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/environmental-data", api_base))
        .json(&CreateRecordRequest {
            data_type: form.data_type.clone(),
            value,
            unit: unit_for_code(&form.data_type).to_string(),
            description: form.description.clone(),
            date_recorded: form.date_recorded.clone(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(rejection_message(response).await);
    }

    let result: CreateResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    if !result.success {
        return Err(result.message.unwrap_or_else(|| "Request rejected by backend".to_string()));
    }

    Ok(())
}

/// Extract the backend's error message from a non-OK response, if any.
async fn rejection_message(response: gloo_net::http::Response) -> String {
    let error: ApiError = response.json().await
        .unwrap_or(ApiError { message: None });
    error.message.unwrap_or_else(|| "Unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_list_response() {
        let json = r#"{
            "success": true,
            "data": [
                {"id": 1, "data_type": "co2", "value": 120.5, "unit": "kg CO2e",
                 "date_recorded": "2024-03-01", "description": ""}
            ]
        }"#;
        let parsed: RecordListResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.data[0].data_type, "co2");
    }

    #[test]
    fn test_parse_summary_response_with_extra_fields() {
        let json = r#"{
            "success": true,
            "period": "monthly",
            "start_date": "2024-02-01T00:00:00",
            "end_date": "2024-03-01T00:00:00",
            "summary": [
                {"data_type": "water", "total": 500, "average": 166.7, "count": 3},
                {"data_type": "co2", "total": 80, "count": 1}
            ]
        }"#;
        let parsed: SummaryResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.summary.len(), 2);
        assert_eq!(parsed.summary[0].data_type, "water");
        assert_eq!(parsed.summary[1].total, 80.0);
    }

    #[test]
    fn test_parse_rejection_body() {
        let json = r#"{"success": false, "message": "Erro ao adicionar dados"}"#;
        let parsed: CreateResponse = serde_json::from_str(json).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.message.as_deref(), Some("Erro ao adicionar dados"));
    }
}
