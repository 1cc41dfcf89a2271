use crate::documents;
use crate::payload::{AnalyzeRequest, ErrorResponse, HealthResponse};
use crate::samples::{self, SampleOrganization};
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use swot_engine::AnalysisReport;

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn index_page() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn list_samples() -> Json<Vec<SampleOrganization>> {
    Json(samples::sample_organizations())
}

/// `POST /analyze` — runs the pipeline on inline text or a fetched document.
pub async fn analyze(
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let organization = match (payload.organization, payload.document_url) {
        (Some(text), None) => {
            let text = text.trim().to_string();
            if text.is_empty() {
                return Err(bad_request("organization description is empty"));
            }
            text
        }
        (None, Some(url)) => {
            let client = reqwest::Client::new();
            documents::fetch_document_text(&client, &url)
                .await
                .map_err(|e| bad_request(format!("could not read document: {}", e)))?
        }
        _ => {
            return Err(bad_request(
                "provide exactly one of organization or document_url",
            ))
        }
    };

    run_analysis(&organization).await
}

/// `POST /analyze/upload` — multipart variant; expects a `file` part.
pub async fn analyze_upload(
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(format!("invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload.txt").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| bad_request(format!("failed to read upload: {}", e)))?;

        let organization = documents::extract_text_from_upload(&filename, &bytes)
            .map_err(|e| bad_request(e.to_string()))?;

        return run_analysis(&organization).await;
    }

    Err(bad_request("multipart body must contain a file field"))
}

async fn run_analysis(organization: &str) -> Result<Json<AnalysisReport>, ApiError> {
    let Some(service) = crate::ANALYSIS_SERVICE.get() else {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("analysis service is not initialized")),
        ));
    };

    match service.analyze(organization).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            log::error!("SWOT analysis failed: {:#}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new(
                    "SWOT analysis could not be generated. Please try again.",
                )),
            ))
        }
    }
}

fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse::new(message)),
    )
}
