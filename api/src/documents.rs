use anyhow::Result;
use pdf_extract::extract_text;
use regex::Regex;
use reqwest::Client;
use std::io::Write;

// Uploads larger than this are rejected outright.
const MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

/// Turns an uploaded file into a cleaned organization description.
///
/// TXT (and markdown) bodies pass through a lossy UTF-8 decode; PDFs go
/// through a temp file and `pdf-extract`. DOCX is recognized but not
/// supported.
pub fn extract_text_from_upload(filename: &str, bytes: &[u8]) -> Result<String> {
    if bytes.is_empty() {
        return Err(anyhow::anyhow!("uploaded file is empty"));
    }
    if bytes.len() > MAX_DOCUMENT_BYTES {
        return Err(anyhow::anyhow!(
            "uploaded file is too large ({} bytes, limit {})",
            bytes.len(),
            MAX_DOCUMENT_BYTES
        ));
    }

    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let text = match extension.as_str() {
        "txt" | "text" | "md" => String::from_utf8_lossy(bytes).into_owned(),
        "pdf" => extract_pdf_text(bytes)?,
        "docx" => {
            return Err(anyhow::anyhow!(
                "DOCX documents are not supported yet; upload TXT or PDF"
            ))
        }
        "" => return Err(anyhow::anyhow!("uploaded file has no extension")),
        other => {
            return Err(anyhow::anyhow!(
                "unsupported document format: .{}",
                other
            ))
        }
    };

    let cleaned = normalize_text(&text);
    if cleaned.is_empty() {
        return Err(anyhow::anyhow!(
            "no readable text could be extracted from {}",
            filename
        ));
    }

    Ok(cleaned)
}

/// Fetches a remote document and extracts its text, dispatching on the
/// response content type with the URL extension as fallback.
pub async fn fetch_document_text(client: &Client, url: &str) -> Result<String> {
    log::info!("Fetching document from {}", url);

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(anyhow::anyhow!(
            "document fetch failed with status {}",
            response.status()
        ));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    let bytes = response.bytes().await?;

    let filename = if content_type.contains("application/pdf") {
        "document.pdf"
    } else if content_type.starts_with("text/") {
        "document.txt"
    } else if url.to_ascii_lowercase().ends_with(".pdf") {
        "document.pdf"
    } else {
        "document.txt"
    };

    extract_text_from_upload(filename, &bytes)
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(bytes)?;
    let text = extract_text(file.path())?;
    Ok(text)
}

/// Collapses whitespace runs and strips control noise from extracted text.
pub fn normalize_text(text: &str) -> String {
    let re_special = Regex::new(r#"[^\w\s.,!?;:'"()\-\[\]{}$%&/@+]"#).unwrap();
    let re_whitespace = Regex::new(r"\s+").unwrap();

    let cleaned = re_special.replace_all(text, " ");
    let cleaned = re_whitespace.replace_all(&cleaned, " ");

    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn txt_upload_is_decoded_and_cleaned() {
        let text = extract_text_from_upload("org.txt", b"A 50-person\n\n  startup.").unwrap();
        assert_eq!(text, "A 50-person startup.");
    }

    #[test]
    fn docx_is_rejected_with_a_pointer_to_supported_formats() {
        let err = extract_text_from_upload("org.docx", b"PK\x03\x04").unwrap_err();
        assert!(err.to_string().contains("DOCX"));
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        let err = extract_text_from_upload("org.xlsx", b"data").unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }

    #[test]
    fn empty_uploads_are_rejected() {
        assert!(extract_text_from_upload("org.txt", b"").is_err());
    }

    #[test]
    fn whitespace_only_text_is_rejected() {
        assert!(extract_text_from_upload("org.txt", b"   \n\t  ").is_err());
    }

    #[test]
    fn normalize_collapses_runs_and_keeps_punctuation() {
        let cleaned = normalize_text("Revenue:  $42M\n\ngrew 65%  (three years).");
        assert_eq!(cleaned, "Revenue: $42M grew 65% (three years).");
    }
}
