// src/edgar/client.rs
use crate::edgar::accession::AccessionNumber;
use crate::edgar::models::CompanySubmission;
use crate::edgar::rate_limit::RateLimiter;
use crate::edgar::session::{build_session, EdgarConfig, EdgarEndpoints};
use crate::utils::error::EdgarError;
use once_cell::sync::Lazy;
use regex::Regex;

// The search results page links to the company as ...?action=getcompany&CIK=0001082324...
static CIK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"CIK=(\d{10})").expect("Failed to compile CIK_RE"));

/// EDGAR client holding one HTTP session and a rate limiter per endpoint.
#[derive(Debug)]
pub struct EdgarClient {
    http: reqwest::Client,
    endpoints: EdgarEndpoints,
    search_limiter: RateLimiter,
    submissions_limiter: RateLimiter,
    archive_limiter: RateLimiter,
}

impl EdgarClient {
    pub fn new(config: &EdgarConfig) -> Result<Self, EdgarError> {
        Ok(Self {
            http: build_session(&config.identity)?,
            endpoints: config.endpoints.clone(),
            search_limiter: RateLimiter::edgar(),
            submissions_limiter: RateLimiter::edgar(),
            archive_limiter: RateLimiter::edgar(),
        })
    }

    /// Gets the CIK (Central Index Key) for a ticker by running a company search.
    /// When the page lists several companies, the first CIK on it is returned.
    pub async fn resolve_cik(&self, ticker: &str) -> Result<String, EdgarError> {
        self.search_limiter.acquire().await;
        tracing::info!("Resolving CIK for ticker: {}", ticker);

        let response = self
            .http
            .get(&self.endpoints.search_url)
            .query(&[
                ("CIK", ticker),
                ("Find", "Search"),
                ("owner", "exclude"),
                ("action", "getcompany"),
            ])
            .send()
            .await?;
        let body = read_text(response).await?;

        match extract_cik(&body) {
            Some(cik) => {
                tracing::debug!("Ticker {} resolved to CIK {}", ticker, cik);
                Ok(cik)
            }
            None => Err(EdgarError::NotFound(ticker.to_string())),
        }
    }

    /// Fetches the company submission index for a CIK.
    pub async fn fetch_filing_index(&self, cik: &str) -> Result<CompanySubmission, EdgarError> {
        self.submissions_limiter.acquire().await;
        let url = submissions_url(&self.endpoints, cik);
        tracing::info!("Fetching filing index from: {}", url);

        let response = self.http.get(&url).send().await?;
        let body = read_text(response).await?;

        serde_json::from_str(&body).map_err(|e| {
            EdgarError::MalformedResponse(format!("submissions for CIK {}: {}", cik, e))
        })
    }

    /// Downloads one filing document. The body is returned as is, whatever its format.
    pub async fn fetch_filing(
        &self,
        cik: &str,
        accession_number: &str,
        filename: &str,
    ) -> Result<String, EdgarError> {
        self.archive_limiter.acquire().await;
        let url = archive_url(
            &self.endpoints,
            cik,
            &AccessionNumber::new(accession_number),
            filename,
        );
        tracing::info!("Downloading document from: {}", url);

        let response = self.http.get(&url).send().await?;
        read_text(response).await
    }
}

/// Returns the first 10-digit CIK found in a search page.
pub fn extract_cik(body: &str) -> Option<String> {
    CIK_RE
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn submissions_url(endpoints: &EdgarEndpoints, cik: &str) -> String {
    format!(
        "{}/CIK{:0>10}.json",
        endpoints.submissions_url.trim_end_matches('/'),
        cik
    )
}

fn archive_url(
    endpoints: &EdgarEndpoints,
    cik: &str,
    accession: &AccessionNumber,
    filename: &str,
) -> String {
    format!(
        "{}/{}/{}/{}",
        endpoints.archive_url.trim_end_matches('/'),
        cik,
        accession.undashed(),
        filename
    )
}

/// Checks the status and reads the body as text.
async fn read_text(response: reqwest::Response) -> Result<String, EdgarError> {
    let status = response.status();
    let url = response.url().to_string();
    if !status.is_success() {
        tracing::error!("HTTP error status: {} for URL: {}", status, url);
        if status == reqwest::StatusCode::FORBIDDEN {
            tracing::warn!("Received 403 Forbidden - check User-Agent and rate limits.");
        }
        return Err(EdgarError::Http { status, url });
    }

    let body = response.text().await?;
    tracing::debug!("Successfully downloaded {} bytes from {}", body.len(), url);
    Ok(body)
}
