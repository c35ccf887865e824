// src/edgar/pipeline.rs
use crate::edgar::client::EdgarClient;
use crate::edgar::models::FilingDocument;
use crate::edgar::session::EdgarConfig;
use crate::utils::error::EdgarError;

/// Which form types to keep from the filing index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormFilter {
    #[default]
    All,
    Only(String),
}

impl FormFilter {
    pub fn matches(&self, form_type: &str) -> bool {
        match self {
            FormFilter::All => true,
            FormFilter::Only(wanted) => wanted == form_type,
        }
    }
}

impl From<Option<String>> for FormFilter {
    fn from(form_type: Option<String>) -> Self {
        form_type.map_or(FormFilter::All, FormFilter::Only)
    }
}

/// What to load: a ticker, an optional form type (e.g. "10-K", "6-K") and a cap on documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingRequest {
    pub ticker: String,
    pub form_type: FormFilter,
    pub max_count: Option<usize>,
}

impl FilingRequest {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            form_type: FormFilter::All,
            max_count: None,
        }
    }

    pub fn form_type(mut self, form_type: impl Into<String>) -> Self {
        self.form_type = FormFilter::Only(form_type.into());
        self
    }

    pub fn max_count(mut self, max_count: usize) -> Self {
        self.max_count = Some(max_count);
        self
    }

    fn is_full(&self, collected: usize) -> bool {
        self.max_count.is_some_and(|max| collected >= max)
    }
}

/// Builds a session from `config` and loads the requested filings.
pub async fn load_filings(
    config: &EdgarConfig,
    request: &FilingRequest,
) -> Result<Vec<FilingDocument>, EdgarError> {
    let client = EdgarClient::new(config)?;
    client.load_filings(request).await
}

fn validate(request: &FilingRequest) -> Result<(), EdgarError> {
    if request.ticker.trim().is_empty() {
        return Err(EdgarError::InvalidRequest(
            "a company ticker is required".to_string(),
        ));
    }
    Ok(())
}

impl EdgarClient {
    /// Resolves the ticker, then walks the filing index newest first, downloading each
    /// matching filing until `max_count` documents are collected. Any failure aborts the run.
    pub async fn load_filings(
        &self,
        request: &FilingRequest,
    ) -> Result<Vec<FilingDocument>, EdgarError> {
        validate(request)?;
        let ticker = request.ticker.trim();

        let cik = self.resolve_cik(ticker).await?;
        let submission = self.fetch_filing_index(&cik).await?;
        let company = submission.company()?;
        let entries = submission.recent_entries()?;
        tracing::info!(
            "{} ({}) lists {} recent filings",
            company.name,
            cik,
            entries.len()
        );

        let mut documents = Vec::new();
        if request.is_full(documents.len()) {
            return Ok(documents);
        }

        for entry in entries {
            if !request.form_type.matches(&entry.form_type) {
                continue;
            }

            let text = self
                .fetch_filing(&cik, &entry.accession_number, &entry.primary_document)
                .await?;
            tracing::debug!(
                "Fetched {} {} filed {} ({} bytes)",
                entry.form_type,
                entry.accession_number,
                entry.filing_date,
                text.len()
            );
            documents.push(FilingDocument {
                company: company.clone(),
                filing: entry,
                text,
            });

            if request.is_full(documents.len()) {
                break;
            }
        }

        tracing::info!("Loaded {} filings for {}", documents.len(), ticker);
        Ok(documents)
    }
}
