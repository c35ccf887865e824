// src/lib.rs
//! Fetches SEC EDGAR filings for a ticker and returns them as documents with metadata.
//!
//! ```no_run
//! # async fn run() -> Result<(), sec_filing_reader::EdgarError> {
//! use sec_filing_reader::{load_filings, EdgarConfig, EdgarIdentity, FilingRequest};
//!
//! let identity = EdgarIdentity::new(Some("Acme Research".into()), Some("ops@acme.test".into()))?;
//! let request = FilingRequest::new("SSYS").form_type("6-K").max_count(10);
//! let documents = load_filings(&EdgarConfig::new(identity), &request).await?;
//! for document in &documents {
//!     println!("{}", document.metadata());
//! }
//! # Ok(())
//! # }
//! ```
pub mod edgar;
pub mod utils;

pub use edgar::{
    load_filings, AccessionNumber, Company, EdgarClient, EdgarConfig, EdgarEndpoints,
    EdgarIdentity, FilingDocument, FilingIndexEntry, FilingRequest, FormFilter,
};
pub use utils::error::{AppError, EdgarError};
