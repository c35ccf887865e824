// src/edgar/mod.rs
pub mod accession;
pub mod client;
pub mod models;
pub mod pipeline;
pub mod rate_limit;
pub mod session;

// Re-export key types for convenience
pub use accession::AccessionNumber;
pub use client::EdgarClient;
pub use models::{Company, FilingDocument, FilingIndexEntry};
pub use pipeline::{load_filings, FilingRequest, FormFilter};
pub use session::{EdgarConfig, EdgarEndpoints, EdgarIdentity};
