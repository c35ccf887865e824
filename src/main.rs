// src/main.rs
use chrono::{DateTime, Utc};
use clap::Parser;
use sec_filing_reader::edgar::session::{EMAIL_ENV, ORGANIZATION_ENV};
use sec_filing_reader::utils;
use sec_filing_reader::{
    load_filings, AppError, EdgarConfig, EdgarIdentity, FilingDocument, FilingRequest, FormFilter,
};

/// Command Line Interface for the SEC EDGAR filing reader
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ticker symbol of the company
    #[arg(short, long)]
    ticker: String,

    /// Form type to keep, e.g. 10-K, 6-K, 20-F (default: all forms)
    #[arg(short, long)]
    form_type: Option<String>,

    /// Maximum number of filings to download (default: no limit)
    #[arg(short = 'k', long)]
    max_count: Option<usize>,

    /// Organization name sent in the User-Agent
    #[arg(long, env = ORGANIZATION_ENV)]
    organization: Option<String>,

    /// Contact email sent in the User-Agent
    #[arg(long, env = EMAIL_ENV)]
    email: Option<String>,

    /// Print one JSON metadata object per filing instead of a summary
    #[arg(long)]
    json: bool,
}

impl Args {
    fn request(&self) -> FilingRequest {
        FilingRequest {
            ticker: self.ticker.clone(),
            form_type: FormFilter::from(self.form_type.clone()),
            max_count: self.max_count,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for ticker: {}", args.ticker);

    // 3. Identity must be present before anything is sent to SEC
    let identity = EdgarIdentity::new(args.organization.clone(), args.email.clone())?;
    let config = EdgarConfig::new(identity);

    // 4. Load the filings
    let documents = load_filings(&config, &args.request()).await?;
    let retrieved_at = Utc::now();

    // 5. Report
    if args.json {
        for document in &documents {
            println!("{}", serde_json::to_string(&json_line(document, retrieved_at))?);
        }
    } else {
        println!("{}", documents.len());
        for document in &documents {
            println!("{}", summary_line(document));
        }
    }

    tracing::info!("Processing finished. Documents: {}", documents.len());
    Ok(())
}

fn json_line(document: &FilingDocument, retrieved_at: DateTime<Utc>) -> serde_json::Value {
    let mut metadata = document.metadata();
    if let Some(map) = metadata.as_object_mut() {
        map.insert("text_length".to_string(), document.text.len().into());
        map.insert("retrieved_at".to_string(), retrieved_at.to_rfc3339().into());
    }
    metadata
}

fn summary_line(document: &FilingDocument) -> String {
    format!(
        "{} {} {} {} ({}) {} bytes",
        document.company.ticker,
        document.filing.form_type,
        document.filing.filing_date,
        document.filing.accession_number,
        document.filing.primary_document,
        document.text.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use clap::CommandFactory;
    use sec_filing_reader::{Company, FilingIndexEntry};

    fn document() -> FilingDocument {
        FilingDocument {
            company: Company {
                cik: "0001082324".to_string(),
                name: "STRATASYS LTD.".to_string(),
                ticker: "SSYS".to_string(),
                exchange: "Nasdaq".to_string(),
                fiscal_year_end: Some("1231".to_string()),
                state_of_incorporation: Some("Israel".to_string()),
            },
            filing: FilingIndexEntry {
                form_type: "6-K".to_string(),
                accession_number: "0001178913-24-000123".to_string(),
                filing_date: "2024-03-05".to_string(),
                primary_document: "zk2430900.htm".to_string(),
            },
            text: "<html></html>".to_string(),
        }
    }

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_build_request() {
        let args = Args::parse_from(["sec_filing_reader", "-t", "SSYS", "-f", "6-K", "-k", "10"]);
        let request = args.request();
        assert_eq!(request.ticker, "SSYS");
        assert_eq!(request.form_type, FormFilter::Only("6-K".to_string()));
        assert_eq!(request.max_count, Some(10));

        let args = Args::parse_from(["sec_filing_reader", "--ticker", "AAPL"]);
        assert_eq!(args.request().form_type, FormFilter::All);
        assert_eq!(args.request().max_count, None);
    }

    #[test]
    fn test_json_line_adds_length_and_timestamp() {
        let retrieved_at = Utc.with_ymd_and_hms(2024, 3, 6, 12, 0, 0).unwrap();
        let line = json_line(&document(), retrieved_at);
        assert_eq!(line["cik"], "0001082324");
        assert_eq!(line["filing_name"], "zk2430900.htm");
        assert_eq!(line["text_length"], 13);
        assert_eq!(line["retrieved_at"], "2024-03-06T12:00:00+00:00");
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            summary_line(&document()),
            "SSYS 6-K 2024-03-05 0001178913-24-000123 (zk2430900.htm) 13 bytes"
        );
    }
}
