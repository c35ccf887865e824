// src/edgar/models.rs
use crate::edgar::accession::AccessionNumber;
use crate::utils::error::EdgarError;
use serde::{Deserialize, Serialize};

/// The parts of the EDGAR company submission index this reader uses.
/// Example: https://data.sec.gov/submissions/CIK0000320193.json
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySubmission {
    pub cik: String,
    pub name: String,
    pub tickers: Vec<String>,
    pub exchanges: Vec<String>,
    #[serde(default)]
    pub fiscal_year_end: Option<String>,
    #[serde(default)]
    pub state_of_incorporation_description: Option<String>,
    pub filings: Filings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Filings {
    pub recent: FilingsList,
}

/// Recent filings as parallel arrays, newest first.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingsList {
    pub accession_number: Vec<String>,
    pub filing_date: Vec<String>,
    pub form: Vec<String>,
    pub primary_document: Vec<String>,
}

/// Company identity shared by every document of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub cik: String,
    #[serde(rename = "company_name")]
    pub name: String,
    #[serde(rename = "company_ticker")]
    pub ticker: String,
    pub exchange: String,
    pub fiscal_year_end: Option<String>,
    pub state_of_incorporation: Option<String>,
}

/// One row of the filing index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingIndexEntry {
    pub form_type: String,
    pub accession_number: String,
    pub filing_date: String,
    #[serde(rename = "filing_name")]
    pub primary_document: String,
}

impl FilingIndexEntry {
    pub fn accession(&self) -> AccessionNumber {
        AccessionNumber::new(&self.accession_number)
    }
}

/// A fetched filing: raw body plus company and filing metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingDocument {
    #[serde(flatten)]
    pub company: Company,
    #[serde(flatten)]
    pub filing: FilingIndexEntry,
    #[serde(skip)]
    pub text: String,
}

impl FilingDocument {
    /// Flat metadata map (cik, company_name, ..., form_type, accession_number, filing_date, filing_name).
    pub fn metadata(&self) -> serde_json::Value {
        // Both halves are plain strings, serialization cannot fail
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl CompanySubmission {
    /// Extracts the company-level metadata. The first listed ticker and exchange are used.
    pub fn company(&self) -> Result<Company, EdgarError> {
        let ticker = self
            .tickers
            .first()
            .ok_or_else(|| EdgarError::MalformedResponse(format!("no tickers listed for CIK {}", self.cik)))?;
        let exchange = self
            .exchanges
            .first()
            .ok_or_else(|| EdgarError::MalformedResponse(format!("no exchanges listed for CIK {}", self.cik)))?;

        Ok(Company {
            cik: format!("{:0>10}", self.cik),
            name: self.name.clone(),
            ticker: ticker.clone(),
            exchange: exchange.clone(),
            fiscal_year_end: self.fiscal_year_end.clone(),
            state_of_incorporation: self.state_of_incorporation_description.clone(),
        })
    }

    /// Zips the parallel arrays of recent filings, keeping EDGAR's order.
    pub fn recent_entries(&self) -> Result<Vec<FilingIndexEntry>, EdgarError> {
        let recent = &self.filings.recent;
        let n = recent.accession_number.len();
        if recent.form.len() != n || recent.filing_date.len() != n || recent.primary_document.len() != n {
            return Err(EdgarError::MalformedResponse(format!(
                "recent filings arrays differ in length (accessionNumber={}, form={}, filingDate={}, primaryDocument={})",
                n,
                recent.form.len(),
                recent.filing_date.len(),
                recent.primary_document.len()
            )));
        }

        Ok((0..n)
            .map(|i| FilingIndexEntry {
                form_type: recent.form[i].clone(),
                accession_number: recent.accession_number[i].clone(),
                filing_date: recent.filing_date[i].clone(),
                primary_document: recent.primary_document[i].clone(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission_json() -> &'static str {
        r#"{
            "cik": "1082324",
            "entityType": "operating",
            "name": "STRATASYS LTD.",
            "tickers": ["SSYS"],
            "exchanges": ["Nasdaq"],
            "fiscalYearEnd": "1231",
            "stateOfIncorporationDescription": "Israel",
            "filings": {
                "recent": {
                    "accessionNumber": ["0001178913-24-000123", "0001178913-24-000100"],
                    "filingDate": ["2024-03-05", "2024-02-20"],
                    "reportDate": ["", ""],
                    "form": ["6-K", "20-F"],
                    "primaryDocument": ["zk2430900.htm", "zk2430800.htm"]
                },
                "files": []
            }
        }"#
    }

    #[test]
    fn test_company_metadata_from_submission() {
        let submission: CompanySubmission = serde_json::from_str(submission_json()).unwrap();
        let company = submission.company().unwrap();
        assert_eq!(company.cik, "0001082324");
        assert_eq!(company.ticker, "SSYS");
        assert_eq!(company.exchange, "Nasdaq");
        assert_eq!(company.fiscal_year_end.as_deref(), Some("1231"));
        assert_eq!(company.state_of_incorporation.as_deref(), Some("Israel"));
    }

    #[test]
    fn test_recent_entries_keep_order() {
        let submission: CompanySubmission = serde_json::from_str(submission_json()).unwrap();
        let entries = submission.recent_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].form_type, "6-K");
        assert_eq!(entries[1].form_type, "20-F");
        assert_eq!(entries[1].accession().undashed(), "000117891324000100");
    }

    #[test]
    fn test_uneven_arrays_are_malformed() {
        let mut submission: CompanySubmission = serde_json::from_str(submission_json()).unwrap();
        submission.filings.recent.form.pop();
        assert!(matches!(
            submission.recent_entries(),
            Err(EdgarError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_missing_ticker_is_malformed() {
        let mut submission: CompanySubmission = serde_json::from_str(submission_json()).unwrap();
        submission.tickers.clear();
        assert!(matches!(submission.company(), Err(EdgarError::MalformedResponse(_))));
    }

    #[test]
    fn test_document_metadata_uses_flat_keys() {
        let submission: CompanySubmission = serde_json::from_str(submission_json()).unwrap();
        let document = FilingDocument {
            company: submission.company().unwrap(),
            filing: submission.recent_entries().unwrap().remove(0),
            text: "<html>body</html>".to_string(),
        };
        let metadata = document.metadata();
        assert_eq!(metadata["company_name"], "STRATASYS LTD.");
        assert_eq!(metadata["company_ticker"], "SSYS");
        assert_eq!(metadata["state_of_incorporation"], "Israel");
        assert_eq!(metadata["form_type"], "6-K");
        assert_eq!(metadata["filing_name"], "zk2430900.htm");
        assert_eq!(metadata["accession_number"], "0001178913-24-000123");
        assert!(metadata.get("text").is_none());
    }
}
