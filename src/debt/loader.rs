//! Load debt records from CSV for the CLI
//!
//! The engines themselves take in-memory records; this is the input surface
//! the command-line driver uses in place of the application's storage layer.

use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::Reader;
use std::path::Path;

use super::data::{Debt, DebtDirection};

/// Raw CSV row; headers match the export format of the tracker
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Balance")]
    balance: f64,
    #[serde(rename = "AnnualRatePct")]
    annual_rate_pct: Option<f64>,
    #[serde(rename = "MinimumPayment")]
    minimum_payment: f64,
    #[serde(rename = "DueDate")]
    due_date: Option<String>,
    #[serde(rename = "Direction")]
    direction: String,
}

impl CsvRow {
    fn into_debt(self) -> anyhow::Result<Debt> {
        let direction = match self.direction.as_str() {
            "outgoing" => DebtDirection::Outgoing,
            "incoming" => DebtDirection::Incoming,
            other => bail!("unknown Direction: {other}"),
        };

        let due_date = match self.due_date.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .with_context(|| format!("bad DueDate for debt '{}'", self.name))?,
            ),
        };

        Ok(Debt {
            id: self.id,
            name: self.name,
            current_balance: self.balance,
            annual_rate_pct: self.annual_rate_pct,
            minimum_payment: self.minimum_payment,
            due_date,
            direction,
        })
    }
}

/// Load all debt records from a CSV file
pub fn load_debts<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Debt>> {
    let path = path.as_ref();
    let mut reader =
        Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    collect_rows(&mut reader)
}

/// Load debt records from any reader (string buffer, pipe, ...)
pub fn load_debts_from_reader<R: std::io::Read>(reader: R) -> anyhow::Result<Vec<Debt>> {
    let mut csv_reader = Reader::from_reader(reader);
    collect_rows(&mut csv_reader)
}

fn collect_rows<R: std::io::Read>(reader: &mut Reader<R>) -> anyhow::Result<Vec<Debt>> {
    let mut debts = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result.context("reading debt CSV row")?;
        debts.push(row.into_debt()?);
    }
    Ok(debts)
}
