//! Load and save debt lists (CSV import, JSON debt books)

use super::validation::validate_debt;
use super::{Debt, DebtBook, DebtKind};
use crate::error::LoadError;
use crate::money::Cents;
use csv::Reader;
use log::info;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Default location of the sample debt list
pub const DEFAULT_DEBTS_PATH: &str = "data/debts.csv";

/// Raw CSV row matching the debt import columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: String,
    name: String,
    #[serde(default)]
    kind: String,
    balance: f64,
    #[serde(rename = "interestRate")]
    interest_rate: f64,
    #[serde(rename = "minimumPayment")]
    minimum_payment: f64,
    #[serde(default)]
    color: Option<String>,
}

impl CsvRow {
    fn to_debt(self) -> Result<Debt, String> {
        let kind = if self.kind.trim().is_empty() {
            DebtKind::Other
        } else {
            self.kind.parse()?
        };

        if self.id.trim().is_empty() {
            return Err("id is required".to_string());
        }

        let balance = Cents::try_from_dollars(self.balance)
            .ok_or_else(|| format!("balance is out of range: {}", self.balance))?;
        let minimum_payment = Cents::try_from_dollars(self.minimum_payment)
            .ok_or_else(|| format!("minimum payment is out of range: {}", self.minimum_payment))?;

        Ok(Debt {
            id: self.id.trim().to_string(),
            name: self.name.trim().to_string(),
            kind,
            balance,
            interest_rate: self.interest_rate,
            minimum_payment,
            color: self.color.filter(|c| !c.trim().is_empty()),
        })
    }
}

/// Check every debt against the form rules and reject duplicate ids
fn check_debts(debts: &[Debt]) -> Result<(), LoadError> {
    let mut seen = HashSet::new();

    for (index, debt) in debts.iter().enumerate() {
        let errors = validate_debt(debt);
        if !errors.is_empty() {
            let message = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(LoadError::InvalidRecord {
                row: index + 1,
                message,
            });
        }

        if !seen.insert(debt.id.as_str()) {
            return Err(LoadError::DuplicateId(debt.id.clone()));
        }
    }

    Ok(())
}

/// Load debts from any CSV reader
pub fn load_debts_from_reader<R: Read>(reader: R) -> Result<Vec<Debt>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut debts = Vec::new();

    for (index, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        let debt = row
            .to_debt()
            .map_err(|message| LoadError::InvalidRecord {
                row: index + 1,
                message,
            })?;
        debts.push(debt);
    }

    check_debts(&debts)?;
    Ok(debts)
}

/// Load debts from a CSV file
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>, LoadError> {
    let file = File::open(path.as_ref())?;
    let debts = load_debts_from_reader(BufReader::new(file))?;
    info!("Loaded {} debts from {}", debts.len(), path.as_ref().display());
    Ok(debts)
}

/// Load debts from the default sample location
pub fn load_default_debts() -> Result<Vec<Debt>, LoadError> {
    load_debts(DEFAULT_DEBTS_PATH)
}

/// Load a JSON debt book from any reader
pub fn load_book_from_reader<R: Read>(reader: R) -> Result<DebtBook, LoadError> {
    let book: DebtBook = serde_json::from_reader(reader)?;
    check_debts(&book.list)?;
    Ok(book)
}

/// Load a JSON debt book from a file
pub fn load_book<P: AsRef<Path>>(path: P) -> Result<DebtBook, LoadError> {
    let file = File::open(path.as_ref())?;
    let book = load_book_from_reader(BufReader::new(file))?;
    info!(
        "Loaded {} debts ({} strategy, {} extra) from {}",
        book.list.len(),
        book.strategy,
        book.extra_payment,
        path.as_ref().display()
    );
    Ok(book)
}

/// Write a debt book as pretty JSON
pub fn write_book<W: Write>(writer: W, book: &DebtBook) -> Result<(), LoadError> {
    serde_json::to_writer_pretty(writer, book)?;
    Ok(())
}

/// Save a debt book to a JSON file
pub fn save_book<P: AsRef<Path>>(path: P, book: &DebtBook) -> Result<(), LoadError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_book(&mut writer, book)?;
    writer.flush()?;
    Ok(())
}

/// Load either a CSV debt list or a JSON debt book, chosen by extension
///
/// CSV files carry no plan settings, so the book gets the defaults.
pub fn load_debt_file<P: AsRef<Path>>(path: P) -> Result<DebtBook, LoadError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => Ok(DebtBook {
            list: load_debts(path)?,
            ..Default::default()
        }),
        "json" => load_book(path),
        _ => Err(LoadError::UnknownFormat(path.display().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debt::Strategy;

    #[test]
    fn test_load_default_debts() {
        let debts = load_default_debts().expect("Failed to load debts");
        assert_eq!(debts.len(), 4);

        let visa = &debts[0];
        assert_eq!(visa.id, "visa");
        assert_eq!(visa.kind, DebtKind::CreditCard);
        assert_eq!(visa.balance, Cents::from_dollars(5000.0));
        assert_eq!(visa.color.as_deref(), Some("#ef4444"));

        let family = &debts[3];
        assert_eq!(family.interest_rate, 0.0);
        assert_eq!(family.color, None);
    }

    #[test]
    fn test_invalid_record_names_row() {
        let csv = "id,name,kind,balance,interestRate,minimumPayment\n\
                   a,Visa,Credit Card,1000,20,50\n\
                   b,Car,Auto Loan,-5,6,250\n";

        let err = load_debts_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            LoadError::InvalidRecord { row, message } => {
                assert_eq!(row, 2);
                assert!(message.contains("balance"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_out_of_range_amount_rejected() {
        let csv = "id,name,kind,balance,interestRate,minimumPayment\n\
                   a,Visa,Credit Card,1e300,20,50\n";

        match load_debts_from_reader(csv.as_bytes()).unwrap_err() {
            LoadError::InvalidRecord { row, message } => {
                assert_eq!(row, 1);
                assert!(message.contains("balance is out of range"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let csv = "id,name,kind,balance,interestRate,minimumPayment\n\
                   a,Visa,Payday,1000,20,50\n";

        assert!(matches!(
            load_debts_from_reader(csv.as_bytes()),
            Err(LoadError::InvalidRecord { row: 1, .. })
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let csv = "id,name,kind,balance,interestRate,minimumPayment\n\
                   a,Visa,Credit Card,1000,20,50\n\
                   a,Car,Auto Loan,8000,6,250\n";

        assert!(matches!(
            load_debts_from_reader(csv.as_bytes()),
            Err(LoadError::DuplicateId(id)) if id == "a"
        ));
    }

    #[test]
    fn test_book_json_export_import() {
        let book = DebtBook {
            list: vec![Debt::new("a", "Visa", 1000.0, 20.0, 50.0).with_kind(DebtKind::CreditCard)],
            strategy: Strategy::Snowball,
            extra_payment: Cents::from_dollars(125.0),
        };

        let mut buffer = Vec::new();
        write_book(&mut buffer, &book).unwrap();
        let text = String::from_utf8(buffer.clone()).unwrap();
        assert!(text.contains("\"extraPayment\": 125.0"));
        assert!(text.contains("\"strategy\": \"snowball\""));

        let loaded = load_book_from_reader(buffer.as_slice()).unwrap();
        assert_eq!(loaded, book);
    }

    #[test]
    fn test_book_defaults_plan_settings() {
        let json = r#"{ "list": [] }"#;
        let book = load_book_from_reader(json.as_bytes()).unwrap();
        assert_eq!(book.strategy, Strategy::Avalanche);
        assert_eq!(book.extra_payment, Cents::ZERO);
    }

    #[test]
    fn test_unknown_extension() {
        assert!(matches!(
            load_debt_file("debts.xlsx"),
            Err(LoadError::UnknownFormat(_))
        ));
    }
}
