use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use crate::{
    errors::{LedgerError, LedgerResult},
    ledger::Ledger,
};

use super::{LedgerStorage, LoadReport, RepairAction, LEDGER_FIELDS};

const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON persistence for a single ledger document.
#[derive(Debug, Clone)]
pub struct JsonLedgerStorage {
    path: PathBuf,
}

impl JsonLedgerStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStorage for JsonLedgerStorage {
    fn read(&self) -> LedgerResult<Option<LoadReport>> {
        if !self.path.exists() {
            return Ok(None);
        }
        load_ledger_from_path(&self.path).map(Some)
    }

    fn write(&self, ledger: &Ledger) -> LedgerResult<()> {
        save_ledger_to_path(ledger, &self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Saves a ledger to an arbitrary path on disk, staging through a temp file.
pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> LedgerResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    write_atomic(&tmp, &serialize_ledger(ledger)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Loads a ledger from `path`, repairing fields that are not list-shaped.
///
/// Unreadable files surface as [`LedgerError::Persistence`]; anything that is
/// not a JSON object of records surfaces as [`LedgerError::CorruptDocument`].
pub fn load_ledger_from_path(path: &Path) -> LedgerResult<LoadReport> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::InvalidData => {
            return Err(LedgerError::CorruptDocument(err.to_string()))
        }
        Err(err) => return Err(err.into()),
    };
    parse_document(&data)
}

pub(crate) fn parse_document(data: &str) -> LedgerResult<LoadReport> {
    let root: Value = serde_json::from_str(data)?;
    let Value::Object(mut fields) = root else {
        return Err(LedgerError::CorruptDocument(
            "document root is not an object".into(),
        ));
    };

    let mut repairs = Vec::new();
    let mut shaped = Map::new();
    for field in LEDGER_FIELDS {
        let value = match fields.remove(field) {
            None | Some(Value::Null) => {
                repairs.push(RepairAction::MissingField(field));
                Value::Array(Vec::new())
            }
            Some(list @ Value::Array(_)) => list,
            Some(record @ Value::Object(_)) => {
                repairs.push(RepairAction::WrappedSingleRecord(field));
                Value::Array(vec![record])
            }
            Some(_) => {
                repairs.push(RepairAction::ResetField(field));
                Value::Array(Vec::new())
            }
        };
        shaped.insert(field.to_string(), value);
    }

    let ledger: Ledger = serde_json::from_value(Value::Object(shaped))?;
    Ok(LoadReport { ledger, repairs })
}

fn serialize_ledger(ledger: &Ledger) -> LedgerResult<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    serde::Serialize::serialize(ledger, &mut serializer)
        .map_err(|err| LedgerError::Persistence(err.to_string()))?;
    String::from_utf8(buffer).map_err(|err| LedgerError::Persistence(err.to_string()))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> LedgerResult<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Budget, Goal, Transaction};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonLedgerStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonLedgerStorage::new(temp.path().join("finance_data.json"));
        (storage, temp)
    }

    #[test]
    fn missing_document_reads_as_none() {
        let (storage, _guard) = storage_with_temp_dir();
        assert!(storage.read().expect("read").is_none());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let date = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
        let mut ledger = Ledger::new();
        ledger.incomes.push(Transaction::new("Salary", 2500.0, date));
        ledger.expenses.push(Transaction::new("rent", 900.0, date));
        ledger.budgets.push(Budget::new("Rent", 1000.0));
        ledger.goals.push(Goal::new("Laptop", 1200.0));

        storage.write(&ledger).expect("save ledger");
        let report = storage.read().expect("load ledger").expect("document");
        assert_eq!(report.ledger, ledger);
        assert!(!report.was_repaired());
    }

    #[test]
    fn document_uses_four_space_indentation() {
        let (storage, _guard) = storage_with_temp_dir();
        storage.write(&Ledger::new()).expect("save ledger");
        let raw = fs::read_to_string(storage.path()).expect("read raw");
        assert!(raw.contains("\n    \"incomes\": []"));
        assert!(!storage.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn single_record_is_wrapped_and_scalars_reset() {
        let raw = r#"{
            "incomes": [],
            "expenses": 7,
            "budgets": {"category": "Food", "amount": 50.0},
            "goals": {"name": "Trip", "amount": 300.0}
        }"#;
        let report = parse_document(raw).expect("parse");
        assert_eq!(report.ledger.goals, vec![Goal::new("Trip", 300.0)]);
        assert_eq!(report.ledger.budgets.len(), 1);
        assert!(report.ledger.expenses.is_empty());
        assert_eq!(
            report.repairs,
            vec![
                RepairAction::ResetField("expenses"),
                RepairAction::WrappedSingleRecord("budgets"),
                RepairAction::WrappedSingleRecord("goals"),
            ]
        );
    }

    #[test]
    fn missing_fields_become_empty_lists() {
        let report = parse_document(r#"{"goals": []}"#).expect("parse");
        assert!(report.ledger.is_empty());
        assert_eq!(report.repairs.len(), 3);
    }

    #[test]
    fn malformed_records_are_corrupt() {
        let err = parse_document(r#"{"incomes": [{"category": "x"}]}"#).unwrap_err();
        assert!(matches!(err, LedgerError::CorruptDocument(_)));

        let err = parse_document("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, LedgerError::CorruptDocument(_)));

        let err = parse_document("{ not json").unwrap_err();
        assert!(matches!(err, LedgerError::CorruptDocument(_)));
    }
}
