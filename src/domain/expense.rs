//! Domain types for a single logged expense and its owner record.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The seven fixed buckets an expense can be classified into.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Comida,
    Entretenimiento,
    Transporte,
    Compras,
    Salud,
    #[serde(rename = "Educación")]
    Educacion,
    #[default]
    Otros,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Comida => "Comida",
            Category::Entretenimiento => "Entretenimiento",
            Category::Transporte => "Transporte",
            Category::Compras => "Compras",
            Category::Salud => "Salud",
            Category::Educacion => "Educación",
            Category::Otros => "Otros",
        };
        f.write_str(label)
    }
}

/// A single logged expense.
///
/// Amounts are caller-supplied and unvalidated; negative and zero values are
/// legitimate (refunds, corrections). `categoria_general` was added after the
/// first deployments, so records written by the old schema omit it and fall
/// back to [`Category::Otros`] on read. It is assigned once at registration
/// and never recomputed, even if the keyword table changes later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "categoria")]
    pub label: String,
    #[serde(rename = "categoria_general", default)]
    pub general_category: Category,
    #[serde(rename = "fecha", with = "fecha_format")]
    pub timestamp: NaiveDateTime,
}

/// Per-user slice of the ledger: last-seen display name plus the append-only
/// expense log in registration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    #[serde(rename = "nombre")]
    pub display_name: String,
    #[serde(rename = "gastos", default)]
    pub expenses: Vec<Expense>,
}

impl UserRecord {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            expenses: Vec::new(),
        }
    }
}

/// Wire format for `fecha`: local wall-clock time at second precision.
pub mod fecha_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(18, 30, 5)
            .unwrap()
    }

    #[test]
    fn expense_serializes_with_wire_names() {
        let expense = Expense {
            amount: 150.0,
            label: "Restaurante".into(),
            general_category: Category::Comida,
            timestamp: sample_timestamp(),
        };
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["monto"], 150.0);
        assert_eq!(json["categoria"], "Restaurante");
        assert_eq!(json["categoria_general"], "Comida");
        assert_eq!(json["fecha"], "2024-03-15 18:30:05");
    }

    #[test]
    fn legacy_record_without_general_category_reads_as_otros() {
        let json = r#"{"monto": 99.5, "categoria": "Varios", "fecha": "2023-01-02 10:00:00"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.general_category, Category::Otros);
    }

    #[test]
    fn accented_category_round_trips() {
        let json = serde_json::to_string(&Category::Educacion).unwrap();
        assert_eq!(json, "\"Educación\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Educacion);
    }

    #[test]
    fn fecha_rejects_other_formats() {
        let json = r#"{"monto": 1.0, "categoria": "X", "fecha": "2023-01-02T10:00:00Z"}"#;
        assert!(serde_json::from_str::<Expense>(json).is_err());
    }
}
