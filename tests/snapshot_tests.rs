// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::models::{Goal, Transaction, TransactionKind};
use fintrack::snapshot;
use rust_decimal::Decimal;

fn write_doc(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn legacy_spanish_labels_normalize_to_canonical_kinds() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(
        &dir,
        "legacy.json",
        r#"{
            "transacciones": [
                {"id": "1", "fecha": "2025-08-02", "tipo": "ingreso", "monto": "2500", "categoria": "salario"},
                {"id": "2", "fecha": "2025-08-03", "tipo": "gasto", "monto": "150"},
                {"id": "3", "fecha": "2025-08-04", "tipo": "ahorro", "monto": "500"}
            ]
        }"#,
    );
    let snap = snapshot::load(&path).unwrap();
    assert_eq!(snap.transactions.len(), 3);
    assert_eq!(snap.transactions[0].kind, TransactionKind::Income);
    assert_eq!(snap.transactions[1].kind, TransactionKind::Expense);
    assert_eq!(snap.transactions[2].kind, TransactionKind::Saving);
    assert_eq!(snap.transactions[0].amount, Decimal::from(2500));
    assert_eq!(snap.transactions[0].category_id.as_deref(), Some("salario"));
    assert_eq!(snap.transactions[1].category_id, None);
}

#[test]
fn english_labels_parse_too() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(
        &dir,
        "english.json",
        r#"{
            "transacciones": [
                {"id": "1", "date": "2025-08-02", "kind": "income", "amount": "10"},
                {"id": "2", "date": "2025-08-03", "kind": "expense", "amount": "4"}
            ]
        }"#,
    );
    let snap = snapshot::load(&path).unwrap();
    assert_eq!(snap.transactions[0].kind, TransactionKind::Income);
    assert_eq!(snap.transactions[1].kind, TransactionKind::Expense);
}

#[test]
fn missing_amount_is_a_malformed_transaction() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(
        &dir,
        "bad.json",
        r#"{
            "transacciones": [
                {"id": "1", "fecha": "2025-08-02", "tipo": "gasto"}
            ]
        }"#,
    );
    let err = snapshot::load(&path).unwrap_err();
    assert!(err.to_string().contains("Malformed transaction"));
    assert!(err.to_string().contains("record #0"));
}

#[test]
fn unknown_kind_tag_is_a_malformed_transaction() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(
        &dir,
        "badkind.json",
        r#"{
            "transacciones": [
                {"id": "1", "fecha": "2025-08-02", "tipo": "transferencia", "monto": "10"}
            ]
        }"#,
    );
    let err = snapshot::load(&path).unwrap_err();
    assert!(err.to_string().contains("Malformed transaction"));
}

#[test]
fn empty_document_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(&dir, "empty.json", "{}");
    let snap = snapshot::load(&path).unwrap();
    assert!(snap.transactions.is_empty());
    assert!(snap.goals.is_empty());
    assert!(!snap.categories.is_empty());
    assert_eq!(snap.config.currency, "PEN");
    assert_eq!(snap.config.theme, "light");
}

#[test]
fn goals_parse_legacy_fields_and_report_progress() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(
        &dir,
        "goals.json",
        r#"{
            "metas": [
                {"nombre": "Vacaciones", "montoObjetivo": "2000", "montoActual": "500", "fechaObjetivo": "2025-12-31"},
                {"nombre": "Fondo", "montoObjetivo": "100", "montoActual": "250"}
            ]
        }"#,
    );
    let snap = snapshot::load(&path).unwrap();
    assert_eq!(snap.goals.len(), 2);
    let vacaciones = &snap.goals[0];
    assert_eq!(vacaciones.progress_percent(), Decimal::from(25));
    assert_eq!(
        vacaciones.target_date,
        Some(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap())
    );
    // Overfunded goals cap at 100
    assert_eq!(snap.goals[1].progress_percent(), Decimal::from(100));
}

#[test]
fn export_document_round_trips_with_required_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.json");

    let snap = snapshot::Snapshot {
        transactions: vec![Transaction {
            id: "t1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 2).unwrap(),
            kind: TransactionKind::Saving,
            category_id: Some("ahorro-general".to_string()),
            amount: Decimal::from(500),
            description: Some("Depósito mensual".to_string()),
        }],
        categories: fintrack::models::DEFAULT_CATEGORIES.clone(),
        goals: vec![Goal {
            name: "Vacaciones".to_string(),
            target_amount: Decimal::from(2000),
            current_amount: Decimal::from(500),
            target_date: None,
            color: "#4CAF50".to_string(),
        }],
        config: fintrack::models::Config::default(),
        exported_at: None,
    };
    snapshot::write(&path, &snap, "2025-08-30T12:00:00Z").unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(doc.get("transacciones").is_some());
    assert!(doc.get("metas").is_some());
    assert!(doc.get("configuracion").is_some());
    assert_eq!(
        doc.get("fechaExportacion").and_then(|v| v.as_str()),
        Some("2025-08-30T12:00:00Z")
    );

    let reloaded = snapshot::load(&path).unwrap();
    assert_eq!(reloaded.transactions, snap.transactions);
    assert_eq!(reloaded.goals, snap.goals);
    assert_eq!(reloaded.config, snap.config);
    assert_eq!(reloaded.exported_at.as_deref(), Some("2025-08-30T12:00:00Z"));
}
