//! Tests for the purchase order repository.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{
    DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult, QueryTrait, Value,
};

use super::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(date: NaiveDate, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    date.and_hms_opt(h, mi, s).unwrap()
}

fn order(nro: i64, a1: i16, pdt: &str) -> purchase_orders::Model {
    let fec = day(2025, 11, 28);
    purchase_orders::Model {
        loc_cod: 1,
        ocp_nro: nro,
        ocp_fec: fec,
        ocp_fee: day(2025, 12, 15),
        pro_rut: 96_000_111,
        ocp_net: 100_000,
        ocp_iva: 19_000,
        ocp_ila: 0,
        ocp_pdt: pdt.to_string(),
        a1_ap: a1,
        a1_usu: String::new(),
        a1_dt: fec,
        a1_hr: String::new(),
        a2_ap: 0,
        a2_usu: String::new(),
        a2_dt: fec,
        a2_hr: String::new(),
        a3_anu: 0,
        a3_usu: String::new(),
        a3_dt: fec,
        a3_hr: String::new(),
        a4_ap: 0,
        a4_usu: String::new(),
        a4_dt: fec,
        a4_hr: String::new(),
    }
}

fn supplier() -> suppliers::Model {
    suppliers::Model {
        pro_rut: 96_000_111,
        pro_nom: "Ferreteria Central".to_string(),
    }
}

/// `COUNT(*)` rows as the MySQL paginator decodes them (`i32`).
fn count_row(n: i32) -> [BTreeMap<&'static str, Value>; 1] {
    [BTreeMap::from([("num_items", Value::Int(Some(n)))])]
}

fn updated_exec() -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected: 1,
    }
}

/// The single UPDATE a toggle issued, with its values inlined.
fn logged_update(db: Arc<DatabaseConnection>) -> String {
    let log = Arc::into_inner(db).unwrap().into_transaction_log();
    let updates: Vec<String> = log
        .iter()
        .flat_map(|txn| txn.statements())
        .filter(|stmt| stmt.sql.starts_with("UPDATE"))
        .map(ToString::to_string)
        .collect();
    assert_eq!(updates.len(), 1);
    updates[0].clone()
}

#[test]
fn test_apply_release_stage_sets_all_four_columns() {
    let mut active: purchase_orders::ActiveModel = order(7, 0, "I").into();
    let state = ApprovalService::approve("COMPRAS", at(day(2025, 12, 1), 8, 30, 0)).unwrap();

    apply_release_stage(&mut active, state);

    assert_eq!(active.a1_ap, Set(1));
    assert_eq!(active.a1_usu, Set("COMPRAS".to_string()));
    assert_eq!(active.a1_dt, Set(day(2025, 12, 1)));
    assert_eq!(active.a1_hr, Set("08:30:00".to_string()));
}

#[test]
fn test_pending_condition_excludes_cancelled_and_blank() {
    let sql = purchase_orders::Entity::find()
        .filter(pending_condition())
        .build(DatabaseBackend::MySql)
        .to_string();

    assert!(sql.contains("`ocp_A1_Ap` = 0"));
    assert!(sql.contains("`ocp_pdt` NOT IN ('N', ' ')"));
}

#[test]
fn test_approved_condition_is_case_insensitive() {
    let range = DateRange::new(day(2025, 12, 1), day(2025, 12, 7)).unwrap();
    let sql = purchase_orders::Entity::find()
        .filter(approved_condition("Compras", range))
        .build(DatabaseBackend::MySql)
        .to_string();

    assert!(sql.contains("`ocp_A1_Ap` = 1"));
    assert!(sql.contains("LOWER(`adq004`.`ocp_A1_Usu`) = 'compras'"));
    assert!(sql.contains("BETWEEN '2025-12-01' AND '2025-12-07'"));
}

#[test]
fn test_pending_select_pages_with_stable_order() {
    let sql = pending_select(PageRequest::new(20, 10))
        .build(DatabaseBackend::MySql)
        .to_string();

    assert!(sql.contains("LEFT JOIN `proveea`"));
    assert!(sql.contains(
        "ORDER BY `adq004`.`ocp_fec` DESC, `adq004`.`Loc_cod` ASC, `adq004`.`ocp_nro` ASC"
    ));
    assert!(sql.ends_with("LIMIT 10 OFFSET 20"));
}

#[test]
fn test_approved_select_pages_with_stable_order() {
    let range = DateRange::single_day(day(2025, 12, 1));
    let sql = approved_select("COMPRAS", range, PageRequest::new(100, 25))
        .build(DatabaseBackend::MySql)
        .to_string();

    assert!(sql.contains(
        "ORDER BY `adq004`.`ocp_A1_Dt` DESC, `adq004`.`ocp_A1_Hr` DESC, \
         `adq004`.`Loc_cod` ASC, `adq004`.`ocp_nro` ASC"
    ));
    assert!(sql.ends_with("LIMIT 25 OFFSET 100"));
}

#[tokio::test]
async fn test_indicators() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([count_row(8)])
        .append_query_results([count_row(2)])
        .into_connection();
    let repo = PurchaseOrderRepository::new(Arc::new(db));

    let indicators = repo.indicators("COMPRAS", day(2025, 12, 1)).await.unwrap();
    assert_eq!(
        indicators,
        OrderIndicators {
            pendientes_count: 8,
            aprobados_hoy_count: 2
        }
    );
}

#[tokio::test]
async fn test_list_pending_joins_supplier() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![
            (order(21, 0, "I"), Some(supplier())),
            (order(20, 0, "T"), None),
        ]])
        .into_connection();
    let repo = PurchaseOrderRepository::new(Arc::new(db));

    let rows = repo.list_pending(PageRequest::default()).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0].1.as_ref().map(|s| s.pro_nom.as_str()),
        Some("Ferreteria Central")
    );
    assert!(rows[1].1.is_none());
}

#[tokio::test]
async fn test_approve_stamps_release_stage() {
    let now = at(day(2025, 12, 1), 8, 30, 0);
    let mut approved = order(7, 1, "I");
    approved.a1_usu = "COMPRAS".to_string();
    approved.a1_dt = now.date();
    approved.a1_hr = "08:30:00".to_string();

    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![order(7, 0, "I")]])
            .append_exec_results([updated_exec()])
            .append_query_results([vec![approved.clone()]])
            .into_connection(),
    );
    let repo = PurchaseOrderRepository::new(Arc::clone(&db));

    let result = repo
        .approve(DocumentKey::new(1, 7), "COMPRAS", now)
        .await
        .unwrap();
    assert_eq!(result, approved);
    drop(repo);

    let update = logged_update(db);
    assert!(update.starts_with("UPDATE `adq004` SET"));
    assert!(update.contains("`ocp_A1_Ap` = 1"));
    assert!(update.contains("`ocp_A1_Usu` = 'COMPRAS'"));
    assert!(update.contains("`ocp_A1_Dt` = '2025-12-01'"));
    assert!(update.contains("`ocp_A1_Hr` = '08:30:00'"));
    assert!(!update.contains("`ocp_A2_Ap` ="));
}

#[tokio::test]
async fn test_approve_missing_order_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([Vec::<purchase_orders::Model>::new()])
        .into_connection();
    let repo = PurchaseOrderRepository::new(Arc::new(db));

    let result = repo
        .approve(DocumentKey::new(1, 404), "COMPRAS", at(day(2025, 12, 1), 9, 0, 0))
        .await;
    assert!(matches!(
        result,
        Err(ApprovalError::NotFound {
            kind: DocumentKind::PurchaseOrder,
            ..
        })
    ));
}

#[tokio::test]
async fn test_unapprove_missing_order_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([Vec::<purchase_orders::Model>::new()])
        .into_connection();
    let repo = PurchaseOrderRepository::new(Arc::new(db));

    assert!(matches!(
        repo.unapprove(DocumentKey::new(1, 404)).await,
        Err(ApprovalError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_unapprove_uses_order_date() {
    let mut original = order(7, 1, "I");
    original.a1_usu = "COMPRAS".to_string();
    original.a1_dt = day(2025, 12, 1);
    original.a1_hr = "08:30:00".to_string();

    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![original]])
            .append_exec_results([updated_exec()])
            .append_query_results([vec![order(7, 0, "I")]])
            .into_connection(),
    );
    let repo = PurchaseOrderRepository::new(Arc::clone(&db));

    let reverted = repo.unapprove(DocumentKey::new(1, 7)).await.unwrap();
    assert_eq!(reverted.a1_ap, 0);
    drop(repo);

    // ocp_fec is 2025-11-28; the release date must not survive.
    let update = logged_update(db);
    assert!(update.contains("`ocp_A1_Ap` = 0"));
    assert!(update.contains("`ocp_A1_Usu` = ''"));
    assert!(update.contains("`ocp_A1_Dt` = '2025-11-28'"));
    assert!(update.contains("`ocp_A1_Hr` = ''"));
    assert!(!update.contains("2025-12-01"));
}
