#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use serde_json::Value;
use tower::ServiceExt;

use aprobaciones_api::{AppState, create_router};
use aprobaciones_core::approval::AuditClock;
use aprobaciones_db::entities::{budgets, documentos_pdf, purchase_orders, suppliers, users};
use aprobaciones_shared::{JwtService, TokenConfig};

pub const JWT_SECRET: &str = "test-secret-key-for-endpoint-tests";
pub const API_KEY: &str = "k-attachments";

pub fn jwt_service() -> JwtService {
    JwtService::new(TokenConfig {
        secret: JWT_SECRET.to_string(),
        ttl: chrono::Duration::minutes(30),
    })
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn fixed_now() -> NaiveDateTime {
    day(2025, 12, 1).and_hms_opt(10, 15, 30).unwrap()
}

pub fn legacy() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::MySql)
}

pub fn attachments() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

pub fn app(legacy: DatabaseConnection, attachments: DatabaseConnection) -> Router {
    let state = AppState::new(
        legacy,
        attachments,
        jwt_service(),
        Some(API_KEY.to_string()),
        AuditClock::fixed(fixed_now()),
    );
    create_router(state)
}

pub fn bearer(user_code: &str) -> String {
    let token = jwt_service().generate_access_token(user_code).unwrap();
    format!("Bearer {token}")
}

pub fn user(code: &str, secret: &str) -> users::Model {
    users::Model {
        user_cd: format!("{code:<10}"),
        user_ds: "Gerente General          ".to_string(),
        user_llave: format!("{secret:<20}"),
        user_cta: 1,
        user_param: 1,
        user_maes: 1,
        user_movi: 1,
        user_uti: 1,
        user_con: 1,
        user_perf: 2,
        user_fol_dte: String::new(),
        user_dte: 0,
        user_ch_pass: "N".to_string(),
        user_name_mail: "Gerente".to_string(),
        user_mail: "gerente@example.com".to_string(),
    }
}

pub fn budget(nro: i64, vb_lib: i16, vbgg: i16) -> budgets::Model {
    budgets::Model {
        loc_cod: 1,
        pre_nro: nro,
        pre_est: "A".to_string(),
        pre_gl1: "Obra gruesa".to_string(),
        pre_fec_adj: day(2025, 11, 25),
        pre_fec: day(2025, 11, 20),
        pre_rut: 76_543_210,
        pre_ven_cod: 4,
        pre_neto: 1_500_000,
        pre_trn_fec: day(2025, 11, 20),
        pre_trnusu: "VEND1".to_string(),
        vb_lib,
        vb_lib_usu: "LIB".to_string(),
        vb_lib_dt: day(2025, 11, 21),
        vb_lib_time: "09:00:00".to_string(),
        vbgg,
        vbgg_usu: String::new(),
        vbgg_dt: day(2025, 11, 20),
        vbgg_time: String::new(),
    }
}

pub fn order(nro: i64, a1_ap: i16) -> purchase_orders::Model {
    purchase_orders::Model {
        loc_cod: 1,
        ocp_nro: nro,
        ocp_fec: day(2025, 11, 28),
        ocp_fee: day(2025, 12, 5),
        pro_rut: 96_000_111,
        ocp_net: 100_000,
        ocp_iva: 19_000,
        ocp_ila: 500,
        ocp_pdt: "I".to_string(),
        a1_ap,
        a1_usu: String::new(),
        a1_dt: day(2025, 11, 28),
        a1_hr: String::new(),
        a2_ap: 0,
        a2_usu: String::new(),
        a2_dt: day(2025, 11, 28),
        a2_hr: String::new(),
        a3_anu: 0,
        a3_usu: String::new(),
        a3_dt: day(2025, 11, 28),
        a3_hr: String::new(),
        a4_ap: 0,
        a4_usu: String::new(),
        a4_dt: day(2025, 11, 28),
        a4_hr: String::new(),
    }
}

pub fn supplier(rut: i32, name: &str) -> suppliers::Model {
    suppliers::Model {
        pro_rut: rut,
        pro_nom: name.to_string(),
    }
}

pub fn attachment(id: i64, tipo: i16, numero: i64, pdf: &[u8]) -> documentos_pdf::Model {
    documentos_pdf::Model {
        id,
        tipo,
        numero,
        fecha_creacion: Utc::now().into(),
        pdf: pdf.to_vec(),
    }
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, request).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn get(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, authorization: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}
