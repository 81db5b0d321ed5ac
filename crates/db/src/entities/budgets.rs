//! `SeaORM` Entity for the legacy budgets table (`cot013`).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cot013")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "Loc_cod")]
    pub loc_cod: i16,
    #[sea_orm(primary_key, auto_increment = false)]
    pub pre_nro: i64,
    pub pre_est: String,
    pub pre_gl1: String,
    #[sea_orm(column_name = "pre_fecAdj")]
    pub pre_fec_adj: Date,
    pub pre_fec: Date,
    pub pre_rut: i64,
    #[sea_orm(column_name = "pre_VenCod")]
    pub pre_ven_cod: i16,
    #[sea_orm(column_name = "Pre_Neto")]
    pub pre_neto: i64,
    #[sea_orm(column_name = "pre_trnFec")]
    pub pre_trn_fec: Date,
    pub pre_trnusu: String,
    #[sea_orm(column_name = "Pre_vbLib")]
    pub vb_lib: i16,
    #[sea_orm(column_name = "Pre_VbLibUsu")]
    pub vb_lib_usu: String,
    #[sea_orm(column_name = "Pre_VBLibDt")]
    pub vb_lib_dt: Date,
    #[sea_orm(column_name = "Pre_VbLibTime")]
    pub vb_lib_time: String,
    #[sea_orm(column_name = "pre_vbgg")]
    pub vbgg: i16,
    #[sea_orm(column_name = "pre_vbggUsu")]
    pub vbgg_usu: String,
    #[sea_orm(column_name = "pre_vbggDt")]
    pub vbgg_dt: Date,
    #[sea_orm(column_name = "pre_vbggTime")]
    pub vbgg_time: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
