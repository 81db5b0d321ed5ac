//! `SeaORM` Entity for the legacy purchase orders table (`adq004`).
//!
//! Stage columns: A1 release, A2 final approval, A3 cancellation, A4 level 4.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "adq004")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "Loc_cod")]
    pub loc_cod: i16,
    #[sea_orm(primary_key, auto_increment = false)]
    pub ocp_nro: i64,
    pub ocp_fec: Date,
    pub ocp_fee: Date,
    pub pro_rut: i32,
    pub ocp_net: i64,
    pub ocp_iva: i64,
    pub ocp_ila: i32,
    pub ocp_pdt: String,
    #[sea_orm(column_name = "ocp_A1_Ap")]
    pub a1_ap: i16,
    #[sea_orm(column_name = "ocp_A1_Usu")]
    pub a1_usu: String,
    #[sea_orm(column_name = "ocp_A1_Dt")]
    pub a1_dt: Date,
    #[sea_orm(column_name = "ocp_A1_Hr")]
    pub a1_hr: String,
    #[sea_orm(column_name = "ocp_A2_Ap")]
    pub a2_ap: i16,
    #[sea_orm(column_name = "ocp_A2_Usu")]
    pub a2_usu: String,
    #[sea_orm(column_name = "ocp_A2_Dt")]
    pub a2_dt: Date,
    #[sea_orm(column_name = "ocp_A2_Hr")]
    pub a2_hr: String,
    #[sea_orm(column_name = "ocp_A3_Anu")]
    pub a3_anu: i16,
    #[sea_orm(column_name = "ocp_A3_Usu")]
    pub a3_usu: String,
    #[sea_orm(column_name = "ocp_A3_Dt")]
    pub a3_dt: Date,
    #[sea_orm(column_name = "ocp_A3_Hr")]
    pub a3_hr: String,
    #[sea_orm(column_name = "ocp_A4_Ap")]
    pub a4_ap: i16,
    #[sea_orm(column_name = "ocp_A4_Usu")]
    pub a4_usu: String,
    #[sea_orm(column_name = "ocp_A4_Dt")]
    pub a4_dt: Date,
    #[sea_orm(column_name = "ocp_A4_Hr")]
    pub a4_hr: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::suppliers::Entity",
        from = "Column::ProRut",
        to = "super::suppliers::Column::ProRut"
    )]
    Suppliers,
}

impl Related<super::suppliers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Suppliers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
