//! `SeaORM` Entity for the attachment table (`documentos_pdf`).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "documentos_pdf")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub tipo: i16,
    pub numero: i64,
    pub fecha_creacion: DateTimeWithTimeZone,
    #[sea_orm(column_type = "VarBinary(StringLen::None)")]
    pub pdf: Vec<u8>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
