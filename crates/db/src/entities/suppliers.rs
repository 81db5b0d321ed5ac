//! `SeaORM` Entity for the legacy suppliers table (`proveea`).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "proveea")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub pro_rut: i32,
    pub pro_nom: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::purchase_orders::Entity")]
    PurchaseOrders,
}

impl Related<super::purchase_orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaseOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
