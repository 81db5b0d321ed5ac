//! `SeaORM` Entity for the legacy users table (`ctbm01`).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ctbm01")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "UserCd")]
    pub user_cd: String,
    #[sea_orm(column_name = "UserDs")]
    pub user_ds: String,
    #[sea_orm(column_name = "UserLlave")]
    pub user_llave: String,
    #[sea_orm(column_name = "UserCta")]
    pub user_cta: i16,
    #[sea_orm(column_name = "UserParam")]
    pub user_param: i16,
    #[sea_orm(column_name = "UserMaes")]
    pub user_maes: i16,
    #[sea_orm(column_name = "UserMovi")]
    pub user_movi: i16,
    #[sea_orm(column_name = "UserUti")]
    pub user_uti: i16,
    #[sea_orm(column_name = "UserCon")]
    pub user_con: i16,
    #[sea_orm(column_name = "UserPerf")]
    pub user_perf: i16,
    #[sea_orm(column_name = "UserFolDte")]
    pub user_fol_dte: String,
    #[sea_orm(column_name = "UserDte")]
    pub user_dte: i16,
    #[sea_orm(column_name = "UserChPass")]
    pub user_ch_pass: String,
    #[sea_orm(column_name = "UserNameMail")]
    pub user_name_mail: String,
    #[sea_orm(column_name = "UserMail")]
    pub user_mail: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
