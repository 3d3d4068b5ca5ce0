use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Registry record of one generated code
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "code_records")]
pub struct Model {
    /// Internal identifier
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Human-readable code
    #[sea_orm(unique)]
    pub code: String,

    pub part_type: String,

    pub manufacture_date: Date,

    pub lot_no: String,

    pub serial_no: i64,

    pub manufacturer_name: String,

    pub warranty_years: i32,

    pub expiry_date: Date,

    /// Canonical lookup URL
    pub url: String,

    /// Batch the record was generated in
    pub batch_id: String,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
