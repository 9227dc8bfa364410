use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "calculations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub calculation_id: String,
    pub expression: String,
    pub representative_result: f64,
    pub count: i64,
    pub last_updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
