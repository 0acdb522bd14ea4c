//! 作业交付物实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "deliverables")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub due_date: Date,
    pub delivered: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_deliverable(self) -> crate::models::deliverables::entities::Deliverable {
        crate::models::deliverables::entities::Deliverable {
            id: self.id,
            name: self.name,
            due_date: self.due_date,
            delivered: self.delivered,
        }
    }
}
