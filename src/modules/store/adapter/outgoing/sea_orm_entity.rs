use sea_orm::entity::prelude::*;

use crate::modules::store::application::ports::outgoing::document_store::Document;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub collection: String,

    #[sea_orm(primary_key, auto_increment = false)]
    pub doc_id: String,

    pub data: Json,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_document(&self) -> Document {
        Document {
            id: self.doc_id.clone(),
            data: self.data.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
