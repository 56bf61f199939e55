//! File record rows: one row per file tracked on the storage server.
use chrono::Utc;
use domain_records::model::{entity::FileRecord, vo::NewFileRecord};
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{NotSet, Set, Unchanged},
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "files")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Client-supplied name; unique only together with the other details.
    pub filename: String,
    pub uploader: String,
    pub category: String,
    pub date: Date,
    pub created_time: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for FileRecord {
    fn from(val: Model) -> Self {
        FileRecord {
            id: val.id,
            filename: val.filename,
            uploader: val.uploader,
            category: val.category,
            date: val.date,
        }
    }
}

impl From<&NewFileRecord> for ActiveModel {
    fn from(new: &NewFileRecord) -> Self {
        Self {
            id: NotSet,
            filename: Set(new.filename.to_owned()),
            uploader: Set(new.uploader.to_owned()),
            category: Set(new.category.to_owned()),
            date: Set(new.date),
            created_time: Set(Utc::now()),
        }
    }
}

/// Active model rewriting every client-editable column of an existing row.
pub fn update_set(record: &FileRecord) -> ActiveModel {
    ActiveModel {
        id: Unchanged(record.id),
        filename: Set(record.filename.to_owned()),
        uploader: Set(record.uploader.to_owned()),
        category: Set(record.category.to_owned()),
        date: Set(record.date),
        created_time: NotSet,
    }
}
