use async_trait::async_trait;
use chrono::NaiveDate;
use domain_records::{
    model::{entity::FileRecord, vo::NewFileRecord},
    repository::FileRecordRepo,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder,
};

use crate::database::{
    model::{file_record, FileRecordColumn, FileRecordEntity},
    Database,
};

/// Metadata store over the relational `files` table.
pub struct OrmRepo {
    db: Database,
}

impl OrmRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FileRecordRepo for OrmRepo {
    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<FileRecord>> {
        let row = FileRecordEntity::find_by_id(id).one(self.db.get_connection()).await?;
        Ok(row.map(Into::into))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<FileRecord>> {
        let rows = FileRecordEntity::find()
            .order_by_asc(FileRecordColumn::Id)
            .all(self.db.get_connection())
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_by_details(
        &self,
        filename: &str,
        uploader: &str,
        category: &str,
        date: NaiveDate,
    ) -> anyhow::Result<Option<FileRecord>> {
        let row = FileRecordEntity::find()
            .filter(
                Condition::all()
                    .add(FileRecordColumn::Filename.eq(filename))
                    .add(FileRecordColumn::Uploader.eq(uploader))
                    .add(FileRecordColumn::Category.eq(category))
                    .add(FileRecordColumn::Date.eq(date)),
            )
            .one(self.db.get_connection())
            .await?;
        Ok(row.map(Into::into))
    }

    async fn insert(&self, new: &NewFileRecord) -> anyhow::Result<FileRecord> {
        let model = file_record::ActiveModel::from(new).insert(self.db.get_connection()).await?;
        Ok(model.into())
    }

    async fn update(&self, record: &FileRecord) -> anyhow::Result<FileRecord> {
        let model = file_record::update_set(record).update(self.db.get_connection()).await?;
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()> {
        FileRecordEntity::delete_by_id(id).exec(self.db.get_connection()).await?;
        Ok(())
    }
}
