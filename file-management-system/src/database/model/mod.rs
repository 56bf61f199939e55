pub mod file_record;

#[rustfmt::skip]
pub use file_record::{
    ActiveModel as FileRecordActiveModel,
    Column as FileRecordColumn,
    Entity as FileRecordEntity,
    Model as FileRecordModel,
};
