mod record;
mod validate;

pub use record::FileRecordServiceImpl;
