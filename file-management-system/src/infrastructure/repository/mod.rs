mod record;

pub use record::OrmRepo;
