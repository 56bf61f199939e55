mod record;
mod upload;
mod usage;

#[rustfmt::skip]
pub use {
    record::*,
    upload::*,
    usage::*,
};
