pub mod quote;
pub mod record;

pub use quote::Quotation;
pub use record::DateRecord;
