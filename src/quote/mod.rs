pub mod history;

pub use history::{ReferenceHistory, HISTORY_CAP};
