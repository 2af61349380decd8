mod answerer;
pub mod scope;

pub use answerer::{Assistant, InquiryAnswer};
