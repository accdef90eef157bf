pub mod input;
pub mod priced_result;
pub mod saved_quote;
