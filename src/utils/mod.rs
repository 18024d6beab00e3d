pub mod format;

pub use format::{describe_feature, format_currency, format_number, shorten_address};
