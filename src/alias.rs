pub type Date = chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
