//! Daily temperature records and their monthly aggregates.
//!
//! This crate handles turning a CSV of daily max/min temperatures into
//! typed records, then grouping them by `(year, month)` for the heatmap
//! charts.
//!
//! # Usage
//!
//! ```rust
//! use thm_data::{aggregate, loader};
//!
//! let records = loader::parse_records(
//!     "date,max_temperature,min_temperature\n2020-01-05,10,2\n2020-01-20,15,-1\n",
//! )
//! .unwrap();
//! let extremes = aggregate::monthly_extremes(&records);
//! assert_eq!(extremes[0].max, 15.0);
//! assert_eq!(extremes[0].min, -1.0);
//! ```

pub mod aggregate;
pub mod dates;
pub mod loader;
pub mod record;

pub use aggregate::{MonthlyDetail, MonthlyExtremes, TemperatureDomain};
pub use record::{DailyRecord, MonthKey};
