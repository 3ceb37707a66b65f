//! Transformation stage of the roster import engine: date normalization and
//! template-ordered row building.

pub mod dates;
pub mod rows;

pub use dates::{BIRTH_DATE_KEY, BOOKED_AT_KEY, Orientation, format_output_value, is_date_column};
pub use rows::transform_rows;
