pub mod table;
pub mod value;

// re-export for cleaner imports
pub use self::table::{Column, Table};
pub use self::value::Value;
