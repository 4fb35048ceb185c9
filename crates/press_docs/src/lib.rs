// Document generation: normalized text, PDF sheets, CSV tables, ZIP bundles

pub mod archive;
pub mod csv;
pub mod fonts;
pub mod normalize;
pub mod pdf;
pub mod table;

pub use table::{Table, TableError};
