//! Output rendering.
//!
//! Whois records are written to standard output as a four-column table,
//! either bordered with a coloured header or as plain aligned text.

mod table;

pub use table::{render_table, TableStyle, HEADERS};
