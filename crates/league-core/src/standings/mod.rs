//! League standings.
//!
//! - `aggregate` - fold match results into a points table
//! - `Standings` - team name to points, with the ranked view
//! - `render_report` - the plain-text standings report

mod aggregate;
mod report;
mod table;

pub use aggregate::*;
pub use report::*;
pub use table::*;
