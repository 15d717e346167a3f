//! Paginated collection fetching
//!
//! The remote service pages every listing endpoint the same way: a request
//! carries an optional page token, a response carries a batch of items plus
//! an optional next token, and an absent or empty next token ends the
//! collection. [`fetch_all`] walks that loop and concatenates the pages in
//! server order.
//!
//! The loop is bounded by a [`PageLimit`]: a server that keeps handing out
//! tokens forever is cut off with an error instead of being trusted
//! indefinitely.

mod fetch;
mod types;

pub use fetch::fetch_all;
pub use types::{Page, PageLimit};
