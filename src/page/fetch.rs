//! The paginated collection fetcher

use super::types::{Page, PageLimit};
use crate::error::{Error, Result};
use std::future::Future;
use tracing::debug;

/// Fetch every page of a collection and concatenate the items in order.
///
/// `fetch` is invoked with `None` for the first page and with the previous
/// response's token afterwards, until a page comes back with no token.
/// Items are appended in server order; nothing is deduplicated or re-sorted.
///
/// A failure on any page aborts the whole operation and discards what was
/// accumulated; there is no partial result and no retry. Exceeding `limit`
/// aborts with [`Error::PageLimitExceeded`] or [`Error::ItemLimitExceeded`].
pub async fn fetch_all<T, F, Fut>(limit: PageLimit, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items: Vec<T> = Vec::new();
    let mut token: Option<String> = None;
    let mut pages: u32 = 0;

    loop {
        if let Some(max_pages) = limit.max_pages {
            if pages >= max_pages {
                return Err(Error::PageLimitExceeded { pages });
            }
        }

        let page = fetch(token.take()).await?;
        pages += 1;
        debug!(
            "Fetched page {} with {} items (last: {})",
            pages,
            page.len(),
            page.is_last()
        );

        let next = page.next_token().map(str::to_string);
        items.extend(page.items);

        if let Some(max_items) = limit.max_items {
            if items.len() > max_items {
                return Err(Error::ItemLimitExceeded { items: items.len() });
            }
        }

        match next {
            Some(next) => token = Some(next),
            None => break,
        }
    }

    Ok(items)
}
