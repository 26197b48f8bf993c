//! Lazy paging over reader listings.
//!
//! A stream fetches one page at a time and stops after the last page or the
//! first error. Each call starts a fresh stream from the newest request.
//! Pages after the first are keyed on the last item seen, so requests that
//! leave the listing mid-stream never cause others to be skipped or repeated.

use std::future::Future;
use std::pin::Pin;

use futures::stream::{self, Stream, StreamExt};

use crate::domain::verification::{VerificationError, VerificationRequest};
use crate::ports::{ListOptions, Page, RepositoryError};

/// Boxed, sendable stream of requests.
pub type RequestStream =
    Pin<Box<dyn Stream<Item = Result<VerificationRequest, VerificationError>> + Send>>;

/// Streams every item `fetch` yields, `page_size` at a time.
pub fn paged<F, Fut>(page_size: u32, fetch: F) -> RequestStream
where
    F: Fn(ListOptions) -> Fut + Send + 'static,
    Fut: Future<Output = Result<Page<VerificationRequest>, RepositoryError>> + Send + 'static,
{
    let first = ListOptions::with_limit(page_size);

    let pages = stream::unfold(Some(first), move |next: Option<ListOptions>| {
        let pending = next.map(|options| (options, fetch(options)));
        async move {
            let (options, fetched) = pending?;
            match fetched.await {
                Ok(page) => {
                    let following = page
                        .items
                        .last()
                        .filter(|_| page.has_more)
                        .map(|last| options.after_item(last));
                    Some((Ok(page.items), following))
                }
                Err(e) => Some((Err(VerificationError::from(e)), None)),
            }
        }
    });

    pages
        .flat_map(|page| {
            let items: Vec<Result<VerificationRequest, VerificationError>> = match page {
                Ok(items) => items.into_iter().map(Ok).collect(),
                Err(e) => vec![Err(e)],
            };
            stream::iter(items)
        })
        .boxed()
}
