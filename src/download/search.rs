//! Paginated search sweep.

use std::time::Duration;

use crate::api::{RawWallpaper, SearchRequest, WallhavenApi};
use crate::config::{page_delay, SearchConfig};
use crate::dedup::AcceptedSet;
use crate::error::Result;
use crate::manifest::RunMetadata;
use crate::media::{FilterConfig, WallpaperRecord};

/// Log pagination progress every this many pages.
const PAGE_LOG_INTERVAL: u32 = 10;

/// Pagination facts reported by the first page and the sweep itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSweep {
    pub total_reported: u64,
    pub per_page: u64,
    /// Last page the sweep targeted, after applying the page limit.
    pub last_page: u32,
    pub pages_fetched: u32,
}

/// Result of a full sweep: the sorted accepted set and its run summary.
#[derive(Debug, Clone)]
pub struct Collection {
    pub records: Vec<WallpaperRecord>,
    pub metadata: RunMetadata,
}

/// Walk every result page of a search, handing each page's items to `on_page`.
///
/// Page 1 is fetched first and its reported last page bounds the sweep; a
/// positive `page_limit` clamps it further. Pages are fetched strictly in
/// order with `delay` between requests.
pub async fn fetch_all<F>(
    api: &WallhavenApi,
    request: &SearchRequest,
    page_limit: u32,
    delay: Duration,
    mut on_page: F,
) -> Result<PageSweep>
where
    F: FnMut(u32, &[RawWallpaper]),
{
    let first = api.search_page(request, 1).await?;

    let mut last_page = first.meta.last_page();
    if page_limit > 0 {
        last_page = last_page.min(page_limit);
    }

    let mut sweep = PageSweep {
        total_reported: first.meta.total(),
        per_page: first.meta.per_page(),
        last_page,
        pages_fetched: 1,
    };

    tracing::info!(
        total = sweep.total_reported,
        per_page = sweep.per_page,
        pages = last_page,
        "Search for '{}' reported {} result(s)",
        request.query,
        sweep.total_reported
    );

    on_page(1, &first.data);
    log_page_progress(1, last_page);

    for page in 2..=last_page {
        if !delay.is_zero() {
            api.sleeper().sleep(delay).await;
        }

        let response = api.search_page(request, page).await?;
        sweep.pages_fetched += 1;
        on_page(page, &response.data);
        log_page_progress(page, last_page);
    }

    Ok(sweep)
}

fn log_page_progress(page: u32, last_page: u32) {
    if page % PAGE_LOG_INTERVAL == 0 || page == last_page {
        tracing::info!("Fetched page {}/{}", page, last_page);
    }
}

/// Sweep the search results and build the filtered, deduplicated accepted set.
pub async fn collect_wallpapers(
    api: &WallhavenApi,
    search: &SearchConfig,
    filters: FilterConfig,
) -> Result<Collection> {
    let request = SearchRequest::from(search);
    let delay = page_delay(search.page_delay_seconds)?;
    let mut accepted = AcceptedSet::new(filters);

    let sweep = fetch_all(api, &request, search.page_limit, delay, |_, items| {
        accepted.ingest_page(items)
    })
    .await?;

    let seen = accepted.seen();
    let records = accepted.into_sorted();

    tracing::info!(
        seen,
        unique = records.len(),
        pages = sweep.pages_fetched,
        "Accepted {} of {} wallpaper(s)",
        records.len(),
        seen
    );

    let metadata = RunMetadata::now(
        request.query,
        request.purity,
        filters,
        sweep.total_reported,
        seen,
        sweep.pages_fetched,
        records.len(),
    );

    Ok(Collection { records, metadata })
}
