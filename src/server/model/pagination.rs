//! Offset pagination with navigation links.

use crate::model::pagination::PageDto;

/// Default number of records returned by listing endpoints.
pub const DEFAULT_PAGE_LIMIT: u64 = 100;

/// One page of records together with the total size of the listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub count: u64,
    pub skip: u64,
    pub limit: u64,
}

/// Builds page URLs of the form `{server_host}{api_prefix}/{resource}/?skip=..&limit=..`.
#[derive(Debug, Clone)]
pub struct PageLinks {
    base: String,
}

impl PageLinks {
    /// # Arguments
    /// - `server_host` - Public origin, e.g. `http://localhost:8000`
    /// - `api_prefix` - Versioned API prefix, e.g. `/api/v1`
    /// - `resource` - Collection path segment, e.g. `species`
    pub fn new(server_host: &str, api_prefix: &str, resource: &str) -> Self {
        Self {
            base: format!(
                "{}{}/{}/",
                server_host.trim_end_matches('/'),
                api_prefix,
                resource
            ),
        }
    }

    pub fn page(&self, skip: i64, limit: i64) -> String {
        format!("{}?skip={}&limit={}", self.base, skip, limit)
    }
}

impl<T> Page<T> {
    pub fn map<U>(self, convert: impl FnMut(T) -> U) -> Page<U> {
        Page {
            results: self.results.into_iter().map(convert).collect(),
            count: self.count,
            skip: self.skip,
            limit: self.limit,
        }
    }

    /// Converts the page into the wire envelope.
    ///
    /// Link arithmetic is signed so that a limit larger than the collection
    /// still yields a `last_page` at skip 0:
    /// - `last_page` skips `max(0, count - limit)`
    /// - `previous_page` is absent when `skip - limit < 0`
    /// - `next_page` is absent when `skip >= count - limit`
    ///
    /// # Arguments
    /// - `links` - URL builder for the listed resource
    /// - `convert` - Conversion applied to every record
    pub fn into_dto<D>(self, links: &PageLinks, convert: impl FnMut(T) -> D) -> PageDto<D> {
        let count = self.count as i64;
        let skip = self.skip as i64;
        let limit = self.limit as i64;

        let previous_page = if skip - limit < 0 {
            None
        } else {
            Some(links.page(skip - limit, limit))
        };
        let next_page = if skip >= count - limit {
            None
        } else {
            Some(links.page(skip + limit, limit))
        };

        PageDto {
            count: self.count,
            first_page: links.page(0, limit),
            last_page: links.page((count - limit).max(0), limit),
            previous_page,
            next_page,
            results: self.results.into_iter().map(convert).collect(),
        }
    }
}
