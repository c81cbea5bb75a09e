use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Default page size for career lists.
pub const ITEMS_PER_PAGE: u32 = 20;

/// 1-based, inclusive item window understood by the upstream list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

impl Default for PageRange {
    fn default() -> Self {
        Self::for_page(1, ITEMS_PER_PAGE)
    }
}

impl PageRange {
    pub fn new(start: u32, end: u32) -> Result<Self, AppError> {
        if start == 0 {
            return Err(AppError::Validation("start must be at least 1".to_string()));
        }
        if end < start {
            return Err(AppError::Validation(format!(
                "end ({end}) must not be before start ({start})"
            )));
        }
        Ok(Self { start, end })
    }

    /// Window for the 1-based `page` of `size` items. Page 0 is treated as page 1.
    pub fn for_page(page: u32, size: u32) -> Self {
        let page = page.max(1);
        let size = size.max(1);
        Self {
            start: (page - 1) * size + 1,
            end: page * size,
        }
    }

    pub fn size(&self) -> u32 {
        self.end - self.start + 1
    }

    /// The window immediately after this one, same size.
    pub fn next(&self) -> Self {
        Self {
            start: self.end + 1,
            end: self.end + self.size(),
        }
    }

    pub fn query(&self) -> [(String, String); 2] {
        [
            ("start".to_string(), self.start.to_string()),
            ("end".to_string(), self.end.to_string()),
        ]
    }
}

/// Number of pages needed to show `total` items `page_size` at a time.
pub fn page_count(total: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// How many items the 1-based `page` holds. Zero for pages past the end.
#[cfg(test)]
pub fn items_on_page(total: u32, page: u32, page_size: u32) -> u32 {
    if page == 0 || page > page_count(total, page_size) {
        return 0;
    }
    let before = (page - 1) * page_size;
    (total - before).min(page_size)
}
