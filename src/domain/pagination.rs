use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page window applied to a listing after clamping caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u32,
}

impl Pagination {
    /// Clamps raw paging input.
    ///
    /// Absent or non-positive `page` becomes 1, absent or non-positive
    /// `page_size` becomes [`DEFAULT_PAGE_SIZE`], and sizes above
    /// [`MAX_PAGE_SIZE`] are capped. `page` has no upper bound.
    pub fn normalize(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p > 0 => p.unsigned_abs(),
            _ => 1,
        };
        let page_size = match page_size {
            Some(s) if s > i64::from(MAX_PAGE_SIZE) => MAX_PAGE_SIZE,
            Some(s) if s > 0 => s as u32,
            _ => DEFAULT_PAGE_SIZE,
        };
        Self { page, page_size }
    }

    /// Number of rows skipped before the page starts, saturating at
    /// `u64::MAX` for pages no store could ever reach.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(u64::from(self.page_size))
    }

    pub fn limit(&self) -> usize {
        self.page_size as usize
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::normalize(None, None)
    }
}
