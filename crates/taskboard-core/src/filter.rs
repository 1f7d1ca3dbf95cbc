//! Filter, sort, and pagination types for task listings.
//!
//! `TaskFilter` is the typed form of an inbound filter request. The sort
//! field whitelist lives here: only `title` and `deadline` are recognized,
//! every other value (including the default `createdAt`) sorts by creation
//! time. Field names are matched case-insensitively; unknown values never
//! error, they fall back.

use crate::enums::TaskStatus;

/// Default page size when the request does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

// ---------------------------------------------------------------------------
// SortField
// ---------------------------------------------------------------------------

/// Whitelisted sort fields for task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Title,
    Deadline,
    #[default]
    CreatedAt,
}

impl SortField {
    /// Parse a raw field name, case-insensitively. Anything unrecognized
    /// falls back to sorting by creation time.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("title") {
            Self::Title
        } else if raw.eq_ignore_ascii_case("deadline") {
            Self::Deadline
        } else {
            Self::CreatedAt
        }
    }

    /// Column name in the `tasks` table.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Deadline => "deadline",
            Self::CreatedAt => "created_at",
        }
    }
}

// ---------------------------------------------------------------------------
// SortDirection
// ---------------------------------------------------------------------------

/// Sort direction. `asc` ascending; anything else descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    /// SQL keyword for an ORDER BY clause.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// TaskFilter
// ---------------------------------------------------------------------------

/// Typed filter for a task listing query.
///
/// `status` and `user_id` are optional constraints; absence means no
/// constraint. `page` is 1-based.
#[derive(Debug, Clone)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub user_id: Option<String>,
    pub sort_by: SortField,
    pub direction: SortDirection,
    pub page: u32,
    pub page_size: u32,
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self {
            status: None,
            user_id: None,
            sort_by: SortField::default(),
            direction: SortDirection::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TaskFilter {
    /// Number of rows to skip: `(page - 1) * page_size`, saturating so that
    /// a (nominally invalid) `page = 0` behaves like page 1.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page.saturating_sub(1) as u64) * (self.page_size as u64)
    }

    /// Number of rows in the window.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.page_size as u64
    }
}
