//! Page categories for page standardization.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a002_brand--list"`)
//!   - `data-page-category` with one of the [`PageCategory`] values
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a002_brand/` directory.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageCategory {
    /// List of records: table with search/pagination.
    List,
    /// Create / edit form for a single record.
    Detail,
    /// Role home page with summary widgets.
    Dashboard,
    /// Login, error and other system pages.
    System,
}

impl PageCategory {
    pub fn code(&self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Detail => "detail",
            PageCategory::Dashboard => "dashboard",
            PageCategory::System => "system",
        }
    }

    /// BEM class of the page root
    pub fn css_class(&self) -> &'static str {
        match self {
            PageCategory::List => "page",
            PageCategory::Detail => "page page--detail",
            PageCategory::Dashboard => "page page--dashboard",
            PageCategory::System => "page page--system",
        }
    }
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a002_brand--list"));
        assert!(!is_valid_page_id("a002_brand"));
        assert!(!is_valid_page_id("--list"));
    }
}
