//! PageFrame: standard root wrapper for every page rendered in the content area.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`: `"{entity}--{category}"`, e.g. `"a001_kitchen_center--list"`
//!   - `data-page-category`: [`PageCategory::code`]
//!
//! Usage:
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a002_brand--list" category=PageCategory::List>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::{is_valid_page_id, PageCategory};
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    category: PageCategory,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("page id {:?} does not follow {{entity}}--{{category}}", page_id);
    }
    let full_class = if class.is_empty() {
        category.css_class().to_string()
    } else {
        format!("{} {}", category.css_class(), class)
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category.code()
        >
            {children()}
        </div>
    }
}
