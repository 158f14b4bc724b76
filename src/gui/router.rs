// src/gui/router.rs
use super::app::App;
use super::pages::{self, Page, PageKind};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::properties::PAGE,
    &pages::edit::PAGE,
    &pages::add::PAGE,
    &pages::import::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn index_of(kind: PageKind) -> usize {
    PAGES.iter().position(|p| p.kind() == kind).unwrap_or(0)
}

/// Change tab and run the page's enter hook.
pub fn switch_to(app: &mut App, kind: PageKind) {
    let prev = app.current_page_kind();
    if prev == kind {
        return;
    }
    app.set_current_index(index_of(kind));
    logf!("UI: Tab switch {:?} → {:?}", prev, kind);
    app.current_page().on_enter(app);
}
