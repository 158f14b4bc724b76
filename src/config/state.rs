// src/config/state.rs
//
// GUI-only state. Record data and the query live in `dashboard::Dashboard`;
// this holds what the widgets need between frames.
use super::consts::SALE_DATE_SPLIT_ROW;
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Edit tab search box (independent of the View tab filters)
    pub edit_search: String,

    /// Bid slider position; `None` until the user touches it
    pub bid_range: Option<(f64, f64)>,

    /// Text fields mapped onto options on use
    pub out_path_text: String,
    pub import_path_text: String,
    pub import_sheet_text: String,
    pub import_split_row_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1200,
            window_h: 800,
            current_page_index: 0,
            edit_search: s!(),
            bid_range: None,
            out_path_text: s!(),
            import_path_text: s!(),
            import_sheet_text: s!(),
            import_split_row_text: SALE_DATE_SPLIT_ROW.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
