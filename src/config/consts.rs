// src/config/consts.rs

// Record file
pub const DEFAULT_DATA_FILE: &str = "tax_deed_properties.csv";
pub const STORE_SEP: char = ',';

// Debug log
pub const LOG_FILE: &str = ".deed_desk/debug.log";

// Extract
pub const HEADER_MARKER: &str = "PARCEL NO.";
pub const SECTION_MARKERS: &[&str] = &["THE FOLLOWING PARCELS"];
pub const PARCEL_PATTERN: &str = r"^\d{3}-\d{2}-\d{3}";
pub const NAN_PLACEHOLDER: &str = "nan";
pub const DEFAULT_PROPERTY_TYPE: &str = "land";

// Sale date guess: frame row (0 = first row under the column-name row), not a parsed value
pub const SALE_DATE_SPLIT_ROW: usize = 150;
pub const FIRST_SALE_DATE: &str = "September 3, 2025";
pub const SECOND_SALE_DATE: &str = "September 4, 2025";
pub const SALE_DATE_FMT: &str = "%B %d, %Y";

// Dashboard
pub const PAGE_SIZE: usize = 20;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_STEM: &str = "tax_deed_properties";
pub const EXPORT_STAMP_FMT: &str = "%Y%m%d_%H%M%S";
