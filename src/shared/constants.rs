// =============================================================================
// MAP CONSTANTS
// =============================================================================

/// Default map center (Desa Jambu Timur): [latitude, longitude]
pub const MAP_CENTER: [f64; 2] = [-6.535, 110.74];

/// Default zoom level for the map view
pub const DEFAULT_ZOOM: u8 = 14;

/// Zoom level used when flying to a selected location
pub const FOCUS_ZOOM: u8 = 17;

/// Marker palette, assigned to categories by their position in the list
pub const CATEGORY_COLORS: [&str; 8] = [
    "#a5b4fc", "#f9a8d4", "#bbf7d0", "#fde68a", "#c4b5fd", "#fbcfe8", "#fed7aa", "#bae6fd",
];

/// Fallback marker color for uncategorized locations
pub const DEFAULT_MARKER_COLOR: &str = "#3b82f6";

/// Public OSM tile source used when no MapTiler API key is configured
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

// =============================================================================
// CONDITION LABELS
// =============================================================================

pub const CONDITION_BAIK: &str = "Baik";
pub const CONDITION_RUSAK_RINGAN: &str = "Rusak Ringan";
pub const CONDITION_RUSAK_BERAT: &str = "Rusak Berat";

/// Condition filter options shown on the layers panel
pub const CONDITION_FILTERS: [&str; 3] =
    [CONDITION_BAIK, CONDITION_RUSAK_RINGAN, CONDITION_RUSAK_BERAT];

// =============================================================================
// REPORT STATUSES
// =============================================================================

pub const REPORT_STATUS_PENDING: &str = "pending";
pub const REPORT_STATUS_RESOLVED: &str = "resolved";
pub const REPORT_STATUS_DISMISSED: &str = "dismissed";

pub const REPORT_STATUSES: [&str; 3] = [
    REPORT_STATUS_PENDING,
    REPORT_STATUS_RESOLVED,
    REPORT_STATUS_DISMISSED,
];
