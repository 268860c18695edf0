//! Application-wide constants.
//!
//! Centralizes magic numbers and fixed identifiers shared between the host
//! side and the preview iframe side.

// ============================================================================
// Client State
// ============================================================================

/// Visual-property key holding the serialized client state
pub const CLIENT_STATE_VIS_PROP_KEY: &str = "clientState";

/// Latest client state schema version
pub const CLIENT_STATE_SCHEMA_LATEST_VERSION: u32 = 1;

/// Default split between the preview pane and the editors pane (percent)
pub const DEFAULT_SPLIT_SIZES: [f64; 2] = [55.0, 45.0];

// ============================================================================
// Timing
// ============================================================================

/// Editor change debounce delay in milliseconds
pub const EDITOR_CHANGE_DEBOUNCE_MS: u64 = 500;

/// Canvas resize throttle delay in milliseconds
pub const CANVAS_RESIZE_THROTTLE_MS: u64 = 300;

// ============================================================================
// Host Query
// ============================================================================

/// Maximum number of rows requested from the host per query
pub const DEFAULT_QUERY_SIZE: u32 = 20_000;

/// Synthetic column names excluded from the default chart config and queries
pub const MEASURE_NAMES_AND_VALUES_COLUMNS: [&str; 2] = ["Measure names", "Measure values"];

/// Value the host uses for a null cell in point tuples
pub const TS_NULL_VALUE: &str = "{Null}";

/// Value Muze uses for grand totals in facets and tuples
pub const TOTALS_VALUE: &str = "All";

// ============================================================================
// Preview
// ============================================================================

/// Sandbox attribute applied to every preview iframe
pub const PREVIEW_IFRAME_SANDBOX: &str = "allow-scripts allow-same-origin";

/// Global the SDK is bound to inside the preview iframe
pub const SDK_GLOBAL_KEY: &str = "viz";

/// Font stack used by charts in the preview
pub const DEFAULT_FONT_FAMILY: &str =
    "'optimo-plain', 'helvetica neue', 'helvetica', 'arial', 'sans-serif'";

/// Minimum pane size in pixels for the split layout
pub const SPLIT_MIN_SIZE_PX: u32 = 200;

/// Gutter size in pixels for the split layout
pub const SPLIT_GUTTER_SIZE_PX: u32 = 8;

/// Documentation link shown under the editors
pub const DOCS_URL: &str = "https://cyoc-documentation-site.vercel.app/";

// ============================================================================
// Color Palettes
// ============================================================================

/// Number of colors per host color palette
pub const COLORS_PER_PALETTE: usize = 5;
