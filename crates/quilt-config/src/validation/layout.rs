//! Layout configuration validation (gaps, minimum window size, resize step).

use crate::schema::QuiltConfig;

use super::helpers::validate_range;

/// Validate all layout-related constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &QuiltConfig) {
    let layout = &config.layout;
    validate_range(errors, "layout.inner_gaps_x", layout.inner_gaps_x, 0, 100);
    validate_range(errors, "layout.inner_gaps_y", layout.inner_gaps_y, 0, 100);
    validate_range(
        errors,
        "layout.min_window_width",
        layout.min_window_width,
        1,
        1000,
    );
    validate_range(
        errors,
        "layout.min_window_height",
        layout.min_window_height,
        1,
        1000,
    );
    validate_range(errors, "layout.resize_jump", layout.resize_jump, 1, 500);
}
