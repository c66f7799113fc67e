//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# quilt configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# inner_gaps_x = 10                     # 0-100, pixels between side-by-side windows
# inner_gaps_y = 10                     # 0-100, pixels between stacked windows
# default_layout_direction = "horizontal"  # "horizontal" | "vertical"
# min_window_width = 50                 # 1-1000
# min_window_height = 50                # 1-1000
# resize_jump = 50                      # 1-500, pixels per resize step

[logging]
# level = "info"                        # trace | debug | info | warn | error
"##
    .to_string()
}
