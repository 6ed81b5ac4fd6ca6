mod axis_position;
mod axis_scale_assembler;
mod axis_sizing;
mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_init;
mod tick_format;
mod validation;

pub use axis_position::{
    BASE_LABEL_ICON_HEIGHT_PADDING, LayoutContext, axis_info_row_orientation, axis_info_row_y,
    rotation_for_axis, vertical_padding, x_axis_label_x, x_axis_label_y, x_axis_range,
    x_axis_width, x_axis_x, x_axis_y, y_axis_height, y_axis_label_shape_x, y_axis_label_shape_y,
    y_axis_label_x, y_axis_label_y, y_axis_range, y_axis_x, y_axis_y, y2_axis_label_shape_x,
    y2_axis_label_shape_y, y2_axis_label_x, y2_axis_x, y2_axis_y,
};
pub use axis_scale_assembler::{AssemblyInput, assemble_layout};
pub use axis_sizing::{SizingInput, Y2_FALLBACK_WIDTH, size_axes, size_labels};
pub use engine::{AxisEngine, SharedTickFormatProvider};
pub use engine_config::{
    AxesInput, AxisInput, ChartConfig, ChartKind, LimitValue, PaddingInput, SettingsInput,
    TickInput,
};
pub use tick_format::{
    AxisLabelLocale, FormattingConfig, LocaleTickFormatProvider, TickFormatFn, TickFormatProvider,
};
