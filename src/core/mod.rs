pub mod axis;
pub mod content;
pub mod data_range;
pub mod layout;
pub mod outlier;
pub mod scale;
pub mod ticks;
pub mod types;

pub use axis::{
    AxisDefinition, AxisDomain, AxisId, AxisOrientation, AxisSet, AxisType, TickPolicy,
};
pub use content::{ContentItem, ContentKind, ValueExtent, ValuesRange};
pub use data_range::{DataRange, aggregate_extent, group_contribution, update_axis_data_range};
pub use layout::{AxisLabelSizes, AxisSizes, LayoutMetrics};
pub use outlier::{StretchFactor, axis_stretch, compute_stretch, stretch_domain};
pub use scale::LinearScale;
pub use ticks::{axis_ticks, nice_ticks, time_ticks, x_tick_count, y_tick_count};
pub use types::{Padding, Point, TransitionSettings, Viewport};
