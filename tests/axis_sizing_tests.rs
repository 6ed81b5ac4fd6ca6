mod common;

use approx::assert_relative_eq;
use chart_axes::api::{
    AxisInput, ChartConfig, LocaleTickFormatProvider, SizingInput, Y2_FALLBACK_WIDTH, size_axes,
    size_labels,
};
use chart_axes::core::{AxisLabelSizes, AxisSet, Padding, Viewport};
use chart_axes::error::ChartError;

use common::{HORIZONTAL_STUB_HEIGHT, LINE_HEIGHT, RecordingMeasurer, VERTICAL_STUB_WIDTH};

fn base_config() -> ChartConfig {
    ChartConfig::new(Viewport::new(800.0, 400.0), 0.0, 100.0)
        .with_x_axis(AxisInput::with_limits(0.0, 100.0).with_label("Time"))
        .with_y_axis(AxisInput::with_limits(0.0, 10.0).with_label("Value"))
}

fn sizing<'a>(
    axes: &'a AxisSet,
    padding: Padding,
    show_label: bool,
    info_labels: &'a [String],
    formats: &'a LocaleTickFormatProvider,
) -> SizingInput<'a> {
    SizingInput {
        axes,
        padding,
        show_label,
        axis_info_row_labels: info_labels,
        formats,
    }
}

#[test]
fn custom_padding_is_used_verbatim_without_measuring() {
    let axes = base_config().resolve_axes().expect("axes");
    let formats = LocaleTickFormatProvider::default();
    let padding = Padding {
        top: 1.0,
        bottom: 30.0,
        left: 40.0,
        right: 60.0,
        has_custom_padding: true,
    };
    let mut measurer = RecordingMeasurer::default();

    let metrics = size_axes(
        &sizing(&axes, padding, true, &[], &formats),
        AxisLabelSizes::default(),
        &mut measurer,
    )
    .expect("size axes");

    assert_eq!(metrics.axis_sizes.y, 40.0);
    assert_eq!(metrics.axis_sizes.y2, 60.0);
    assert_eq!(metrics.axis_sizes.x, 30.0);
    assert_eq!(measurer.measure_calls, 0);
    assert_eq!(measurer.acquired, 0);
}

#[test]
fn measured_sizes_add_padding_and_reserve_y2_fallback() {
    let axes = base_config().resolve_axes().expect("axes");
    let formats = LocaleTickFormatProvider::default();
    let padding = Padding::chart_default();
    let mut measurer = RecordingMeasurer::default();

    let metrics = size_axes(
        &sizing(&axes, padding, true, &[], &formats),
        AxisLabelSizes::default(),
        &mut measurer,
    )
    .expect("size axes");

    assert_eq!(metrics.axis_sizes.y, VERTICAL_STUB_WIDTH + padding.left);
    assert_eq!(metrics.axis_sizes.y2, Y2_FALLBACK_WIDTH + padding.right);
    assert_eq!(metrics.axis_sizes.x, HORIZONTAL_STUB_HEIGHT);
    assert_eq!(measurer.measure_calls, 2);
    assert_eq!(measurer.open_surfaces(), 0);
}

#[test]
fn shown_y2_is_measured() {
    let axes = base_config()
        .with_y2_axis(AxisInput::with_limits(0.0, 1000.0))
        .resolve_axes()
        .expect("axes");
    let formats = LocaleTickFormatProvider::default();
    let mut measurer = RecordingMeasurer::default();

    let metrics = size_axes(
        &sizing(&axes, Padding::chart_default(), true, &[], &formats),
        AxisLabelSizes::default(),
        &mut measurer,
    )
    .expect("size axes");

    assert_eq!(
        metrics.axis_sizes.y2,
        VERTICAL_STUB_WIDTH + Padding::DEFAULT_RIGHT
    );
    assert_eq!(measurer.measure_calls, 3);
}

#[test]
fn hidden_axes_keep_padding_but_are_not_measured() {
    let axes = base_config()
        .with_y_axis(AxisInput::with_limits(0.0, 10.0).with_show(false))
        .with_x_axis(AxisInput::with_limits(0.0, 100.0).with_show(false))
        .resolve_axes()
        .expect("axes");
    let formats = LocaleTickFormatProvider::default();
    let mut measurer = RecordingMeasurer::default();

    let metrics = size_axes(
        &sizing(&axes, Padding::chart_default(), true, &[], &formats),
        AxisLabelSizes::default(),
        &mut measurer,
    )
    .expect("size axes");

    assert_eq!(metrics.axis_sizes.y, Padding::DEFAULT_LEFT);
    assert_eq!(metrics.axis_sizes.x, 0.0);
    assert_eq!(measurer.measure_calls, 0);
}

#[test]
fn hidden_labels_measure_nothing() {
    let axes = base_config().resolve_axes().expect("axes");
    let formats = LocaleTickFormatProvider::default();
    let mut measurer = RecordingMeasurer::default();

    let labels = size_labels(
        &sizing(&axes, Padding::chart_default(), false, &[], &formats),
        &mut measurer,
    )
    .expect("size labels");

    assert_eq!(labels, AxisLabelSizes::default());
    assert_eq!(measurer.measure_calls, 0);
}

#[test]
fn titles_are_measured_in_their_rotation() {
    let axes = base_config().resolve_axes().expect("axes");
    let formats = LocaleTickFormatProvider::default();
    let mut measurer = RecordingMeasurer::default();

    let labels = size_labels(
        &sizing(&axes, Padding::chart_default(), true, &[], &formats),
        &mut measurer,
    )
    .expect("size labels");

    assert_relative_eq!(labels.x_height, LINE_HEIGHT, epsilon = 1e-9);
    // "Value" is 35px wide; rotated a quarter turn only its line height remains.
    assert_relative_eq!(labels.y_width, LINE_HEIGHT, epsilon = 1e-9);
    assert_eq!(labels.y2_width, 0.0);
    assert_eq!(measurer.measure_calls, 2);
    assert_eq!(measurer.open_surfaces(), 0);
}

#[test]
fn info_row_height_is_the_tallest_label() {
    let axes = base_config().resolve_axes().expect("axes");
    let formats = LocaleTickFormatProvider::default();
    let info = vec!["Q1".to_owned(), String::new(), "Q2".to_owned()];
    let mut measurer = RecordingMeasurer::default();

    let labels = size_labels(
        &sizing(&axes, Padding::chart_default(), false, &info, &formats),
        &mut measurer,
    )
    .expect("size labels");

    assert_eq!(labels.info_row_height, LINE_HEIGHT);
    assert_eq!(labels.x_height, 0.0);
    assert_eq!(measurer.measure_calls, 2);
}

#[test]
fn measurement_failure_is_surfaced_and_surface_released() {
    let axes = base_config().resolve_axes().expect("axes");
    let formats = LocaleTickFormatProvider::default();
    let mut measurer = RecordingMeasurer::failing_on(2);

    let err = size_axes(
        &sizing(&axes, Padding::chart_default(), true, &[], &formats),
        AxisLabelSizes::default(),
        &mut measurer,
    )
    .expect_err("second measurement fails");

    assert!(matches!(err, ChartError::Measurement(ref message) if message == "surface lost"));
    assert_eq!(measurer.acquired, 2);
    assert_eq!(measurer.open_surfaces(), 0);
}
