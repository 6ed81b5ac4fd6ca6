mod common;

use approx::assert_relative_eq;
use chart_axes::api::{AxisEngine, AxisInput, ChartConfig, ChartKind};
use chart_axes::core::{AxisId, AxisOrientation, AxisType, Padding, Viewport};
use chart_axes::render::{NullRenderer, Renderer};
use chart_axes::{ChartError, ChartResult};

use common::{LINE_HEIGHT, RecordingMeasurer, VERTICAL_STUB_WIDTH, simple};

fn config() -> ChartConfig {
    ChartConfig::new(Viewport::new(800.0, 400.0), 0.0, 100.0)
        .with_x_axis(AxisInput::with_limits(0.0, 100.0).with_label("Time"))
        .with_y_axis(AxisInput::with_limits(-5.0, 10.0).with_label("Value"))
}

fn engine(config: ChartConfig) -> AxisEngine<RecordingMeasurer> {
    AxisEngine::new(NullRenderer::default(), RecordingMeasurer::default(), config)
        .expect("engine init")
}

#[test]
fn layout_places_axes_from_measured_sizes() {
    let mut engine = engine(config());
    let frame = engine.layout().expect("layout");

    let left_band = VERTICAL_STUB_WIDTH + Padding::DEFAULT_LEFT + LINE_HEIGHT;
    assert_relative_eq!(frame.x_axis.origin.x, left_band, epsilon = 1e-9);
    assert_relative_eq!(frame.y_axis.origin.x, left_band, epsilon = 1e-9);
    assert_eq!(frame.x_axis.origin.y, 400.0 + Padding::DEFAULT_BOTTOM);
    assert_eq!(frame.y_axis.origin.y, Padding::DEFAULT_BOTTOM);
    assert_eq!(frame.y_axis.range, (400.0, 0.0));

    let plot_width = frame.x_axis.range.1;
    assert_relative_eq!(
        plot_width,
        800.0 - (VERTICAL_STUB_WIDTH + Padding::DEFAULT_LEFT) - (20.0 + Padding::DEFAULT_RIGHT)
            - LINE_HEIGHT,
        epsilon = 1e-9
    );
    assert!(frame.y2_axis.is_none());
    assert_eq!(engine.measurer().open_surfaces(), 0);
}

#[test]
fn x_ticks_follow_plot_width() {
    let mut engine = engine(config());
    let frame = engine.layout().expect("layout");
    let ticks = &frame.x_axis.ticks;

    let values: Vec<f64> = ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(values, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert_eq!(ticks[0].offset, 0.0);
    assert_eq!(ticks[5].offset, frame.x_axis.range.1.round());
    assert_eq!(ticks[1].label, "20");
}

#[test]
fn repeated_layout_is_bit_identical() {
    let mut engine = engine(config());
    engine
        .load_content(simple("a", AxisId::Y, -8.0, 12.0))
        .expect("load");

    let first = engine.layout().expect("first layout");
    let second = engine.layout().expect("second layout");
    assert_eq!(first, second);
}

#[test]
fn hiding_labels_removes_title_space() {
    let top = config().with_x_axis(
        AxisInput::with_limits(0.0, 100.0)
            .with_label("Time")
            .with_orientation(AxisOrientation::Top),
    );
    let mut engine = engine(top);

    let with_labels = engine.layout().expect("layout with labels");
    assert_eq!(with_labels.metrics.label_sizes.x_height, LINE_HEIGHT);
    assert_eq!(
        with_labels.x_axis.origin.y,
        LINE_HEIGHT * 2.0 + Padding::DEFAULT_TOP
    );

    engine.set_show_label(false);
    let without_labels = engine.layout().expect("layout without labels");
    assert_eq!(without_labels.metrics.label_sizes.x_height, 0.0);
    assert_eq!(without_labels.x_axis.origin.y, Padding::DEFAULT_TOP);
    assert!(without_labels.labels.is_empty());
}

#[test]
fn bottom_x_title_sits_below_axis() {
    let mut engine = engine(config());
    let frame = engine.layout().expect("layout");
    let label = frame.label(AxisId::X).expect("x title");

    assert_eq!(label.rotation_deg, 0.0);
    assert_eq!(
        label.position.y,
        frame.x_axis.origin.y + LINE_HEIGHT * 2.0 + Padding::DEFAULT_BOTTOM * 2.0
    );
    assert_relative_eq!(
        label.position.x,
        frame.x_axis.origin.x + frame.x_axis.range.1 / 2.0,
        epsilon = 1e-9
    );
    assert!(label.shape_origin.is_none());
}

#[test]
fn title_shapes_shift_with_content_count() {
    let mut engine = engine(config());
    let empty = engine.layout().expect("layout");
    let empty_shape = empty
        .label(AxisId::Y)
        .and_then(|label| label.shape_origin)
        .expect("y shape");

    engine
        .load_contents([
            simple("a", AxisId::Y, 0.0, 1.0),
            simple("b", AxisId::Y, 0.0, 2.0),
        ])
        .expect("load");
    let loaded = engine.layout().expect("layout");
    let y_label = loaded.label(AxisId::Y).expect("y title");
    let shape = y_label.shape_origin.expect("y shape");

    assert_eq!(y_label.rotation_deg, -90.0);
    assert_relative_eq!(shape.y - empty_shape.y, 8.0, epsilon = 1e-9);
    assert_relative_eq!(shape.x, y_label.position.x + 6.0, epsilon = 1e-9);
}

#[test]
fn y2_title_and_shapes_mirror_y() {
    let mut engine = engine(
        config().with_y2_axis(AxisInput::with_limits(0.0, 50.0).with_label("Rate")),
    );
    engine
        .load_content(simple("r", AxisId::Y2, 0.0, 10.0))
        .expect("load");
    let frame = engine.layout().expect("layout");

    let y2_axis = frame.y2_axis.as_ref().expect("y2 axis");
    let y2_label = frame.label(AxisId::Y2).expect("y2 title");
    let y_label = frame.label(AxisId::Y).expect("y title");
    assert_eq!(y2_label.rotation_deg, 90.0);
    assert_relative_eq!(
        y2_axis.origin.x,
        frame.x_axis.origin.x + frame.x_axis.range.1,
        epsilon = 1e-9
    );
    let shape = y2_label.shape_origin.expect("y2 shape");
    assert_relative_eq!(shape.y, y_label.position.y - 4.0, epsilon = 1e-9);
    assert_relative_eq!(shape.x, y2_label.position.x - 6.0, epsilon = 1e-9);
}

#[test]
fn reference_line_tracks_zero_crossing() {
    let mut engine = engine(
        config().with_y_axis(AxisInput::with_limits(0.0, 10.0).with_label("Value")),
    );
    let before = engine.layout().expect("layout");
    let line = before.reference_line(AxisId::Y).expect("y reference line");
    assert!(!line.visible);

    engine
        .load_content(simple("neg", AxisId::Y, -4.0, 10.0))
        .expect("load");
    let after = engine.layout().expect("layout");
    let line = after.reference_line(AxisId::Y).expect("y reference line");
    assert!(line.visible);
    assert_eq!(line.start.y, line.end.y);
    assert_eq!(line.start.x, after.x_axis.origin.x);
    assert_relative_eq!(
        line.end.x,
        after.x_axis.origin.x + after.x_axis.range.1.round(),
        epsilon = 1e-9
    );
}

#[test]
fn info_row_mirrors_x_axis() {
    let mut engine = engine(config().with_axis_info_row_labels(vec!["Q1".to_owned()]));
    let frame = engine.layout().expect("layout");
    let row = frame.axis_info_row.as_ref().expect("info row");

    assert_eq!(row.orientation, AxisOrientation::Top);
    assert!(row.tick_values.is_empty());
    assert!(row.aria_hidden);
    assert_eq!(row.origin.x, frame.x_axis.origin.x);
    assert_eq!(row.origin.y, Padding::DEFAULT_BOTTOM);
    assert_eq!(frame.metrics.label_sizes.info_row_height, LINE_HEIGHT);
}

#[test]
fn resize_widens_plot_and_rejects_empty_viewport() {
    let mut engine = engine(config());
    let narrow = engine.layout().expect("layout").x_axis.range.1;

    engine
        .resize(Viewport::new(1000.0, 400.0))
        .expect("resize");
    let wide = engine.layout().expect("layout").x_axis.range.1;
    assert_relative_eq!(wide - narrow, 200.0, epsilon = 1e-9);

    let err = engine
        .resize(Viewport::new(1000.0, f64::NAN))
        .expect_err("invalid viewport");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
    assert_eq!(engine.viewport(), Viewport::new(1000.0, 400.0));
}

#[test]
fn gantt_reserves_track_labels_and_formats_dates() {
    let gantt = ChartConfig::new(
        Viewport::new(1200.0, 300.0),
        "2024-01-01T00:00:00Z",
        "2024-03-01T00:00:00Z",
    )
    .with_kind(ChartKind::Gantt);
    let mut engine = engine(gantt);
    assert_eq!(engine.padding().left, Padding::TRACK_LABEL_WIDTH);

    let frame = engine.layout().expect("layout");
    assert_eq!(frame.x_axis.axis_type, AxisType::TimeSeries);
    assert_eq!(
        frame.metrics.axis_sizes.y,
        VERTICAL_STUB_WIDTH + Padding::TRACK_LABEL_WIDTH
    );
    // 840 px of plot over two months asks for weekly ticks, on Sundays at UTC midnight.
    let labels: Vec<&str> = frame
        .x_axis
        .ticks
        .iter()
        .map(|tick| tick.label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Jan 07", "Jan 14", "Jan 21", "Jan 28", "Feb 04", "Feb 11", "Feb 18", "Feb 25"
        ]
    );
    assert!(
        frame
            .x_axis
            .ticks
            .iter()
            .all(|tick| tick.value % 86_400_000.0 == 0.0)
    );
}

#[test]
fn render_hands_validated_frame_to_backend() {
    let mut engine = engine(config());
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.render_count, 1);
    assert_eq!(renderer.last_label_count, 2);
    assert_eq!(renderer.last_visible_reference_lines, 1);
    assert!(renderer.last_tick_count > 0);
}

#[derive(Default)]
struct RejectingRenderer;

impl Renderer for RejectingRenderer {
    fn render(&mut self, _frame: &chart_axes::render::LayoutFrame) -> ChartResult<()> {
        Err(ChartError::InvalidData("backend unavailable".to_owned()))
    }
}

#[test]
fn renderer_failure_is_surfaced() {
    let mut engine = AxisEngine::new(RejectingRenderer, RecordingMeasurer::default(), config())
        .expect("engine init");
    let err = engine.render().expect_err("renderer fails");
    assert!(
        matches!(err, ChartError::InvalidData(ref message) if message == "backend unavailable")
    );
}
