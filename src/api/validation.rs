use crate::core::{AxisId, AxisType};
use crate::error::{ChartError, ChartResult};

use super::engine_config::{
    AxisInput, ChartConfig, ChartKind, PaddingInput, resolve_domain, resolve_ticks,
};

/// Rejects malformed input before any axis state is built.
///
/// Everything downstream assumes the invariants checked here: a drawable
/// viewport, present and ordered limits, date limits on time-series axes
/// and non-negative padding.
pub(super) fn validate_config(config: &ChartConfig) -> ChartResult<()> {
    if !config.viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }

    validate_axis(AxisId::X, &config.axis.x, config.x_axis_type())?;

    match (&config.axis.y, config.kind) {
        (Some(y), ChartKind::Gantt) if y.lower_limit.is_none() && y.upper_limit.is_none() => {
            resolve_ticks(&y.ticks, AxisType::Default)?;
        }
        (Some(y), _) => validate_axis(AxisId::Y, y, AxisType::Default)?,
        (None, ChartKind::Gantt) => {}
        (None, ChartKind::Cartesian) => {
            return Err(ChartError::InvalidConfig(
                "axis.y must be provided for cartesian charts".to_owned(),
            ));
        }
    }

    if let Some(y2) = &config.axis.y2 {
        validate_axis(AxisId::Y2, y2, AxisType::Default)?;
    }

    if let Some(padding) = config.padding {
        validate_padding(padding)?;
    }

    Ok(())
}

fn validate_axis(id: AxisId, input: &AxisInput, axis_type: AxisType) -> ChartResult<()> {
    if id.is_vertical() && input.axis_type == Some(AxisType::TimeSeries) {
        return Err(ChartError::InvalidConfig(format!(
            "axis.{} cannot be a time-series axis",
            id.as_str()
        )));
    }

    let domain = resolve_domain(id, input, axis_type)?;
    if domain.lower_limit > domain.upper_limit {
        return Err(ChartError::InvalidConfig(format!(
            "axis.{} lowerLimit must be <= upperLimit",
            id.as_str()
        )));
    }

    resolve_ticks(&input.ticks, axis_type)?;
    Ok(())
}

fn validate_padding(padding: PaddingInput) -> ChartResult<()> {
    for (side, value) in [
        ("top", padding.top),
        ("bottom", padding.bottom),
        ("left", padding.left),
        ("right", padding.right),
    ] {
        if let Some(value) = value {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "padding.{side} must be finite and >= 0"
                )));
            }
        }
    }
    Ok(())
}
