use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::axis::{AxisId, AxisSet};
use crate::core::content::{ContentItem, ContentKind, ValueExtent};

/// Running aggregate of the data extent seen on one axis.
///
/// `min`/`max` hold the committed extent, `old_min`/`old_max` the one it
/// replaced. Both are `None` until data arrives.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DataRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub old_min: Option<f64>,
    pub old_max: Option<f64>,
    /// Set when the last observed extent escaped the committed one and
    /// layout has to be recomputed. It does not mean "no data" when false.
    pub is_range_modified: bool,
}

impl DataRange {
    #[must_use]
    pub fn extent(&self) -> Option<ValueExtent> {
        Some(ValueExtent::new(self.min?, self.max?))
    }

    #[must_use]
    pub fn previous_extent(&self) -> Option<ValueExtent> {
        Some(ValueExtent::new(self.old_min?, self.old_max?))
    }

    /// Records a freshly aggregated extent and returns `is_range_modified`.
    ///
    /// The extent is committed only when nothing was committed before or
    /// when it is not enclosed by the committed one; the replaced extent
    /// moves to `old_min`/`old_max`.
    pub fn observe(&mut self, current: ValueExtent) -> bool {
        let modified = self
            .extent()
            .is_none_or(|committed| !committed.encloses(current));
        self.is_range_modified = modified;
        if modified {
            self.old_min = self.min;
            self.old_max = self.max;
            self.min = Some(current.min);
            self.max = Some(current.max);
        }
        modified
    }
}

/// Group that stacks `item` on `axis`. Stacking only happens on the
/// value axis the item is plotted against.
fn stacking_group(item: &ContentItem, axis: AxisId) -> Option<&str> {
    item.group().filter(|_| item.axis == axis)
}

/// Contribution of `item` on `axis`.
///
/// On its own value axis a grouped item contributes the sum of every item
/// in `content` that shares its group and axis. Simple items, and grouped
/// items on any other axis, contribute their own extent.
#[must_use]
pub fn group_contribution(
    item: &ContentItem,
    content: &[ContentItem],
    axis: AxisId,
) -> Option<ValueExtent> {
    match &item.kind {
        ContentKind::Grouped { group } if item.axis == axis => {
            let mut summed: Option<ValueExtent> = None;
            for member in content
                .iter()
                .filter(|member| member.axis == item.axis && member.group() == Some(group))
            {
                let Some(extent) = member.values_range.get(axis) else {
                    continue;
                };
                let total = summed.get_or_insert(ValueExtent::new(0.0, 0.0));
                total.min += extent.min;
                total.max += extent.max;
            }
            summed
        }
        _ => item.values_range.get(axis),
    }
}

/// Overall extent of `content` on `axis`: the min/max across individual
/// extents and group sums. Each group is counted once.
#[must_use]
pub fn aggregate_extent(axis: AxisId, content: &[ContentItem]) -> Option<ValueExtent> {
    let mut groups: IndexMap<(AxisId, &str), ValueExtent> = IndexMap::new();
    let mut overall: Option<ValueExtent> = None;

    for item in content
        .iter()
        .filter(|item| item.values_range.get(axis).is_some())
    {
        let contribution = match stacking_group(item, axis) {
            Some(group) => {
                if groups.contains_key(&(item.axis, group)) {
                    continue;
                }
                let Some(summed) = group_contribution(item, content, axis) else {
                    continue;
                };
                groups.insert((item.axis, group), summed);
                summed
            }
            None => match item.values_range.get(axis) {
                Some(extent) => extent,
                None => continue,
            },
        };
        overall = Some(match overall {
            Some(extent) => extent.union(contribution),
            None => contribution,
        });
    }

    overall
}

/// Recomputes the data range of `axis` from the current `content`.
///
/// Returns whether layout must be recomputed. An absent or hidden Y2, or
/// content without extents on `axis`, leaves the stored range and its
/// modified flag untouched.
pub fn update_axis_data_range(axes: &mut AxisSet, axis: AxisId, content: &[ContentItem]) -> bool {
    let Some(definition) = axes.get_mut(axis) else {
        trace!(axis = axis.as_str(), "skip data range update for absent axis");
        return false;
    };
    let Some(current) = aggregate_extent(axis, content) else {
        trace!(
            axis = axis.as_str(),
            content_len = content.len(),
            "no extent contribution"
        );
        return false;
    };

    let modified = definition.data_range.observe(current);
    debug!(
        axis = axis.as_str(),
        min = current.min,
        max = current.max,
        modified,
        "update axis data range"
    );
    modified
}

#[cfg(test)]
mod tests {
    use super::DataRange;
    use crate::core::content::ValueExtent;

    #[test]
    fn observe_keeps_one_generation_of_history() {
        let mut range = DataRange::default();
        assert!(range.observe(ValueExtent::new(0.0, 10.0)));
        assert!(range.observe(ValueExtent::new(-5.0, 10.0)));

        assert_eq!(range.extent(), Some(ValueExtent::new(-5.0, 10.0)));
        assert_eq!(range.previous_extent(), Some(ValueExtent::new(0.0, 10.0)));
    }

    #[test]
    fn enclosed_extent_is_not_committed() {
        let mut range = DataRange::default();
        range.observe(ValueExtent::new(0.0, 10.0));

        assert!(!range.observe(ValueExtent::new(2.0, 8.0)));
        assert_eq!(range.extent(), Some(ValueExtent::new(0.0, 10.0)));
        assert_eq!(range.previous_extent(), None);
    }

    #[test]
    fn touching_bounds_count_as_enclosed() {
        let mut range = DataRange::default();
        range.observe(ValueExtent::new(0.0, 10.0));

        assert!(!range.observe(ValueExtent::new(0.0, 10.0)));
        assert!(range.observe(ValueExtent::new(0.0, 10.000_001)));
    }
}
