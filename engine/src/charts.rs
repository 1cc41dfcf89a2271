use crate::models::{Bar, BarChart, RadarChart, SwotComponents};

pub const CATEGORY_LABELS: [&str; 4] = ["Strengths", "Weaknesses", "Opportunities", "Threats"];

// Quadrant palette shared with the UI cards.
const CATEGORY_COLORS: [&str; 4] = ["#4CAF50", "#F44336", "#2196F3", "#FF9800"];

/// Radar series over the four quadrant counts. The radial range is padded past
/// the largest count so the outline never touches the chart edge.
pub fn radar_chart(components: &SwotComponents) -> RadarChart {
    let values = components.quadrant_counts();
    let max = values.iter().copied().max().unwrap_or(0);

    RadarChart {
        categories: CATEGORY_LABELS.iter().map(|s| s.to_string()).collect(),
        values: values.to_vec(),
        range: [0, max + 2],
    }
}

/// One colored bar per quadrant, labeled with its item count.
pub fn bar_chart(components: &SwotComponents) -> BarChart {
    let counts = components.quadrant_counts();

    let bars = CATEGORY_LABELS
        .iter()
        .zip(CATEGORY_COLORS)
        .zip(counts)
        .map(|((category, color), count)| Bar {
            category: category.to_string(),
            count,
            color: color.to_string(),
        })
        .collect();

    BarChart { bars }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components() -> SwotComponents {
        SwotComponents {
            strengths: vec!["a".into(), "b".into(), "c".into()],
            weaknesses: vec!["a".into()],
            opportunities: vec!["a".into(), "b".into()],
            threats: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        }
    }

    #[test]
    fn radar_values_follow_quadrant_counts() {
        let chart = radar_chart(&components());
        assert_eq!(chart.categories, CATEGORY_LABELS);
        assert_eq!(chart.values, vec![3, 1, 2, 4]);
        assert_eq!(chart.range, [0, 6]);
    }

    #[test]
    fn radar_range_pads_past_the_maximum() {
        let chart = radar_chart(&SwotComponents::default());
        assert_eq!(chart.range, [0, 2]);
    }

    #[test]
    fn bars_pair_counts_with_the_fixed_palette() {
        let chart = bar_chart(&components());
        assert_eq!(chart.bars.len(), 4);
        assert_eq!(chart.bars[0].category, "Strengths");
        assert_eq!(chart.bars[0].color, "#4CAF50");
        assert_eq!(chart.bars[0].count, 3);
        assert_eq!(chart.bars[3].category, "Threats");
        assert_eq!(chart.bars[3].color, "#FF9800");
        assert_eq!(chart.bars[3].count, 4);
    }
}
