use super::RenderError;
use crate::core::models::PropertyRecord;
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;

/// Category labels for the four charted properties, in bar order.
pub const CHART_CATEGORIES: [&str; 4] = [
    "Molecular Weight",
    "XLogP",
    "H-Bond Donors",
    "H-Bond Acceptors",
];

/// Dimensions for the property bar chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 300,
        }
    }
}

/// The (category, value) dataset behind the chart.
///
/// Values come from [`PropertyRecord::chart_values`], so absent or non-numeric
/// attributes are already coerced to zero. This is also what the CSV export
/// writes.
pub fn dataset(record: &PropertyRecord) -> [(&'static str, f64); 4] {
    let values = record.chart_values();
    [
        (CHART_CATEGORIES[0], values[0]),
        (CHART_CATEGORIES[1], values[1]),
        (CHART_CATEGORIES[2], values[2]),
        (CHART_CATEGORIES[3], values[3]),
    ]
}

/// Draws the four-bar property chart as an SVG string.
///
/// One categorical bar per property, one palette color per category, linear
/// shared value axis. A record with every value absent still renders (all
/// bars at zero).
///
/// # Errors
///
/// Returns an error if the drawing backend fails.
pub fn property_chart(
    record: &PropertyRecord,
    options: &ChartOptions,
) -> Result<String, RenderError> {
    let values = record.chart_values();
    let y_min = values.iter().copied().fold(0.0_f64, f64::min) * 1.1;
    let y_max = values.iter().copied().fold(0.0_f64, f64::max).max(1.0) * 1.1;

    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (options.width, options.height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Properties", ("sans-serif", 18))
            .margin(16)
            .x_label_area_size(28)
            .y_label_area_size(56)
            .build_cartesian_2d((0usize..4usize).into_segmented(), y_min..y_max)
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(4)
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(index) if *index < CHART_CATEGORIES.len() => {
                    CHART_CATEGORIES[*index].to_string()
                }
                _ => String::new(),
            })
            .y_desc("Value")
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(values.iter().enumerate().map(|(index, value)| {
                let style = Palette99::pick(index).filled();
                let mut bar = Rectangle::new(
                    [
                        (SegmentValue::Exact(index), 0.0),
                        (SegmentValue::Exact(index + 1), *value),
                    ],
                    style,
                );
                bar.set_margin(0, 0, 10, 10);
                bar
            }))
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
    }

    Ok(svg)
}

fn chart_error(error: impl std::fmt::Display) -> RenderError {
    RenderError::Chart(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PropertyRecord {
        PropertyRecord {
            molecular_weight: Some(180.16),
            xlogp: Some(1.2),
            hbond_donor_count: Some(1),
            hbond_acceptor_count: Some(4),
            ..Default::default()
        }
    }

    #[test]
    fn dataset_pairs_categories_with_coerced_values() {
        let data = dataset(&PropertyRecord::default());
        assert_eq!(data[0], ("Molecular Weight", 0.0));
        assert_eq!(data[3], ("H-Bond Acceptors", 0.0));
    }

    #[test]
    fn renders_svg_with_four_bars() {
        let svg = property_chart(&record(), &ChartOptions::default()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Properties"));
        // One filled rectangle per category, beyond the background fill.
        assert!(svg.matches("<rect").count() >= 4);
    }

    #[test]
    fn renders_even_when_every_value_is_absent() {
        let svg = property_chart(&PropertyRecord::default(), &ChartOptions::default()).unwrap();
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn honors_requested_dimensions() {
        let options = ChartOptions {
            width: 320,
            height: 200,
        };
        let svg = property_chart(&record(), &options).unwrap();
        assert!(svg.contains("width=\"320\""));
        assert!(svg.contains("height=\"200\""));
    }
}
