//! SVG line charts.

use std::path::Path;

use gridcurve_core::PricePoint;
use plotters::prelude::*;

use crate::error::{CliError, CliResult};

/// Titles and axis labels for one chart.
#[derive(Debug, Clone)]
pub struct ChartLabels {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
}

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 500;

/// Draws `line` as a connected series and `markers` as circles, then
/// writes the SVG to `path`.
pub fn write_line_chart(
    path: &Path,
    labels: &ChartLabels,
    line: &[PricePoint],
    markers: &[PricePoint],
) -> CliResult<()> {
    let svg = render_svg(labels, line, markers)?;
    std::fs::write(path, svg)?;
    Ok(())
}

/// Renders the chart into an SVG document.
pub fn render_svg(
    labels: &ChartLabels,
    line: &[PricePoint],
    markers: &[PricePoint],
) -> CliResult<String> {
    if line.is_empty() && markers.is_empty() {
        return Err(CliError::Chart("no points to plot".to_string()));
    }

    let mut svg = String::new();
    draw(&mut svg, labels, line, markers).map_err(|e| CliError::Chart(e.to_string()))?;
    Ok(svg)
}

fn draw(
    svg: &mut String,
    labels: &ChartLabels,
    line: &[PricePoint],
    markers: &[PricePoint],
) -> Result<(), Box<dyn std::error::Error>> {
    let all = || line.iter().chain(markers.iter());
    let (x_min, x_max) = padded_range(all().map(|p| p.period), 0.0);
    let (y_min, y_max) = padded_range(all().map(|p| p.price), 0.1);

    let root = SVGBackend::with_string(svg, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&labels.title, ("sans-serif", 22).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(labels.x_desc.as_str())
        .y_desc(labels.y_desc.as_str())
        .x_labels(24)
        .y_labels(10)
        .draw()?;

    let color = RGBColor(33, 150, 243);

    chart.draw_series(LineSeries::new(
        line.iter().map(|p| (p.period, p.price)),
        color.stroke_width(2),
    ))?;
    chart.draw_series(
        markers
            .iter()
            .map(|p| Circle::new((p.period, p.price), 4, color.filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Returns `(min, max)` of the values, widened by `pad` of the span and
/// never empty.
fn padded_range(values: impl Iterator<Item = f64>, pad: f64) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = max - min;
    if span <= 0.0 {
        return (min - 1.0, max + 1.0);
    }
    (min - span * pad, max + span * pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> ChartLabels {
        ChartLabels {
            title: "UK Day-Ahead Power Prices".to_string(),
            x_desc: "Hour of Day".to_string(),
            y_desc: "Power Price (£/MWh)".to_string(),
        }
    }

    fn points() -> Vec<PricePoint> {
        [(0.0, 55.2), (1.0, 54.8), (2.0, 53.5), (23.0, 72.1)]
            .into_iter()
            .map(|(period, price)| PricePoint { period, price })
            .collect()
    }

    #[test]
    fn test_render_svg() {
        let svg = render_svg(&labels(), &points(), &points()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("UK Day-Ahead Power Prices"));
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn test_single_point() {
        let one = vec![PricePoint {
            period: 3.0,
            price: 98.0,
        }];
        assert!(render_svg(&labels(), &one, &one).is_ok());
    }

    #[test]
    fn test_empty_chart_rejected() {
        assert!(matches!(
            render_svg(&labels(), &[], &[]),
            Err(CliError::Chart(_))
        ));
    }

    #[test]
    fn test_padded_range() {
        assert_eq!(padded_range([1.0, 3.0].into_iter(), 0.0), (1.0, 3.0));
        assert_eq!(padded_range([5.0].into_iter(), 0.1), (4.0, 6.0));
        let (lo, hi) = padded_range([0.0, 10.0].into_iter(), 0.1);
        assert!((lo + 1.0).abs() < 1e-12 && (hi - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        write_line_chart(&path, &labels(), &points(), &points()).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("</svg>"));
    }
}
