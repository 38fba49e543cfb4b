use std::io::Cursor;

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::*;
use thiserror::Error;

use measure_table::{palette_color, Table};

/// Pixel dimensions of exported charts.
#[derive(Clone, Copy, Debug)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("nothing to render: table has no rows")]
    EmptyTable,
    #[error("failed to draw chart: {0}")]
    Draw(String),
    #[error("failed to encode chart image: {0}")]
    Image(#[from] image::ImageError),
}

impl<E: std::error::Error + Send + Sync + 'static>
    From<plotters::drawing::DrawingAreaErrorKind<E>> for ChartError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        ChartError::Draw(format!("{value:?}"))
    }
}

/// Render the selected channels of a (possibly cropped) table to PNG bytes.
///
/// One line per selected channel index, drawn against the shared index in
/// the channel's palette color and labeled by its name. The x-axis label
/// combines the index name with the x-unit, the y-axis carries the shared
/// y-unit alone; the caption is the dataset name. `selected` may be empty,
/// which yields a chart with axes but no series.
pub fn render_png(
    table: &Table,
    selected: &[usize],
    x_unit: &str,
    y_unit: &str,
    title: &str,
    style: ChartStyle,
) -> Result<Vec<u8>, ChartError> {
    if table.is_empty() {
        return Err(ChartError::EmptyTable);
    }

    let (x_range, y_range) = axis_ranges(table, selected);
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .caption(title, ("sans-serif", 20).into_font())
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .build_cartesian_2d(x_range, y_range)?;

        chart
            .configure_mesh()
            .x_desc(format!("{} ({})", table.index_name, x_unit))
            .y_desc(format!("({})", y_unit))
            .draw()?;

        let mut num_series = 0;
        for (idx, channel) in table
            .channels
            .iter()
            .enumerate()
            .filter(|(idx, _)| selected.contains(idx))
        {
            let (r, g, b) = palette_color(idx);
            let color = RGBColor(r, g, b);
            let series = table
                .index
                .iter()
                .copied()
                .zip(channel.values.iter().copied());
            chart
                .draw_series(LineSeries::new(series, color))?
                .label(channel.name.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            num_series += 1;
        }

        if num_series > 0 {
            chart
                .configure_series_labels()
                .border_style(BLACK.mix(0.4))
                .background_style(WHITE.mix(0.8))
                .draw()?;
        }
        root.present()?;
    }

    encode_png(&buffer, style.width, style.height)
}

/// Plot bounds from the index span and the selected channels' value span,
/// with a little padding. Degenerate spans are widened so plotters always
/// gets a valid range.
fn axis_ranges(
    table: &Table,
    selected: &[usize],
) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let x_min = table.index.iter().copied().fold(f64::INFINITY, f64::min);
    let x_max = table
        .index
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    let values = table
        .channels
        .iter()
        .enumerate()
        .filter(|(idx, _)| selected.contains(idx))
        .flat_map(|(_, chan)| chan.values.iter().copied());
    let (y_min, y_max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    (pad_range(x_min, x_max), pad_range(y_min, y_max))
}

fn pad_range(min: f64, max: f64) -> std::ops::Range<f64> {
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    if span <= 0.0 {
        return (min - 0.5)..(max + 0.5);
    }
    (min - 0.05 * span)..(max + 0.05 * span)
}

fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ChartError> {
    let img = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| ChartError::Draw("failed to allocate image buffer".into()))?;
    let mut out = Vec::new();
    DynamicImage::ImageRgb8(img).write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?;
    Ok(out)
}
