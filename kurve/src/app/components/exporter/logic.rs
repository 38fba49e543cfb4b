use std::path::Path;

use chart_export::{render_png, ChartStyle};
use measure_table::format_report;

use crate::app::{config::Config, session::Session};

/// Write the current chart as PNG plus the metrics report as text into
/// `<export_dir>/<dataset>/`, both under a collision-free name. A session
/// with nothing plotted is a no-op.
pub fn export(session: &Session, config: &Config) -> Result<(), String> {
    if !session.has_plot() {
        log::debug!("nothing plotted, skipping export");
        return Ok(());
    }

    let destination = config.export_dir.join(&session.dataset_name);
    std::fs::create_dir_all(&destination)
        .map_err(|err| format!("unable to create export directory {:?}: {}", destination, err))?;

    let style = ChartStyle {
        width: config.chart_width,
        height: config.chart_height,
    };
    let png = render_png(
        &session.current,
        &session.selected_indices(),
        &session.x_unit,
        &session.y_unit,
        &session.dataset_name,
        style,
    )
    .map_err(|err| format!("unable to render chart: {}", err))?;

    let image_name = find_unique_name(&session.dataset_name, &destination, "png");
    let image_path = destination.join(format!("{}.png", image_name));
    std::fs::write(&image_path, png)
        .map_err(|err| format!("unable to write {:?}: {}", image_path, err))?;

    let report_name = find_unique_name(&session.dataset_name, &destination, "txt");
    let report_path = destination.join(format!("{}.txt", report_name));
    std::fs::write(&report_path, format_report(&session.metrics, &session.y_unit))
        .map_err(|err| format!("unable to write {:?}: {}", report_path, err))?;

    log::info!("exported chart to {:?}", image_path);
    Ok(())
}

/// Find a free file name in `dir`: while `<name>.<extension>` exists, strip
/// any trailing parenthesized counter and append the next integer, checked
/// iteratively until a free name is found.
pub fn find_unique_name(name: &str, dir: &Path, extension: &str) -> String {
    let mut candidate = name.to_string();
    let mut counter = 1;
    while dir.join(format!("{}.{}", candidate, extension)).exists() {
        let base = candidate
            .split('(')
            .next()
            .unwrap_or_default()
            .to_string();
        candidate = format!("{}({})", base, counter);
        counter += 1;
    }
    candidate
}
