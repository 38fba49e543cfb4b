use crate::stats::ChannelStats;

const SEPARATOR: &str = "-----------------";

/// Format the metrics of all plotted channels as a plain-text report, one
/// block per channel:
///
/// ```text
/// Voltage
/// Mean: 35 V
/// Std: 12.909944487358056 V
///
/// -----------------
/// ```
pub fn format_report(metrics: &[ChannelStats], y_unit: &str) -> String {
    let mut out = String::new();
    for stats in metrics {
        out.push_str(&stats.name);
        out.push('\n');
        out.push_str(&format!("Mean: {} {}\n", stats.mean, y_unit));
        out.push_str(&format!("Std: {} {}\n\n", stats.std, y_unit));
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out
}

/// Parse a report written by `format_report` back into channel metrics.
/// Blocks that do not follow the expected shape are skipped.
pub fn parse_report(raw: &str) -> Vec<ChannelStats> {
    let mut metrics = Vec::new();
    let mut lines = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != SEPARATOR);

    while let Some(name) = lines.next() {
        let (Some(mean_line), Some(std_line)) = (lines.next(), lines.next()) else {
            break;
        };
        let (Some(mean), Some(std)) = (
            parse_stat_line(mean_line, "Mean:"),
            parse_stat_line(std_line, "Std:"),
        ) else {
            log::warn!("malformed report block for '{}', skipping", name);
            continue;
        };
        metrics.push(ChannelStats {
            name: name.to_string(),
            mean,
            std,
        });
    }
    metrics
}

fn parse_stat_line(line: &str, prefix: &str) -> Option<f64> {
    line.strip_prefix(prefix)?
        .split_whitespace()
        .next()?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_round_trip() {
        let metrics = vec![
            ChannelStats {
                name: "Voltage".to_string(),
                mean: 35.0,
                std: (500.0_f64 / 3.0).sqrt(),
            },
            ChannelStats {
                name: "Current".to_string(),
                mean: -0.25,
                std: 1.5e-3,
            },
        ];

        let parsed = parse_report(&format_report(&metrics, "V"));

        assert_eq!(parsed.len(), metrics.len());
        for (a, b) in parsed.iter().zip(&metrics) {
            assert_eq!(a.name, b.name);
            assert!((a.mean - b.mean).abs() < 1e-12);
            assert!((a.std - b.std).abs() < 1e-12);
        }
    }

    #[test]
    fn test_report_layout() {
        let metrics = vec![ChannelStats {
            name: "Voltage".to_string(),
            mean: 1.5,
            std: 0.5,
        }];
        let report = format_report(&metrics, "mV");
        assert_eq!(
            report,
            "Voltage\nMean: 1.5 mV\nStd: 0.5 mV\n\n-----------------\n"
        );
    }

    #[test]
    fn test_empty_report() {
        assert!(format_report(&[], "V").is_empty());
        assert!(parse_report("").is_empty());
    }
}
