use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use thiserror::Error;

use crate::table::{Channel, Table};

/// A parsed input file: the table itself plus the axis units and the display
/// name derived from the file path.
///
/// The y-unit is taken from the header of the second file column (the first
/// data channel); all channels are assumed to share it. This is a fixed
/// design assumption of the measurement files, not to be generalized.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadedDataset {
    pub table: Table,
    pub x_unit: String,
    pub y_unit: String,
    pub name: String,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to read input file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to read spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::XlsxError),
    #[error("file contains no table data")]
    EmptyFile,
    #[error("file needs an index column and at least one data channel")]
    NoChannels,
    #[error("header '{0}' carries no parenthesized unit")]
    MissingUnit(String),
}

impl LoadedDataset {
    /// Load a dataset from disk, dispatching on the file extension.
    ///
    /// Unrecognized extensions yield an empty dataset rather than an error;
    /// the caller simply has nothing to plot.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let (headers, columns) = match extension.as_str() {
            "csv" => {
                let raw = std::fs::read_to_string(path)?;
                parse_delimited(&raw)?
            }
            "xlsx" => read_xlsx(path)?,
            other => {
                log::warn!("unrecognized file extension '{}', treating dataset as empty", other);
                return Ok(Self::default());
            }
        };

        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
            .to_string();

        Self::from_raw(headers, columns, name)
    }

    /// Assemble a dataset from raw headers and columns: extract the axis
    /// units, strip the unit suffixes from all headers, key the table by the
    /// first column.
    fn from_raw(
        headers: Vec<String>,
        mut columns: Vec<Vec<f64>>,
        name: String,
    ) -> Result<Self, LoadError> {
        if headers.len() < 2 {
            return Err(LoadError::NoChannels);
        }

        let x_unit = extract_unit(&headers[0])
            .ok_or_else(|| LoadError::MissingUnit(headers[0].clone()))?
            .to_string();
        let y_unit = extract_unit(&headers[1])
            .ok_or_else(|| LoadError::MissingUnit(headers[1].clone()))?
            .to_string();

        let index = columns.remove(0);
        let channels = headers
            .iter()
            .skip(1)
            .zip(columns)
            .map(|(header, values)| Channel {
                name: strip_unit_suffix(header),
                values,
            })
            .collect();

        Ok(Self {
            table: Table {
                index_name: strip_unit_suffix(&headers[0]),
                index,
                channels,
            },
            x_unit,
            y_unit,
            name,
        })
    }
}

/// The unit is the text between the first pair of parentheses.
fn extract_unit(header: &str) -> Option<&str> {
    let start = header.find('(')?;
    let rest = &header[start + 1..];
    let end = rest.find(')')?;
    Some(&rest[..end])
}

/// Remove a parenthesized suffix from a header, e.g. "Voltage(V)" → "Voltage".
fn strip_unit_suffix(header: &str) -> String {
    match (header.find('('), header.rfind(')')) {
        (Some(start), Some(end)) if start < end => {
            let mut name = String::with_capacity(header.len());
            name.push_str(&header[..start]);
            name.push_str(&header[end + 1..]);
            name.trim().to_string()
        }
        _ => header.trim().to_string(),
    }
}

/// Parse delimited text into headers plus numeric columns.
///
/// The delimiter is sniffed from the header line (',', ';' or tab). Lines
/// starting with '#' and blank lines are skipped. Rows with a wrong cell
/// count or unparseable numbers are dropped with a warning, the rest of the
/// file is still used.
fn parse_delimited(raw: &str) -> Result<(Vec<String>, Vec<Vec<f64>>), LoadError> {
    let mut lines = raw
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'));

    let Some((_, header_line)) = lines.next() else {
        return Err(LoadError::EmptyFile);
    };
    let delimiter = sniff_delimiter(header_line);

    let headers: Vec<String> = header_line
        .split(delimiter)
        .map(|cell| cell.trim().to_string())
        .collect();
    let num_columns = headers.len();
    if num_columns < 2 {
        return Err(LoadError::NoChannels);
    }

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); num_columns];
    for (line_no, line) in lines {
        let cells: Vec<&str> = line.split(delimiter).map(str::trim).collect();
        if cells.len() != num_columns {
            log::warn!(
                "line {}: expected {} cells, found {}, skipping line",
                line_no + 1,
                num_columns,
                cells.len()
            );
            continue;
        }
        let mut row = Vec::with_capacity(num_columns);
        for cell in &cells {
            match cell.parse::<f64>() {
                Ok(value) => row.push(value),
                Err(_) => {
                    log::warn!(
                        "line {}: unable to parse '{}' as number, skipping line",
                        line_no + 1,
                        cell
                    );
                    break;
                }
            }
        }
        if row.len() != num_columns {
            continue;
        }
        for (column, value) in columns.iter_mut().zip(row) {
            column.push(value);
        }
    }

    Ok((headers, columns))
}

fn sniff_delimiter(header_line: &str) -> char {
    [',', ';', '\t']
        .into_iter()
        .max_by_key(|delim| header_line.matches(*delim).count())
        .filter(|delim| header_line.contains(*delim))
        .unwrap_or(',')
}

/// Read the first worksheet of an XLSX file: first row are the headers, the
/// remaining rows are numeric data. Rows with non-numeric cells are skipped
/// with a warning.
fn read_xlsx(path: &Path) -> Result<(Vec<String>, Vec<Vec<f64>>), LoadError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::EmptyFile)??;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Err(LoadError::EmptyFile);
    };
    let headers: Vec<String> = header_row.iter().map(cell_to_string).collect();
    let num_columns = headers.len();
    if num_columns < 2 {
        return Err(LoadError::NoChannels);
    }

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); num_columns];
    for (row_no, row) in rows.enumerate() {
        let numbers: Vec<f64> = row.iter().filter_map(cell_to_number).collect();
        if numbers.len() != num_columns {
            log::warn!(
                "sheet row {}: expected {} numeric cells, found {}, skipping row",
                row_no + 2,
                num_columns,
                numbers.len()
            );
            continue;
        }
        for (column, value) in columns.iter_mut().zip(numbers) {
            column.push(value);
        }
    }

    Ok((headers, columns))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.trim().to_string(),
        other => other.to_string(),
    }
}

fn cell_to_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(value) => Some(*value),
        Data::Int(value) => Some(*value as f64),
        Data::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn write_temp_file(file_name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(file_name);
        std::fs::write(&path, content).expect("unable to write test fixture");
        path
    }

    #[test]
    fn test_load_well_formed_csv() {
        init();
        let path = write_temp_file(
            "measure-table-well-formed.csv",
            "Time(s),Value(V),Current(V)\n0,10,1\n1,20,2\n2,30,3\n",
        );

        let dataset = LoadedDataset::from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(dataset.x_unit, "s");
        assert_eq!(dataset.y_unit, "V");
        assert_eq!(dataset.name, "measure-table-well-formed");
        assert_eq!(dataset.table.index_name, "Time");
        assert_eq!(dataset.table.index, vec![0.0, 1.0, 2.0]);
        let names: Vec<&str> = dataset
            .table
            .channels
            .iter()
            .map(|chan| chan.name.as_str())
            .collect();
        assert_eq!(names, vec!["Value", "Current"]);
        assert_eq!(dataset.table.channels[0].values, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_unrecognized_extension_yields_empty_dataset() {
        init();
        let path = write_temp_file("measure-table-unknown.dat", "Time(s),Value(V)\n0,1\n");

        let dataset = LoadedDataset::from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(dataset.table.is_empty());
        assert!(dataset.x_unit.is_empty());
        assert!(dataset.y_unit.is_empty());
        assert!(dataset.name.is_empty());
    }

    #[test]
    fn test_missing_unit_in_index_header_is_an_error() {
        init();
        let result = LoadedDataset::from_raw(
            vec!["Time".to_string(), "Value(V)".to_string()],
            vec![vec![0.0], vec![1.0]],
            "x".to_string(),
        );
        assert!(matches!(result, Err(LoadError::MissingUnit(_))));
    }

    #[test]
    fn test_semicolon_delimited_input() {
        init();
        let (headers, columns) = parse_delimited("Time(s);Value(V)\n0;1\n1;2\n").unwrap();
        assert_eq!(headers, vec!["Time(s)", "Value(V)"]);
        assert_eq!(columns, vec![vec![0.0, 1.0], vec![1.0, 2.0]]);
    }

    #[test]
    fn test_bad_rows_are_skipped() {
        init();
        let raw = "Time(s),Value(V)\n0,1\nnot,a number\n1,2\n2,3,4\n# comment\n3,4\n";
        let (_, columns) = parse_delimited(raw).unwrap();
        assert_eq!(columns[0], vec![0.0, 1.0, 3.0]);
        assert_eq!(columns[1], vec![1.0, 2.0, 4.0]);
    }

    #[test]
    fn test_single_column_file_is_rejected() {
        init();
        assert!(matches!(
            parse_delimited("Time(s)\n0\n1\n"),
            Err(LoadError::NoChannels)
        ));
    }

    #[test]
    fn test_unit_extraction_and_stripping() {
        init();
        assert_eq!(extract_unit("Time(s)"), Some("s"));
        assert_eq!(extract_unit("Voltage (mV)"), Some("mV"));
        assert_eq!(extract_unit("Voltage"), None);
        assert_eq!(strip_unit_suffix("Time(s)"), "Time");
        assert_eq!(strip_unit_suffix("Voltage (mV)"), "Voltage");
        assert_eq!(strip_unit_suffix("Plain"), "Plain");
    }
}
