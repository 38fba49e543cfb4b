/// A rectangular measurement table: one ordered index column (usually time)
/// plus any number of named data channels. All channels have exactly as many
/// values as the index has rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub index_name: String,
    pub index: Vec<f64>,
    pub channels: Vec<Channel>,
}

/// One data column of a `Table`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Channel {
    pub name: String,
    pub values: Vec<f64>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn num_rows(&self) -> usize {
        self.index.len()
    }

    /// Symmetrically trim the index range from both ends.
    ///
    /// Keeps the rows whose index lies in `[min + offset, max - offset]`
    /// inclusive. The function is pure and order-preserving; for a sorted
    /// index, the result is a contiguous sub-range. An offset large enough
    /// that the bounds cross naturally yields a table with no rows but the
    /// headers intact. An empty table is returned unchanged.
    pub fn crop(&self, offset: f64) -> Table {
        if self.is_empty() {
            return self.clone();
        }

        let min = self.index.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.index.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let (lower, upper) = (min + offset, max - offset);

        let keep: Vec<usize> = self
            .index
            .iter()
            .enumerate()
            .filter(|(_, x)| lower <= **x && **x <= upper)
            .map(|(i, _)| i)
            .collect();

        Table {
            index_name: self.index_name.clone(),
            index: keep.iter().map(|&i| self.index[i]).collect(),
            channels: self
                .channels
                .iter()
                .map(|chan| Channel {
                    name: chan.name.clone(),
                    values: keep.iter().map(|&i| chan.values[i]).collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn sample_table() -> Table {
        Table {
            index_name: "Time".to_string(),
            index: vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            channels: vec![Channel {
                name: "Value".to_string(),
                values: vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0],
            }],
        }
    }

    #[test]
    fn test_crop_with_zero_offset_is_identity() {
        init();
        let table = sample_table();
        assert_eq!(table.crop(0.0), table);
    }

    #[test]
    fn test_crop_trims_both_ends() {
        init();
        let cropped = sample_table().crop(1.0);
        assert_eq!(cropped.index, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(cropped.channels[0].values, vec![20.0, 30.0, 40.0, 50.0]);
        assert_eq!(cropped.index_name, "Time");
    }

    #[test]
    fn test_crop_result_is_contiguous() {
        init();
        let table = sample_table();
        let cropped = table.crop(2.0);
        // The kept rows must form a contiguous run of the original rows.
        let start = table
            .index
            .iter()
            .position(|x| *x == cropped.index[0])
            .unwrap();
        assert_eq!(
            cropped.index[..],
            table.index[start..start + cropped.num_rows()]
        );
    }

    #[test]
    fn test_crop_with_oversized_offset_yields_empty_table() {
        init();
        let cropped = sample_table().crop(3.5);
        assert!(cropped.is_empty());
        // Headers survive even when the selection is empty.
        assert_eq!(cropped.index_name, "Time");
        assert_eq!(cropped.channels[0].name, "Value");
        assert!(cropped.channels[0].values.is_empty());
    }

    #[test]
    fn test_crop_of_empty_table_is_noop() {
        init();
        let empty = Table::default();
        assert_eq!(empty.crop(1.0), empty);
    }
}
