use super::*;

/// Column headers with computed widths plus the rendered rows.
///
/// Invariant: every row has exactly one value per column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultSet {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl ResultSet {
    /// Render `rows` and size each column to its longest entry.
    ///
    /// A column's width is `max(name length, longest rendered value) + 1`,
    /// clamped to `widths`. Lengths count characters. Rows whose length does
    /// not match the column list are rejected with [`Error::RowShape`].
    pub fn new<R, V>(
        names: impl IntoIterator<Item = impl Into<String>>,
        rows: impl IntoIterator<Item = R>,
        widths: ColumnWidths,
    ) -> Result<Self>
    where
        R: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                let row: Vec<String> = row
                    .into_iter()
                    .map(|value| value.into().to_string())
                    .collect();
                if row.len() != names.len() {
                    return Err(Error::RowShape {
                        row: index,
                        expected: names.len(),
                        found: row.len(),
                    });
                }
                Ok(row)
            })
            .collect::<Result<Vec<_>>>()?;

        let columns = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let longest = rows
                    .iter()
                    .map(|row| row[index].chars().count())
                    .fold(name.chars().count(), usize::max);
                Column {
                    width: widths.width_for(longest),
                    name,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            columns = columns.len(),
            rows = rows.len(),
            "result set formatted"
        );
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(set: &ResultSet) -> Vec<(&str, usize)> {
        set.columns()
            .iter()
            .map(|c| (c.name.as_str(), c.width))
            .collect()
    }

    #[test]
    fn short_column_is_clamped_to_min() {
        let set = ResultSet::new(
            ["id"],
            [["1"], ["22"], ["333"]],
            ColumnWidths::default(),
        )
        .expect("result set");
        assert_eq!(widths(&set), vec![("id", 5)]);
    }

    #[test]
    fn long_column_is_clamped_to_max() {
        let long = "x".repeat(40);
        let set = ResultSet::new(
            ["title"],
            [vec![Value::from(long.as_str())]],
            ColumnWidths::default(),
        )
        .expect("result set");
        assert_eq!(widths(&set), vec![("title", 25)]);
        // Values are not truncated, only the width is bounded.
        assert_eq!(set.rows()[0][0], long);
    }

    #[test]
    fn header_counts_towards_width() {
        let set = ResultSet::new(
            ["description", "n"],
            [["a", "1234567"]],
            ColumnWidths::default(),
        )
        .expect("result set");
        assert_eq!(widths(&set), vec![("description", 12), ("n", 8)]);
    }

    #[test]
    fn nulls_are_rendered() {
        let set = ResultSet::new(
            ["a", "b"],
            [vec![Value::Null, Value::from("ok")]],
            ColumnWidths::default(),
        )
        .expect("result set");
        assert_eq!(set.rows(), &[vec!["null".to_string(), "ok".to_string()]]);
    }

    #[test]
    fn widths_count_characters() {
        let set = ResultSet::new(["c"], [["ééééééé"]], ColumnWidths::default())
            .expect("result set");
        assert_eq!(widths(&set), vec![("c", 8)]);
    }

    #[test]
    fn empty_result_uses_names_only() {
        let set = ResultSet::new(
            ["created_at"],
            Vec::<Vec<Value>>::new(),
            ColumnWidths::default(),
        )
        .expect("result set");
        assert!(set.is_empty());
        assert_eq!(widths(&set), vec![("created_at", 11)]);
    }

    #[test]
    fn custom_bounds() {
        let set = ResultSet::new(["id"], [["1"]], ColumnWidths::new(2, 3)).expect("result set");
        assert_eq!(widths(&set), vec![("id", 3)]);
    }

    #[test]
    fn ragged_row_is_rejected() {
        let result = ResultSet::new(
            ["a", "b"],
            [vec!["1", "2"], vec!["3"]],
            ColumnWidths::default(),
        );
        assert!(
            matches!(
                result,
                Err(Error::RowShape {
                    row: 1,
                    expected: 2,
                    found: 1
                })
            ),
            "expected RowShape, got {result:?}"
        );
    }
}
