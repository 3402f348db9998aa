use std::io::{self, Write};

/// Bordered plain-text table with a line between every row and a caption underneath.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    caption: Option<String>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Table {
            headers: headers.iter().map(|&h| h.to_owned()).collect(),
            rows: Vec::new(),
            caption: None,
        }
    }

    /// Extra cells beyond the header count are dropped, missing ones are left blank.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn set_caption(&mut self, caption: String) {
        self.caption = Some(caption);
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        let widths = self.column_widths();
        let border = border_line(&widths);

        writeln!(out, "{border}")?;
        writeln!(out, "{}", cell_line(&self.headers, &widths))?;
        writeln!(out, "{border}")?;

        for row in &self.rows {
            writeln!(out, "{}", cell_line(row, &widths))?;
            writeln!(out, "{border}")?;
        }

        if let Some(caption) = &self.caption {
            writeln!(out, "{caption}")?;
        }

        Ok(())
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();

        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        widths
    }
}

// private

// +------+-------+
fn border_line(widths: &[usize]) -> String {
    let segments: String = widths
        .iter()
        .map(|width| format!("{}+", "-".repeat(width + 2)))
        .collect();

    format!("+{segments}")
}

// | cell | cell  |
fn cell_line(cells: &[String], widths: &[usize]) -> String {
    let segments: String = widths
        .iter()
        .enumerate()
        .map(|(i, &width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = width.saturating_sub(cell.chars().count());

            format!(" {}{} |", cell, " ".repeat(pad))
        })
        .collect();

    format!("|{segments}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &Table) -> String {
        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();

        String::from_utf8(out).unwrap()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|&c| c.to_owned()).collect()
    }

    #[test]
    fn renders_rows_with_separators_and_caption() {
        let mut table = Table::new(&["Type", "Year", "Month", "Average", "Maximum", "Hours"]);
        table.add_row(row(&["AI", "2022", "all", "1.5", "3", "1000"]));
        table.add_row(row(&["AI", "2023", "1", "2", "4", "50"]));
        table.set_caption("Report Date: 2023-01-01".to_owned());

        let expected = "\
+------+------+-------+---------+---------+-------+
| Type | Year | Month | Average | Maximum | Hours |
+------+------+-------+---------+---------+-------+
| AI   | 2022 | all   | 1.5     | 3       | 1000  |
+------+------+-------+---------+---------+-------+
| AI   | 2023 | 1     | 2       | 4       | 50    |
+------+------+-------+---------+---------+-------+
Report Date: 2023-01-01
";

        assert_eq!(render(&table), expected);
    }

    #[test]
    fn widens_columns_for_long_cells() {
        let mut table = Table::new(&["Name"]);
        table.add_row(row(&["elephantsql"]));

        let rendered = render(&table);

        assert!(rendered.starts_with("+-------------+\n| Name        |\n"));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut table = Table::new(&["Name"]);
        table.add_row(row(&["café"]));

        assert!(render(&table).contains("| café |"));
    }

    #[test]
    fn pads_short_rows() {
        let mut table = Table::new(&["A", "B"]);
        table.add_row(row(&["x"]));

        assert!(render(&table).contains("| x |   |"));
    }

    #[test]
    fn no_caption_no_trailing_line() {
        let table = Table::new(&["A"]);

        assert_eq!(render(&table), "+---+\n| A |\n+---+\n");
    }
}
