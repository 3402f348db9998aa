use crate::io::usage_client::{AppUsage, ServiceUsage, ServiceYearlyReport};

const WHOLE_YEAR: &str = "all";

/// The figures every usage record carries, whatever its wire shape.
pub trait UsageFigures {
    fn year(&self) -> i32;

    /// `None` for yearly aggregates.
    fn month(&self) -> Option<u32>;

    fn average(&self) -> f64;

    fn maximum(&self) -> f64;

    fn hours(&self) -> f64;
}

/// One table line, already turned into display strings.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRow {
    pub kind: &'static str,

    /// Only service rows have one.
    pub name: Option<String>,

    pub year: String,
    pub month: String,
    pub average: String,
    pub maximum: String,
    pub hours: String,
}

impl RenderRow {
    pub fn yearly(kind: &'static str, name: Option<&str>, figures: &dyn UsageFigures) -> Self {
        Self::new(kind, name, figures, WHOLE_YEAR.to_owned())
    }

    /// A monthly entry without a month is a yearly one in disguise, so it reads "all" too.
    pub fn monthly(kind: &'static str, name: Option<&str>, figures: &dyn UsageFigures) -> Self {
        let month = figures
            .month()
            .map_or_else(|| WHOLE_YEAR.to_owned(), |month| month.to_string());

        Self::new(kind, name, figures, month)
    }

    fn new(
        kind: &'static str,
        name: Option<&str>,
        figures: &dyn UsageFigures,
        month: String,
    ) -> Self {
        // Plain Display on purpose: 3.0 reads "3", 1.5 reads "1.5".
        RenderRow {
            kind,
            name: name.map(str::to_owned),
            year: figures.year().to_string(),
            month,
            average: figures.average().to_string(),
            maximum: figures.maximum().to_string(),
            hours: figures.hours().to_string(),
        }
    }

    /// Cells in column order. The name column only exists when there is a name.
    pub fn into_cells(self) -> Vec<String> {
        let mut cells = vec![self.kind.to_owned()];

        cells.extend(self.name);
        cells.extend([
            self.year,
            self.month,
            self.average,
            self.maximum,
            self.hours,
        ]);

        cells
    }
}

impl UsageFigures for AppUsage {
    fn year(&self) -> i32 {
        self.year
    }

    fn month(&self) -> Option<u32> {
        self.month
    }

    fn average(&self) -> f64 {
        self.average
    }

    fn maximum(&self) -> f64 {
        self.maximum
    }

    fn hours(&self) -> f64 {
        self.hours
    }
}

impl UsageFigures for ServiceUsage {
    fn year(&self) -> i32 {
        self.year
    }

    fn month(&self) -> Option<u32> {
        self.month
    }

    fn average(&self) -> f64 {
        self.average
    }

    fn maximum(&self) -> f64 {
        self.maximum
    }

    fn hours(&self) -> f64 {
        self.hours
    }
}

impl UsageFigures for ServiceYearlyReport {
    fn year(&self) -> i32 {
        self.year
    }

    fn month(&self) -> Option<u32> {
        None
    }

    fn average(&self) -> f64 {
        self.average
    }

    fn maximum(&self) -> f64 {
        self.maximum
    }

    fn hours(&self) -> f64 {
        self.hours
    }
}
