use crate::api::ImportSummary;
use std::fmt;

/// Text report formatter for an import summary
pub struct TextReport<'a> {
    summary: &'a ImportSummary,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(summary: &'a ImportSummary) -> Self {
        Self { summary }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Import Summary")?;
        writeln!(f, "==============")?;
        writeln!(f)?;
        writeln!(f, "Database:       {}", self.summary.destination.display())?;
        writeln!(f, "Listings:       {}", self.summary.listings)?;
        writeln!(f, "Patients:       {}", self.summary.patients)?;
        writeln!(f, "Studies:        {}", self.summary.studies)?;
        writeln!(f, "Series rows:    {}", self.summary.rows)?;
        if self.summary.coercion_warnings > 0 {
            writeln!(
                f,
                "Unreadable numeric tokens stored as NULL: {}",
                self.summary.coercion_warnings
            )?;
        }
        Ok(())
    }
}
