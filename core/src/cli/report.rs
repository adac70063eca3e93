use crate::api::ResolvedRecord;
use crate::types::ResolveMode;
use std::fmt;

/// Counts of a resolution run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub rows: usize,
    pub resolved: usize,
    pub patient_not_found: usize,
    pub study_yr_not_found: usize,
    pub slice_not_found: usize,
    pub wrong_slice_annotation: usize,
}

impl RunSummary {
    pub fn from_records(records: &[ResolvedRecord]) -> Self {
        records.iter().fold(Self::default(), |mut s, r| {
            s.rows += 1;
            s.resolved += usize::from(r.is_resolved());
            s.patient_not_found += usize::from(r.patient_not_found);
            s.study_yr_not_found += usize::from(r.study_yr_not_found);
            s.slice_not_found += usize::from(r.slice_not_found);
            s.wrong_slice_annotation += usize::from(r.wrong_slice_annotation == Some(true));
            s
        })
    }
}

/// Text report of a resolution run
pub struct TextReport<'a> {
    summary: &'a RunSummary,
    mode: ResolveMode,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(summary: &'a RunSummary, mode: ResolveMode) -> Self {
        Self { summary, mode }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.summary;
        writeln!(f, "NLST Path Resolution")?;
        writeln!(f, "====================")?;
        writeln!(f)?;
        writeln!(f, "Mode:               {}", self.mode)?;
        writeln!(f, "Rows:               {}", s.rows)?;
        writeln!(f, "Resolved:           {}", s.resolved)?;
        writeln!(f, "Patient not found:  {}", s.patient_not_found)?;
        writeln!(f, "Study yr not found: {}", s.study_yr_not_found)?;
        if self.mode.is_slice() {
            writeln!(f, "Slice not found:    {}", s.slice_not_found)?;
            writeln!(f, "Wrong annotation:   {}", s.wrong_slice_annotation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AbnormalityRecord;
    use std::path::PathBuf;

    fn records() -> Vec<ResolvedRecord> {
        let rec = AbnormalityRecord::new("100012", 0, Some(45), "51");

        let mut ok = ResolvedRecord::unresolved(&rec);
        ok.resolved_path = Some(PathBuf::from("a.dcm"));
        ok.wrong_slice_annotation = Some(false);

        let mut wrong = ok.clone();
        wrong.wrong_slice_annotation = Some(true);

        let mut no_patient = ResolvedRecord::unresolved(&rec);
        no_patient.patient_not_found = true;

        let mut no_slice = ResolvedRecord::unresolved(&rec);
        no_slice.slice_not_found = true;

        vec![ok, wrong, no_patient, no_slice]
    }

    #[test]
    fn test_summary_counts() {
        let summary = RunSummary::from_records(&records());
        assert_eq!(
            summary,
            RunSummary {
                rows: 4,
                resolved: 2,
                patient_not_found: 1,
                study_yr_not_found: 0,
                slice_not_found: 1,
                wrong_slice_annotation: 1,
            }
        );
    }

    #[test]
    fn test_text_report_format() {
        let summary = RunSummary::from_records(&records());

        let output = TextReport::new(&summary, ResolveMode::Slice).to_string();
        assert!(output.contains("NLST Path Resolution"));
        assert!(output.contains("Mode:               slice"));
        assert!(output.contains("Rows:               4"));
        assert!(output.contains("Resolved:           2"));
        assert!(output.contains("Wrong annotation:   1"));

        let output = TextReport::new(&summary, ResolveMode::Folder).to_string();
        assert!(!output.contains("Slice not found"));
    }
}
