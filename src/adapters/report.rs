//! Report Adapter - Renders rankings for the terminal.

use crate::domain::analysis::{RankedResult, TopsisAnalysis};

/// Renders a ranking as a plain-text table.
///
/// ```text
/// The Ranking:
/// Sr. No.   Alternative Score
/// 1.        A           0.500000
/// ```
pub fn render_table(result: &RankedResult, precision: usize) -> String {
    let name_width = result
        .rankings
        .iter()
        .map(|r| r.name.chars().count())
        .chain(std::iter::once("Alternative".len()))
        .max()
        .unwrap_or_default();

    let mut out = String::from("The Ranking:\n");
    out.push_str(&format!("{:<9} {:<name_width$} Score\n", "Sr. No.", "Alternative"));
    for entry in &result.rankings {
        out.push_str(&format!(
            "{:<9} {:<name_width$} {:.precision$}\n",
            format!("{}.", entry.rank),
            entry.name,
            entry.score,
        ));
    }
    out
}

/// Renders the ranking as pretty-printed JSON.
pub fn render_json(result: &RankedResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

/// Renders every stage of an analysis as pretty-printed JSON.
pub fn render_analysis_json(analysis: &TopsisAnalysis) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::SimilarityRanker;

    fn ranking() -> RankedResult {
        let names = vec!["Saturn".to_string(), "Ford".to_string()];
        SimilarityRanker::rank_scores(&names, &[0.25, 0.75]).unwrap()
    }

    #[test]
    fn table_lists_entries_in_rank_order() {
        let table = render_table(&ranking(), 3);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "The Ranking:");
        assert_eq!(lines[1], "Sr. No.   Alternative Score");
        assert_eq!(lines[2], "1.        Ford        0.750");
        assert_eq!(lines[3], "2.        Saturn      0.250");
    }

    #[test]
    fn table_widens_for_long_names() {
        let names = vec!["A particularly long name".to_string()];
        let result = SimilarityRanker::rank_scores(&names, &[1.0]).unwrap();
        let table = render_table(&result, 1);

        assert!(table.contains("1.        A particularly long name 1.0"));
    }

    #[test]
    fn json_is_an_array_of_entries() {
        let json = render_json(&ranking()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["name"], "Ford");
        assert_eq!(value[1]["rank"], 2);
    }
}
