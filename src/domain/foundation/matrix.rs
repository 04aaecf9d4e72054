//! Row-major matrix of criterion scores.

use super::AnalysisError;

/// Rows are alternatives, columns are criteria.
pub type Matrix = Vec<Vec<f64>>;

/// Returns the column count of a non-empty rectangular matrix.
///
/// # Errors
/// - `EmptyInput` if there are no rows or the first row is empty
/// - `DimensionMismatch` if any row length differs from the first
pub fn column_count(matrix: &[Vec<f64>]) -> Result<usize, AnalysisError> {
    let columns = matrix.first().map(|row| row.len()).unwrap_or(0);
    if columns == 0 {
        return Err(AnalysisError::EmptyInput);
    }

    if let Some(row) = matrix.iter().find(|row| row.len() != columns) {
        return Err(AnalysisError::dimension_mismatch(
            "matrix row",
            columns,
            row.len(),
        ));
    }

    Ok(columns)
}

/// Iterates the values of column `j`.
pub fn column(matrix: &[Vec<f64>], j: usize) -> impl Iterator<Item = f64> + '_ {
    matrix.iter().map(move |row| row[j])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_count_of_rectangular_matrix() {
        let matrix = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        assert_eq!(column_count(&matrix), Ok(3));
    }

    #[test]
    fn column_count_rejects_empty_matrix() {
        let matrix: Matrix = Vec::new();
        assert_eq!(column_count(&matrix), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn column_count_rejects_rows_without_criteria() {
        let matrix = vec![Vec::new(), Vec::new()];
        assert_eq!(column_count(&matrix), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn column_count_rejects_ragged_rows() {
        let matrix = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            column_count(&matrix),
            Err(AnalysisError::dimension_mismatch("matrix row", 2, 1))
        );
    }

    #[test]
    fn column_yields_values_top_to_bottom() {
        let matrix = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let values: Vec<f64> = column(&matrix, 1).collect();
        assert_eq!(values, vec![2.0, 4.0]);
    }
}
