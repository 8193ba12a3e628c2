//! Row-major grid partitioning.

/// Cards per grid row.
pub const GRID_WIDTH: usize = 3;

/// Splits `items` into rows of `width`, left-to-right, top-to-bottom.
///
/// The last row may be shorter. A width of zero is treated as one.
pub fn rows<T>(items: &[T], width: usize) -> std::slice::Chunks<'_, T> {
    items.chunks(width.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_of_three() {
        let items: Vec<u32> = (1..=7).collect();
        let grid: Vec<&[u32]> = rows(&items, GRID_WIDTH).collect();
        assert_eq!(grid, vec![&[1, 2, 3][..], &[4, 5, 6][..], &[7][..]]);
    }

    #[test]
    fn test_exact_multiple() {
        let items = ["a", "b", "c", "d", "e", "f"];
        assert_eq!(rows(&items, 3).count(), 2);
    }

    #[test]
    fn test_empty() {
        let items: [u8; 0] = [];
        assert_eq!(rows(&items, 3).count(), 0);
    }

    #[test]
    fn test_zero_width() {
        let items = [1, 2];
        assert_eq!(rows(&items, 0).count(), 2);
    }
}
