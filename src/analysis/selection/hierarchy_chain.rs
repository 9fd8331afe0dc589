//! Range comparison utilities for SelectionRange chains.

use tower_lsp_server::ls_types::Range;

/// Check if range `outer` contains range `inner` (bounds inclusive).
///
/// Equal ranges contain each other.
pub fn range_contains(outer: &Range, inner: &Range) -> bool {
    let outer_start = (outer.start.line, outer.start.character);
    let outer_end = (outer.end.line, outer.end.character);
    let inner_start = (inner.start.line, inner.start.character);
    let inner_end = (inner.end.line, inner.end.character);

    outer_start <= inner_start && inner_end <= outer_end
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_lsp_server::ls_types::Position;

    #[test]
    fn test_range_contains_nested() {
        // Range a: lines 0-10, Range b: lines 2-5
        let a = Range::new(Position::new(0, 0), Position::new(10, 0));
        let b = Range::new(Position::new(2, 0), Position::new(5, 0));

        assert!(range_contains(&a, &b), "a should contain b");
        assert!(!range_contains(&b, &a), "b does not contain a");
    }

    #[test]
    fn test_range_contains_equal() {
        let a = Range::new(Position::new(2, 5), Position::new(5, 10));
        assert!(range_contains(&a, &a), "equal ranges contain each other");
    }

    #[test]
    fn test_range_contains_disjoint() {
        let a = Range::new(Position::new(0, 0), Position::new(5, 0));
        let b = Range::new(Position::new(10, 0), Position::new(15, 0));

        assert!(!range_contains(&a, &b), "disjoint ranges");
    }

    #[test]
    fn test_range_contains_overlapping() {
        // The shape of a list container against one of its items: starts
        // earlier but ends on the same line
        let item = Range::new(Position::new(4, 0), Position::new(5, 0));
        let list = Range::new(Position::new(3, 0), Position::new(5, 0));

        assert!(!range_contains(&item, &list));
        assert!(range_contains(&list, &item));
    }

    #[test]
    fn test_range_contains_compares_characters_on_same_line() {
        let a = Range::new(Position::new(1, 2), Position::new(1, 8));
        let b = Range::new(Position::new(1, 1), Position::new(1, 8));

        assert!(!range_contains(&a, &b));
        assert!(range_contains(&b, &a));
    }
}
