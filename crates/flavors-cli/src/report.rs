// Summary report rendering

use flavors_storage::RankedTotal;

const HEADER: &str = "Count  Flavor\n-----  ------\n";
const EMPTY_MESSAGE: &str = "No flavor texts found yet.\n";

/// Render ranked totals as the summary table.
///
/// Totals are printed in the order given: the aggregation query already
/// ranks them by total descending, word ascending. An empty slice renders
/// the "nothing recorded yet" indicator instead of an empty table.
pub fn render(totals: &[RankedTotal]) -> String {
    if totals.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut out = String::from(HEADER);
    for entry in totals {
        out.push_str(&format!("{:>5}  {}\n", entry.total, entry.word));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(word: &str, total: u64) -> RankedTotal {
        RankedTotal {
            word: word.to_string(),
            total,
        }
    }

    #[test]
    fn test_empty_totals_render_placeholder() {
        assert_eq!(render(&[]), "No flavor texts found yet.\n");
    }

    #[test]
    fn test_table_layout_is_exact() {
        let totals = vec![
            total("Thinking", 2),
            total("Moonwalking", 1),
            total("Refactoring", 1),
        ];
        let expected = "\
Count  Flavor
-----  ------
    2  Thinking
    1  Moonwalking
    1  Refactoring
";
        assert_eq!(render(&totals), expected);
    }

    #[test]
    fn test_counts_are_right_aligned_to_five() {
        let rendered = render(&[total("Thinking", 12345)]);
        assert!(rendered.ends_with("12345  Thinking\n"));

        let rendered = render(&[total("Thinking", 7)]);
        assert!(rendered.ends_with("    7  Thinking\n"));
    }
}
