//! Statistics components for the dashboard

/// Renders a statistics card with value, label, and optional color.
pub fn stat_card(value: &str, label: &str, color: Option<&str>) -> String {
    let value_color = color.unwrap_or("text-emerald-400");

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-6 text-center">
            <div class="text-2xl font-bold {value_color} mb-1">{value}</div>
            <div class="text-gray-400 text-sm">{label}</div>
        </div>"#
    )
}

/// Renders a responsive grid of stat cards.
pub fn stats_grid(cards: &[String]) -> String {
    format!(
        r#"<div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-8">{}</div>"#,
        cards.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_card_contains_value_and_label() {
        let card = stat_card("12", "Open Tickets", Some("text-green-400"));
        assert!(card.contains("12"));
        assert!(card.contains("Open Tickets"));
        assert!(card.contains("text-green-400"));
    }

    #[test]
    fn test_stats_grid_joins_cards() {
        let grid = stats_grid(&[stat_card("1", "A", None), stat_card("2", "B", None)]);
        assert!(grid.contains(">A<"));
        assert!(grid.contains(">B<"));
    }
}
