//! Layout components - headers, cards, navigation, form controls

/// Renders a page header with title and optional subtitle.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{s}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="mb-8">
            <h1 class="text-3xl font-bold text-white">{title}</h1>
            {subtitle_html}
        </div>"#
    )
}

/// Renders a card container with optional header.
pub fn card(title: Option<&str>, content: &str) -> String {
    let header_html = title
        .map(|t| format!(r#"<h3 class="text-lg font-semibold text-white mb-6">{t}</h3>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-6 mb-6">
            {header_html}
            {content}
        </div>"#
    )
}

/// Renders the main navigation bar.
///
/// Highlights the active page based on the provided page identifier.
pub fn nav_bar(active_page: &str) -> String {
    let nav_item = |href: &str, label: &str, page: &str| {
        let active_class = if page == active_page {
            "text-emerald-400 bg-emerald-400 bg-opacity-10"
        } else {
            "text-gray-300 hover:text-emerald-400 hover:bg-gray-700"
        };

        format!(
            r#"<a href="{href}" class="px-3 py-2 rounded-md text-sm font-medium transition-colors {active_class}">{label}</a>"#
        )
    };

    format!(
        r#"<nav class="bg-gray-800 border-b border-gray-700 sticky top-0 z-50">
            <div class="max-w-5xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-8">
                        <div class="text-2xl font-bold text-emerald-400">Helpline</div>
                        <div class="hidden md:flex space-x-6">
                            {}
                            {}
                        </div>
                    </div>
                    <button id="theme-toggle" class="text-xs px-3 py-1 rounded-full border border-gray-600 text-gray-300 hover:bg-gray-700">
                        Theme
                    </button>
                </div>
            </div>
        </nav>"#,
        nav_item("/", "New Ticket", "intake"),
        nav_item("/dashboard", "Dashboard", "dashboard")
    )
}

/// Renders a labelled text input.
pub fn text_input(name: &str, label: &str, input_type: &str) -> String {
    format!(
        r#"<div>
            <label for="{name}" class="block text-sm text-gray-400 mb-2">{label}</label>
            <input type="{input_type}" id="{name}" name="{name}" required
                   class="w-full px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white focus:outline-none focus:ring-2 focus:ring-emerald-400 focus:border-transparent" />
        </div>"#
    )
}

/// Renders a labelled select with the given options.
pub fn select(name: &str, label: &str, options: &[&str]) -> String {
    let options_html: String = options
        .iter()
        .map(|o| format!("<option>{o}</option>"))
        .collect();

    format!(
        r#"<div>
            <label for="{name}" class="block text-sm text-gray-400 mb-2">{label}</label>
            <select id="{name}" name="{name}"
                    class="w-full px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white">
                {options_html}
            </select>
        </div>"#
    )
}

/// Renders a labelled textarea.
pub fn textarea(name: &str, label: &str, rows: u8) -> String {
    format!(
        r#"<div>
            <label for="{name}" class="block text-sm text-gray-400 mb-2">{label}</label>
            <textarea id="{name}" name="{name}" rows="{rows}" required
                      class="w-full px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white focus:outline-none focus:ring-2 focus:ring-emerald-400 focus:border-transparent"></textarea>
        </div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_bar_highlights_active_page() {
        let nav = nav_bar("dashboard");
        assert!(nav.contains("Helpline"));
        assert!(nav.contains(r#"href="/dashboard""#));
        // Only the active item carries the highlight class
        assert_eq!(nav.matches("bg-opacity-10").count(), 1);
    }

    #[test]
    fn test_select_renders_all_options() {
        let html = select("category", "Category", &["Network", "Server"]);
        assert!(html.contains("<option>Network</option>"));
        assert!(html.contains("<option>Server</option>"));
    }
}
