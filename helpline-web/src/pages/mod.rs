//! Full page handlers using the component system
//!
//! Pages compose components into complete HTML responses sharing one base
//! template with navigation and theme handling.

pub mod dashboard;
pub mod intake;

// Re-export page handlers
pub use dashboard::dashboard_page;
pub use intake::intake_page;

use axum::response::Html;

use crate::components::layout;

/// Renders a page with the shared base template.
pub fn render_page(title: &str, active_nav: &str, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{} - Helpline</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <style>
                html.light body {{ background-color: #f1f5f9; color: #0f172a; }}
                html.light .bg-gray-800 {{ background-color: #ffffff; }}
                html.light .bg-gray-700 {{ background-color: #e2e8f0; }}
                html.light .text-white {{ color: #0f172a; }}
                html.light .text-gray-300, html.light .text-gray-400 {{ color: #475569; }}
            </style>
        </head>
        <body class="bg-gray-900 text-white min-h-screen font-sans">
            {}

            <main class="max-w-5xl mx-auto px-4 py-8">
                {}
            </main>

            <script>
                if (localStorage.getItem("theme") === "light") {{
                    document.documentElement.classList.add("light");
                }}
                document.getElementById("theme-toggle").addEventListener("click", () => {{
                    const light = document.documentElement.classList.toggle("light");
                    localStorage.setItem("theme", light ? "light" : "dark");
                }});
            </script>
        </body>
        </html>"#,
        title,
        layout::nav_bar(active_nav),
        content
    );

    Html(html)
}
