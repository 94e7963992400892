//! Dashboard page - table of every ticket in the spreadsheet

use axum::extract::{Query, State};
use axum::response::Html;
use chrono::Utc;
use helpline_core::ticket::{DEFAULT_STATUS, Ticket};
use serde::Deserialize;

use crate::components::{escape_html, layout, stats};
use crate::pages::render_page;
use crate::server::AppState;

/// Query parameters accepted by the dashboard.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Ticket id to highlight, set by the intake success panel
    pub new: Option<String>,
}

/// Renders the ticket dashboard.
///
/// Reads the whole sheet and renders it as a table. A `?new=` id that the
/// sheet does not show yet gets a placeholder row first; spreadsheet reads
/// can lag the append that just happened.
pub async fn dashboard_page(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let mut tickets: Vec<Ticket> = match state.store.fetch_rows().await {
        Ok(rows) => rows.iter().map(|row| Ticket::from_row(row)).collect(),
        Err(e) => {
            tracing::error!("dashboard fetch failed: {e}");
            let content = layout::card(
                None,
                r#"<p class="text-red-400 text-center py-8">Unable to load tickets</p>"#,
            );
            return render_page("Dashboard", "dashboard", &content);
        }
    };

    if let Some(new_id) = &query.new {
        let exists = tickets.iter().any(|t| &t.ticket_id == new_id);
        if !exists {
            tickets.insert(
                0,
                Ticket {
                    ticket_id: new_id.clone(),
                    name: "You".to_string(),
                    email: String::new(),
                    category: "New".to_string(),
                    description: String::new(),
                    status: DEFAULT_STATUS.to_string(),
                    created_at: Utc::now().to_rfc3339(),
                },
            );
        }
    }

    let open_count = tickets.iter().filter(|t| t.status == DEFAULT_STATUS).count();
    let summary = stats::stats_grid(&[
        stats::stat_card(&tickets.len().to_string(), "Total Tickets", None),
        stats::stat_card(&open_count.to_string(), "Open", Some("text-green-400")),
    ]);

    let rows_html: String = tickets
        .iter()
        .map(|ticket| {
            let highlight = if Some(&ticket.ticket_id) == query.new.as_ref() {
                "bg-green-500 bg-opacity-20"
            } else {
                "hover:bg-gray-700"
            };
            // Every cell is user-controlled sheet content
            format!(
                r#"<tr class="border-t border-gray-700 transition-colors {highlight}">
                    <td class="p-3 font-mono text-xs text-emerald-400">{}</td>
                    <td class="p-3">{}</td>
                    <td class="p-3">{}</td>
                    <td class="p-3">{}</td>
                    <td class="p-3 text-xs text-gray-400">{}</td>
                </tr>"#,
                escape_html(&ticket.ticket_id),
                escape_html(&ticket.name),
                escape_html(&ticket.category),
                escape_html(&ticket.status),
                escape_html(&ticket.created_at)
            )
        })
        .collect();

    let table = if tickets.is_empty() {
        r#"<p class="text-gray-400 text-center py-8">No tickets yet</p>"#.to_string()
    } else {
        format!(
            r#"<div class="overflow-x-auto">
                <table class="min-w-full text-sm">
                    <thead class="text-left text-gray-400">
                        <tr>
                            <th class="p-3">Ticket ID</th>
                            <th class="p-3">Name</th>
                            <th class="p-3">Category</th>
                            <th class="p-3">Status</th>
                            <th class="p-3">Created</th>
                        </tr>
                    </thead>
                    <tbody>{rows_html}</tbody>
                </table>
            </div>"#
        )
    };

    let content = format!(
        "{}\n{}\n{}",
        layout::page_header("Ticket Dashboard", Some("All support tickets raised via Helpline")),
        summary,
        layout::card(None, &table)
    );

    render_page("Dashboard", "dashboard", &content)
}
