//! Intake page - the ticket submission form

use axum::response::Html;
use helpline_core::ticket::CATEGORIES;

use crate::components::layout;
use crate::pages::render_page;

/// Renders the ticket intake form.
///
/// The form submits to `POST /api/ticket` via an inline fetch; on success
/// the form is swapped for a panel showing the new ticket id and a link to
/// the dashboard with that id highlighted.
pub async fn intake_page() -> Html<String> {
    let form = format!(
        r#"<form id="ticket-form" class="space-y-6">
            {}
            {}
            {}
            {}
            <button type="submit" id="submit-button"
                    class="w-full py-3 rounded-lg text-sm font-bold bg-emerald-500 hover:bg-emerald-600 text-white transition-colors">
                Submit Ticket
            </button>
        </form>

        <div id="success-panel" class="hidden text-center rounded-lg border border-green-400 bg-green-500 bg-opacity-10 p-6">
            <p class="text-green-400 text-sm mb-2">Request accepted</p>
            <div id="success-ticket-id" class="font-mono text-2xl text-green-400"></div>
            <div class="mt-5 space-x-4 text-sm">
                <a id="dashboard-link" href="/dashboard" class="underline text-gray-300 hover:text-white">View dashboard</a>
                <button type="button" id="reset-button" class="underline text-gray-300 hover:text-white">Create another</button>
            </div>
        </div>

        <div id="error-panel" class="hidden text-center rounded-lg border border-red-400 bg-red-500 bg-opacity-10 p-4 text-red-400 text-sm"></div>"#,
        layout::text_input("name", "Name", "text"),
        layout::text_input("email", "Email", "email"),
        layout::select("category", "Category", &CATEGORIES),
        layout::textarea("description", "Description", 4),
    );

    let script = r#"<script>
        const form = document.getElementById("ticket-form");
        form.addEventListener("submit", async (event) => {
            event.preventDefault();
            const button = document.getElementById("submit-button");
            button.disabled = true;
            button.textContent = "Submitting...";

            const body = {
                name: document.getElementById("name").value,
                email: document.getElementById("email").value,
                category: document.getElementById("category").value,
                description: document.getElementById("description").value,
            };

            try {
                const response = await fetch("/api/ticket", {
                    method: "POST",
                    headers: { "Content-Type": "application/json" },
                    body: JSON.stringify(body),
                });
                const data = await response.json();

                if (data.ticketId) {
                    document.getElementById("success-ticket-id").textContent = data.ticketId;
                    document.getElementById("dashboard-link").href =
                        "/dashboard?new=" + encodeURIComponent(data.ticketId);
                    form.classList.add("hidden");
                    document.getElementById("success-panel").classList.remove("hidden");
                    form.reset();
                } else {
                    const panel = document.getElementById("error-panel");
                    panel.textContent = data.error || "Submission failed";
                    panel.classList.remove("hidden");
                }
            } catch (error) {
                const panel = document.getElementById("error-panel");
                panel.textContent = "Unable to reach the server";
                panel.classList.remove("hidden");
            }

            button.disabled = false;
            button.textContent = "Submit Ticket";
        });

        document.getElementById("reset-button").addEventListener("click", () => {
            document.getElementById("success-panel").classList.add("hidden");
            form.classList.remove("hidden");
        });
    </script>"#;

    let content = format!(
        "{}\n{}\n{}",
        layout::page_header(
            "Helpline Support",
            Some("Raise a support ticket and track it on the dashboard"),
        ),
        layout::card(Some("New Ticket"), &form),
        script
    );

    render_page("New Ticket", "intake", &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_intake_page_renders_form() {
        let Html(html) = intake_page().await;

        assert!(html.contains(r#"id="ticket-form""#));
        assert!(html.contains(r#"name="email""#));
        assert!(html.contains("/api/ticket"));
        for category in CATEGORIES {
            assert!(html.contains(&format!("<option>{category}</option>")));
        }
    }
}
