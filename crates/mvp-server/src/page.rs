use axum::extract::{Query, State};
use axum::response::Html;

use mvp_core::{LeaderboardView, TOP_PERFORMER_THRESHOLD};

use crate::api::ViewQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Background image, relative to the data directory it is served from.
pub const BACKGROUND_ASSET: &str = "assets/background.png";

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;color:#fff;background:#111}\
.bg{position:fixed;inset:0;background-size:cover;background-position:center;filter:brightness(.8) contrast(1.1)}\
.shade{position:fixed;inset:0;background:linear-gradient(rgba(0,0,0,.6),rgba(0,0,0,.4),rgba(0,0,0,.8))}\
main{position:relative;max-width:48rem;margin:0 auto;padding:3rem 1rem}\
.panel{border-radius:1rem;background:rgba(0,0,0,.3);border:1px solid rgba(255,255,255,.1);overflow:hidden}\
header{padding:2rem;display:flex;justify-content:space-between;flex-wrap:wrap;gap:1rem}\
h1{margin:0;font-size:2.2rem}.muted{color:rgba(255,255,255,.7)}\
.toggle{display:inline-block;padding:.6rem 1rem;border-radius:.5rem;border:1px solid #fff;color:#fff;text-decoration:none}\
.toggle.on{background:#fff;color:#000}\
.card{display:flex;justify-content:space-between;align-items:center;margin:1rem 1.5rem;padding:1rem;border-radius:.75rem;background:rgba(255,255,255,.1);border:1px solid rgba(255,255,255,.2)}\
.card.podium{border-left:4px solid #facc15}\
.rank{width:2.5rem;height:2.5rem;border-radius:50%;display:inline-flex;align-items:center;justify-content:center;font-weight:700;background:rgba(255,255,255,.2);margin-right:1rem}\
.podium .rank{background:#facc15;color:#000}\
.score{font-size:1.6rem;font-weight:800;text-align:right}\
footer{padding:1rem 1.5rem;border-top:1px solid rgba(255,255,255,.2);background:rgba(255,255,255,.1)}";

/// Escape text for an HTML body or double-quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_toggle(view: &LeaderboardView<'_>) -> String {
    if view.is_filtered() {
        format!(
            "<a class=\"toggle on\" href=\"/\" aria-pressed=\"true\">\
             Showing Top Performers ({TOP_PERFORMER_THRESHOLD}+ points)</a>"
        )
    } else {
        "<a class=\"toggle\" href=\"/?filter=top\" aria-pressed=\"false\">\
         Toggle Top Performers</a>"
            .to_string()
    }
}

fn render_rows(view: &LeaderboardView<'_>) -> String {
    if view.is_empty() {
        return "<div class=\"card muted\">No players found matching the criteria.</div>"
            .to_string();
    }

    let mut rows = String::new();
    for entry in view.entries() {
        let class = if entry.podium { "card podium" } else { "card" };
        rows.push_str(&format!(
            "<div class=\"{class}\"><div><span class=\"rank\">{rank}</span>\
             <strong>{name}</strong><div class=\"muted\">ID: {id}</div></div>\
             <div><div class=\"score\">{score}</div><div class=\"muted\">MVP Points</div></div></div>",
            rank = entry.rank,
            name = escape_html(&entry.player.name),
            id = entry.player.id,
            score = entry.player.score,
        ));
    }
    rows
}

/// Render the full leaderboard page for the given view. The background
/// layer is only emitted when the image is actually being served.
pub fn render_leaderboard(view: &LeaderboardView<'_>, with_background: bool) -> String {
    let background = if with_background {
        format!("<div class=\"bg\" style=\"background-image:url('/{BACKGROUND_ASSET}')\"></div>")
    } else {
        String::new()
    };

    let footer = if view.is_filtered() {
        format!(
            "<footer>Showing {} of {} players with {TOP_PERFORMER_THRESHOLD}+ points, top \
             <strong>{}</strong>.</footer>",
            view.displayed(),
            view.total(),
            view.top_count(),
        )
    } else {
        String::new()
    };

    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>MVP Leaderboard</title><style>{STYLE}</style></head><body>\
         {background}<div class=\"shade\"></div><main><div class=\"panel\"><header><div>\
         <h1>MVP Leaderboard</h1><p class=\"muted\">Player rankings based on match performance</p>\
         </div><div><div class=\"muted\">Total players</div><div class=\"score\">{total}</div></div>\
         </header><div style=\"padding:0 2rem\">{toggle}<p class=\"muted\">{summary}</p></div>\
         <section>{rows}</section>{footer}</div></main></body></html>",
        total = view.total(),
        toggle = render_toggle(view),
        summary = view.summary(),
        rows = render_rows(view),
    )
}

/// GET / — server-rendered leaderboard page.
pub async fn leaderboard_page(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Html<String>, AppError> {
    let filtered = query.is_filtered()?;
    let board = state.leaderboard().await;
    let background = tokio::fs::try_exists(state.config.asset_path(BACKGROUND_ASSET))
        .await
        .unwrap_or(false);
    Ok(Html(render_leaderboard(&board.view(filtered), background)))
}
