use crate::format;
use crate::services::AdminContext;
use crate::templates::{field, int_field, render_pagination, rows};
use std::fmt::Write;

pub fn render_bets_dashboard(ctx: &AdminContext) -> String {
    if ctx.loading {
        return "<p class=\"muted\">Loading bets...</p>".into();
    }
    if ctx.context.bool("empty") {
        return "<p class=\"muted\">No bets found</p>".into();
    }

    let mut html = String::new();
    html.push_str(&render_totals(ctx));
    html.push_str("<table class=\"records\"><thead><tr><th>ID</th><th>Username</th><th>Bet Amount</th><th>Cashout Multiplier</th><th>Win Amount</th><th>Lost Amount</th><th>Round ID</th><th>Status</th><th>Placed At</th><th>Cashed Out At</th><th>Copy ID</th></tr></thead><tbody>");
    for row in rows(ctx, "page_bets") {
        writeln!(
            html,
            "<tr><td>{id}</td><td>{username}</td><td class=\"num\">{bet_amount}</td><td class=\"num\">{multiplier}</td><td class=\"num\">{win_amount}</td><td class=\"num\">{lost_amount}</td><td>{round_id}</td><td><span class=\"badge {status_class}\">{status}</span></td><td>{placed_at}</td><td>{cashed_out_at}</td><td><button class=\"copy-btn\" data-copy=\"{id}\">Copy</button></td></tr>",
            id = int_field(&row, "id"),
            username = field(&row, "username"),
            bet_amount = field(&row, "betAmount"),
            multiplier = field(&row, "cashoutMultiplier"),
            win_amount = field(&row, "winAmount"),
            lost_amount = field(&row, "lostAmount"),
            round_id = field(&row, "roundId"),
            status_class = field(&row, "statusClass"),
            status = field(&row, "status"),
            placed_at = field(&row, "placedAt"),
            cashed_out_at = field(&row, "cashedOutAt"),
        )
        .ok();
    }
    html.push_str("</tbody></table>");
    html.push_str(&render_pagination(ctx));
    html
}

fn render_totals(ctx: &AdminContext) -> String {
    let total_win = ctx.context.float("total_win").unwrap_or(0.0);
    let total_lost = ctx.context.float("total_lost_by_players").unwrap_or(0.0);
    let total_house = ctx.context.float("total_made_by_house").unwrap_or(0.0);
    format!(
        "<div class=\"totals\"><span class=\"totals-win\">Total Made By Players: {}</span><span class=\"totals-lost\">Total Lost By Players: {}</span><span class=\"totals-house\">Total Made By House: {}</span></div>",
        format::naira(total_win),
        format::naira(total_lost),
        format::naira(total_house),
    )
}
