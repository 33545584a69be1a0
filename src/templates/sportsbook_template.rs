use crate::format;
use crate::services::AdminContext;
use crate::templates::{field, int_field, render_pagination, rows};
use serde_json::Value;
use std::fmt::Write;

pub fn render_sportsbook_dashboard(ctx: &AdminContext) -> String {
    if ctx.loading {
        return "<p class=\"muted\">Loading bets...</p>".into();
    }
    if ctx.context.bool("empty") {
        return "<p class=\"muted\">No bets found</p>".into();
    }

    let total_staked = ctx.context.float("total_staked").unwrap_or(0.0);
    let total_potential = ctx.context.float("total_potential_win").unwrap_or(0.0);
    let mut html = format!(
        "<div class=\"totals\"><span>Total Staked: {}</span><span>Total Potential Win: {}</span></div>",
        format::naira(total_staked),
        format::naira(total_potential),
    );

    html.push_str("<table class=\"records\"><thead><tr><th>ID</th><th>Bet Code</th><th>Sportsbook</th><th>User</th><th>Phone</th><th>Amount</th><th>Potential Win</th><th>Potential Loss</th><th>Status</th><th>Created At</th><th>Actions</th></tr></thead><tbody>");
    for row in rows(ctx, "page_bets") {
        let actions = render_actions(&row);
        writeln!(
            html,
            "<tr><td>{id}</td><td>{bet_code}</td><td>{sportsbook}</td><td>{user}</td><td>{phone}</td><td class=\"num\">{amount}</td><td class=\"num\">{win}</td><td class=\"num\">{loss}</td><td><span class=\"badge {status_class}\">{status}</span></td><td>{created_at}</td><td>{actions}</td></tr>",
            id = int_field(&row, "id"),
            bet_code = field(&row, "betCode"),
            sportsbook = field(&row, "sportsbook"),
            user = field(&row, "userName"),
            phone = field(&row, "phoneNumber"),
            amount = field(&row, "amount"),
            win = field(&row, "potentialWin"),
            loss = field(&row, "potentialLoss"),
            status_class = field(&row, "statusClass"),
            status = field(&row, "status"),
            created_at = field(&row, "createdAt"),
        )
        .ok();
    }
    html.push_str("</tbody></table>");
    html.push_str(&render_pagination(ctx));
    html
}

fn render_actions(row: &Value) -> String {
    let id = int_field(row, "id");
    let bet_code = field(row, "betCode");
    let mut actions = format!("<button class=\"copy-btn\" data-copy=\"{bet_code}\">Copy</button>");
    if row.get("pending").and_then(Value::as_bool).unwrap_or(false) {
        actions.push_str(&format!(
            "<button class=\"action-btn won\" data-bet=\"{id}\">Won</button><button class=\"action-btn lost\" data-bet=\"{id}\">Lost</button>"
        ));
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InMemoryService;
    use crate::sportsbook::SportBetsController;

    #[test]
    fn pending_rows_offer_settlement_actions() {
        let service = InMemoryService::new_with_sample();
        let controller = SportBetsController::new(service);
        let mut ctx = AdminContext::default();
        controller.show(&mut ctx).unwrap();
        let html = render_sportsbook_dashboard(&ctx);
        assert!(html.contains("data-bet=\"501\""));
        assert!(html.contains(">Won<"));
        assert!(html.contains(">Lost<"));
    }

    #[test]
    fn settled_rows_only_offer_copy() {
        let service = InMemoryService::new_with_sample();
        let controller = SportBetsController::new(service.clone());
        let mut ctx = AdminContext::default();
        controller.show(&mut ctx).unwrap();
        controller.mark_won(&mut ctx, 501).unwrap();
        controller.set_status(&mut ctx, 503, "LOST").unwrap();
        let html = render_sportsbook_dashboard(&ctx);
        assert!(!html.contains("data-bet="));
        assert!(html.contains("data-copy=\"BC-7F2K\""));
    }

    #[test]
    fn missing_user_renders_placeholders() {
        let service = InMemoryService::new_with_sample();
        let controller = SportBetsController::new(service);
        let mut ctx = AdminContext::default();
        controller.show(&mut ctx).unwrap();
        let html = render_sportsbook_dashboard(&ctx);
        assert!(html.contains("<td>-</td>"));
    }
}
