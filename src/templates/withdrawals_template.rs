use crate::services::AdminContext;
use crate::templates::{field, int_field, render_pagination, rows};
use serde_json::Value;
use std::fmt::Write;

pub fn render_withdrawals_dashboard(ctx: &AdminContext) -> String {
    if ctx.loading {
        return "<p class=\"muted\">Loading withdrawals...</p>".into();
    }
    if ctx.context.bool("empty") {
        return "<p class=\"muted\">No pending withdrawals</p>".into();
    }

    let mut html = String::from("<table class=\"records\"><thead><tr><th>ID</th><th>User</th><th>Bank</th><th>Account No</th><th>Account Name</th><th>Amount</th><th>Status</th><th>Requested At</th><th>Processed At</th><th>Actions</th></tr></thead><tbody>");
    for row in rows(ctx, "page_withdrawals") {
        let pay = if row.get("payable").and_then(Value::as_bool).unwrap_or(false) {
            format!(
                "<button class=\"action-btn pay\" data-withdrawal=\"{}\">Pay</button>",
                int_field(&row, "id")
            )
        } else {
            String::new()
        };
        writeln!(
            html,
            "<tr><td>{id}</td><td>{user}</td><td>{bank}</td><td>{account_number}</td><td>{account_name}</td><td class=\"num\">{amount}</td><td><span class=\"badge {status_class}\">{status}</span></td><td>{requested_at}</td><td>{processed_at}</td><td>{pay}</td></tr>",
            id = int_field(&row, "id"),
            user = field(&row, "userName"),
            bank = field(&row, "bankName"),
            account_number = field(&row, "accountNumber"),
            account_name = field(&row, "accountName"),
            amount = field(&row, "amount"),
            status_class = field(&row, "statusClass"),
            status = field(&row, "status"),
            requested_at = field(&row, "requestedAt"),
            processed_at = field(&row, "processedAt"),
        )
        .ok();
    }
    html.push_str("</tbody></table>");
    html.push_str(&render_pagination(ctx));
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InMemoryService;
    use crate::withdrawals::WithdrawalsController;

    #[test]
    fn pay_button_only_for_unpaid_rows() {
        let service = InMemoryService::new_with_sample();
        let controller = WithdrawalsController::new(service);
        let mut ctx = AdminContext::default();
        controller.show(&mut ctx).unwrap();
        let html = render_withdrawals_dashboard(&ctx);
        assert!(html.contains("data-withdrawal=\"9001\""));
        assert!(html.contains("data-withdrawal=\"9002\""));
        assert!(!html.contains("data-withdrawal=\"9003\""));
    }

    #[test]
    fn empty_set_renders_the_empty_state() {
        let service = InMemoryService::new_with_sample();
        service.seed_withdrawals(Vec::new());
        let controller = WithdrawalsController::new(service);
        let mut ctx = AdminContext::default();
        controller.show(&mut ctx).unwrap();
        let html = render_withdrawals_dashboard(&ctx);
        assert!(html.contains("No pending withdrawals"));
        assert!(!html.contains("<table"));
    }
}
