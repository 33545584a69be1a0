use crate::format;
use crate::notify::{push_failure, push_success};
use crate::pagination::{self, DEFAULT_PER_PAGE};
use crate::services::{
    AdminContext, AdminService, ServiceResult, Withdrawal, STATUS_PAID, STATUS_PENDING,
};
use serde_json::json;
use tracing::error;

/// Withdrawal processing: list pending requests, mark them paid. Ordering
/// is newest request first, with the identifier as a tie-breaker for
/// records the API returns without a request timestamp.
pub struct WithdrawalsController<S: AdminService> {
    service: S,
}

impl<S: AdminService> WithdrawalsController<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn show(&self, ctx: &mut AdminContext) -> ServiceResult<()> {
        self.refresh(ctx);
        self.paginate(ctx);
        Ok(())
    }

    pub fn refresh(&self, ctx: &mut AdminContext) {
        ctx.loading = true;
        match self.service.fetch_pending_withdrawals() {
            Ok(mut withdrawals) => {
                withdrawals
                    .sort_by(|a, b| (b.requested_at, b.id).cmp(&(a.requested_at, a.id)));
                ctx.withdrawals = withdrawals;
            }
            Err(err) => {
                error!(error = %err, "failed to load withdrawals");
                push_failure(ctx, "Failed to load withdrawals");
            }
        }
        ctx.loading = false;
    }

    pub fn paginate(&self, ctx: &mut AdminContext) {
        let per_page = ctx
            .settings
            .int("withdrawals_per_page")
            .unwrap_or(DEFAULT_PER_PAGE as i64)
            .max(1) as usize;
        let total_pages = pagination::total_pages(ctx.withdrawals.len(), per_page);
        let page = pagination::clamp_page(ctx.request.int("page").unwrap_or(1), total_pages);
        let current = pagination::page_slice(&ctx.withdrawals, page, per_page);
        let info = pagination::page_info(page, total_pages);

        let rows: Vec<_> = current.iter().map(render_withdrawal_row).collect();
        ctx.context.set("page_withdrawals", rows);
        ctx.context.set("page", page as i64);
        ctx.context.set("total_pages", total_pages as i64);
        ctx.context.set("has_previous", info.has_previous);
        ctx.context.set("has_next", info.has_next);
        ctx.context.set("empty", ctx.withdrawals.is_empty());
    }

    pub fn next_page(&self, ctx: &mut AdminContext) {
        let page = ctx.context.int("page").unwrap_or(1);
        ctx.request.set("page", page + 1);
        self.paginate(ctx);
    }

    pub fn previous_page(&self, ctx: &mut AdminContext) {
        let page = ctx.context.int("page").unwrap_or(1);
        ctx.request.set("page", page - 1);
        self.paginate(ctx);
    }

    pub fn mark_paid(&self, ctx: &mut AdminContext, withdrawal_id: i64) -> ServiceResult<()> {
        match self.service.mark_withdrawal_paid(withdrawal_id) {
            Ok(()) => {
                push_success(ctx, "Withdrawal marked as PAID");
                self.refresh(ctx);
                self.paginate(ctx);
            }
            Err(err) => {
                error!(error = %err, withdrawal_id, "failed to mark withdrawal paid");
                push_failure(ctx, "Failed to update withdrawal");
            }
        }
        Ok(())
    }
}

fn render_withdrawal_row(withdrawal: &Withdrawal) -> serde_json::Value {
    let status_class = match withdrawal.status.as_str() {
        STATUS_PAID => "status-won",
        STATUS_PENDING => "status-pending",
        _ => "status-lost",
    };
    json!({
        "id": withdrawal.id,
        "userName": withdrawal.user_name,
        "bankName": withdrawal.bank_name,
        "accountNumber": withdrawal.account_number,
        "accountName": withdrawal.account_name,
        "amount": format::naira(withdrawal.amount),
        "status": withdrawal.status,
        "statusClass": status_class,
        "payable": !withdrawal.is_paid(),
        "requestedAt": format::opt_local_datetime(withdrawal.requested_at),
        "processedAt": format::opt_local_datetime(withdrawal.processed_at),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::notifications;
    use crate::services::InMemoryService;

    #[test]
    fn mark_paid_round_trips_through_a_refetch() {
        let service = InMemoryService::new_with_sample();
        let controller = WithdrawalsController::new(service);
        let mut ctx = AdminContext::default();
        controller.show(&mut ctx).unwrap();

        controller.mark_paid(&mut ctx, 9001).unwrap();
        let withdrawal = ctx.withdrawals.iter().find(|w| w.id == 9001).unwrap();
        assert_eq!(withdrawal.status, STATUS_PAID);
        assert!(withdrawal.processed_at.is_some());
        let notes = notifications(&ctx);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0]["text"], "Withdrawal marked as PAID");
    }

    #[test]
    fn untimestamped_requests_fall_back_to_id_order() {
        let service = InMemoryService::new_with_sample();
        service.seed_withdrawals(vec![
            Withdrawal {
                id: 3,
                ..Withdrawal::default()
            },
            Withdrawal {
                id: 7,
                ..Withdrawal::default()
            },
        ]);
        let controller = WithdrawalsController::new(service);
        let mut ctx = AdminContext::default();
        controller.show(&mut ctx).unwrap();
        let ids: Vec<_> = ctx.withdrawals.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![7, 3]);
    }

    #[test]
    fn paid_rows_lose_the_pay_action() {
        let service = InMemoryService::new_with_sample();
        let controller = WithdrawalsController::new(service);
        let mut ctx = AdminContext::default();
        controller.show(&mut ctx).unwrap();
        let rows = ctx
            .context
            .get("page_withdrawals")
            .unwrap()
            .as_array()
            .unwrap()
            .clone();
        let paid = rows.iter().find(|row| row["id"] == 9003).unwrap();
        assert_eq!(paid["payable"], false);
        let pending = rows.iter().find(|row| row["id"] == 9002).unwrap();
        assert_eq!(pending["payable"], true);
    }
}
