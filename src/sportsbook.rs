use crate::format;
use crate::notify::{push_failure, push_success};
use crate::pagination::{self, DEFAULT_PER_PAGE};
use crate::services::{
    AdminContext, AdminService, ServiceResult, SportBet, STATUS_LOST, STATUS_WON,
};
use crate::totals::sport_page_totals;
use serde_json::json;
use tracing::error;

/// Sportsbook bet management: listing plus WON/LOST settlement. The
/// target status is passed through as a plain string; whatever the caller
/// supplies goes out on the wire.
pub struct SportBetsController<S: AdminService> {
    service: S,
}

impl<S: AdminService> SportBetsController<S> {
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
        match self.service.fetch_sport_bets() {
            Ok(mut bets) => {
                bets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                ctx.sport_bets = bets;
            }
            Err(err) => {
                error!(error = %err, "failed to load sport bets");
                push_failure(ctx, "Failed to load bets");
            }
        }
        ctx.loading = false;
    }

    pub fn paginate(&self, ctx: &mut AdminContext) {
        let per_page = ctx
            .settings
            .int("bets_per_page")
            .unwrap_or(DEFAULT_PER_PAGE as i64)
            .max(1) as usize;
        let total_pages = pagination::total_pages(ctx.sport_bets.len(), per_page);
        let page = pagination::clamp_page(ctx.request.int("page").unwrap_or(1), total_pages);
        let current = pagination::page_slice(&ctx.sport_bets, page, per_page);
        let totals = sport_page_totals(current);
        let info = pagination::page_info(page, total_pages);

        let rows: Vec<_> = current.iter().map(render_sport_bet_row).collect();
        ctx.context.set("page_bets", rows);
        ctx.context.set("page", page as i64);
        ctx.context.set("total_pages", total_pages as i64);
        ctx.context.set("has_previous", info.has_previous);
        ctx.context.set("has_next", info.has_next);
        ctx.context.set("empty", ctx.sport_bets.is_empty());
        ctx.context.set("total_staked", totals.total_staked);
        ctx.context
            .set("total_potential_win", totals.total_potential_win);
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

    /// Writes the status, notifies, and refetches on success. No
    /// optimistic update: until the refetch lands the table still shows
    /// the old status.
    pub fn set_status(&self, ctx: &mut AdminContext, bet_id: i64, status: &str) -> ServiceResult<()> {
        match self.service.update_sport_bet_status(bet_id, status) {
            Ok(()) => {
                push_success(ctx, &format!("Bet {bet_id} marked {status}"));
                self.refresh(ctx);
                self.paginate(ctx);
            }
            Err(err) => {
                error!(error = %err, bet_id, "failed to update bet status");
                push_failure(ctx, "Failed to update bet");
            }
        }
        Ok(())
    }

    pub fn mark_won(&self, ctx: &mut AdminContext, bet_id: i64) -> ServiceResult<()> {
        self.set_status(ctx, bet_id, STATUS_WON)
    }

    pub fn mark_lost(&self, ctx: &mut AdminContext, bet_id: i64) -> ServiceResult<()> {
        self.set_status(ctx, bet_id, STATUS_LOST)
    }
}

fn render_sport_bet_row(bet: &SportBet) -> serde_json::Value {
    let status_class = match bet.status.as_str() {
        STATUS_WON => "status-won",
        STATUS_LOST => "status-lost",
        _ => "status-pending",
    };
    json!({
        "id": bet.id,
        "betCode": bet.bet_code,
        "sportsbook": bet.sportsbook_name,
        "userName": bet.user.as_ref().map(|user| user.name.clone())
            .unwrap_or_else(|| format::PLACEHOLDER.into()),
        "phoneNumber": bet.user.as_ref().map(|user| user.phone_number.clone())
            .unwrap_or_else(|| format::PLACEHOLDER.into()),
        "amount": format::naira(bet.amount),
        "potentialWin": format::naira(bet.potential_win),
        "potentialLoss": format::naira(bet.potential_loss),
        "status": bet.status,
        "statusClass": status_class,
        "pending": bet.is_pending(),
        "createdAt": format::opt_local_datetime(bet.created_at),
        "updatedAt": format::opt_local_datetime(bet.updated_at),
    })
}
