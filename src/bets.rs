use crate::format;
use crate::notify::push_failure;
use crate::pagination::{self, DEFAULT_PER_PAGE};
use crate::services::{
    AdminContext, AdminService, HouseBet, ServiceResult, STATUS_CASHED_OUT, STATUS_LOST,
};
use crate::totals::page_totals;
use serde_json::json;
use tracing::error;

/// House-side bet listing. Read-only: bets here settle inside the crash
/// game itself, the admin only inspects them.
pub struct BetsDashboardController<S: AdminService> {
    service: S,
}

impl<S: AdminService> BetsDashboardController<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn show(&self, ctx: &mut AdminContext) -> ServiceResult<()> {
        self.refresh(ctx);
        self.paginate(ctx);
        Ok(())
    }

    /// One fetch per call; a failure keeps the previous record set and
    /// surfaces a single notification. Nothing guards against a late
    /// response overwriting a newer one.
    pub fn refresh(&self, ctx: &mut AdminContext) {
        ctx.loading = true;
        match self.service.fetch_house_bets() {
            Ok(mut bets) => {
                bets.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
                ctx.house_bets = bets;
            }
            Err(err) => {
                error!(error = %err, "failed to load bets");
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
        let total_pages = pagination::total_pages(ctx.house_bets.len(), per_page);
        let page = pagination::clamp_page(ctx.request.int("page").unwrap_or(1), total_pages);
        let current = pagination::page_slice(&ctx.house_bets, page, per_page);
        let totals = page_totals(current);
        let info = pagination::page_info(page, total_pages);

        let rows: Vec<_> = current.iter().map(render_bet_row).collect();
        ctx.context.set("page_bets", rows);
        ctx.context.set("page", page as i64);
        ctx.context.set("total_pages", total_pages as i64);
        ctx.context.set("has_previous", info.has_previous);
        ctx.context.set("has_next", info.has_next);
        ctx.context.set("empty", ctx.house_bets.is_empty());
        ctx.context.set("total_win", totals.total_win);
        ctx.context
            .set("total_lost_by_players", totals.total_lost_by_players);
        ctx.context
            .set("total_made_by_house", totals.total_made_by_house);
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
}

fn render_bet_row(bet: &HouseBet) -> serde_json::Value {
    let cashed_out = bet.is_cashed_out();
    json!({
        "id": bet.bet_id,
        "username": bet.username,
        "betAmount": format::naira(bet.bet_amount),
        "cashoutMultiplier": format::multiplier(bet.cashout_multiplier),
        "winAmount": if cashed_out {
            format::naira(bet.win_amount.unwrap_or(0.0))
        } else {
            format::PLACEHOLDER.to_string()
        },
        "lostAmount": format::naira(bet.lost_amount()),
        "roundId": bet.round_id,
        "status": if cashed_out { STATUS_CASHED_OUT } else { STATUS_LOST },
        "statusClass": if cashed_out { "status-won" } else { "status-lost" },
        "placedAt": format::opt_local_datetime(bet.placed_at),
        "cashedOutAt": if cashed_out {
            format::opt_local_datetime(bet.cashed_out_at)
        } else {
            format::PLACEHOLDER.to_string()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::notifications;
    use crate::services::InMemoryService;

    #[test]
    fn show_sorts_newest_first() {
        let service = InMemoryService::new_with_sample();
        let controller = BetsDashboardController::new(service);
        let mut ctx = AdminContext::default();
        controller.show(&mut ctx).unwrap();
        let times: Vec<_> = ctx.house_bets.iter().map(|bet| bet.placed_at).collect();
        let mut sorted = times.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(times, sorted);
        assert!(!ctx.loading);
    }

    #[test]
    fn failed_refresh_keeps_previous_bets() {
        let service = InMemoryService::new_with_sample();
        let controller = BetsDashboardController::new(service.clone());
        let mut ctx = AdminContext::default();
        controller.show(&mut ctx).unwrap();
        let before = ctx.house_bets.clone();

        service.set_fail_fetches(true);
        controller.refresh(&mut ctx);
        assert_eq!(ctx.house_bets, before);
        assert!(!ctx.loading);
        assert_eq!(notifications(&ctx).len(), 1);
    }

    #[test]
    fn page_rows_are_preformatted() {
        let service = InMemoryService::new_with_sample();
        let controller = BetsDashboardController::new(service);
        let mut ctx = AdminContext::default();
        controller.show(&mut ctx).unwrap();
        let rows = ctx.context.get("page_bets").unwrap().as_array().unwrap();
        assert!(!rows.is_empty());
        let amount = rows[0]["betAmount"].as_str().unwrap();
        assert!(amount.starts_with('\u{20a6}'));
    }

    #[test]
    fn per_page_override_is_respected() {
        let service = InMemoryService::new_with_sample();
        let controller = BetsDashboardController::new(service);
        let mut ctx = AdminContext::default();
        ctx.settings.set("bets_per_page", 2);
        controller.show(&mut ctx).unwrap();
        assert_eq!(ctx.context.int("total_pages"), Some(2));
        let rows = ctx.context.get("page_bets").unwrap().as_array().unwrap();
        assert_eq!(rows.len(), 2);
    }
}
