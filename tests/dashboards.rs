use bet_admin_rust::bets::BetsDashboardController;
use bet_admin_rust::notify::notifications;
use bet_admin_rust::services::{
    AdminContext, HouseBet, InMemoryService, Withdrawal, STATUS_CASHED_OUT, STATUS_LOST,
};
use bet_admin_rust::templates::bets_template::render_bets_dashboard;
use bet_admin_rust::templates::withdrawals_template::render_withdrawals_dashboard;
use bet_admin_rust::withdrawals::WithdrawalsController;
use chrono::{Duration, Utc};

#[test]
fn bets_arrive_newest_first() {
    let service = InMemoryService::new_with_sample();
    let controller = BetsDashboardController::new(service);
    let mut ctx = AdminContext::default();
    controller.show(&mut ctx).unwrap();

    // Sample data is seeded out of order; ordering comes from the fetch.
    let ids: Vec<i64> = ctx.house_bets.iter().map(|bet| bet.bet_id).collect();
    assert_eq!(ids, vec![1004, 1002, 1001, 1003]);
}

#[test]
fn fetch_failure_retains_state_and_notifies_once() {
    let service = InMemoryService::new_with_sample();
    let controller = BetsDashboardController::new(service.clone());
    let mut ctx = AdminContext::default();
    controller.show(&mut ctx).unwrap();
    let before = ctx.house_bets.clone();

    service.set_fail_fetches(true);
    controller.refresh(&mut ctx);
    controller.paginate(&mut ctx);

    assert!(!ctx.loading);
    assert_eq!(ctx.house_bets, before);
    assert_eq!(notifications(&ctx).len(), 1);
    assert_eq!(notifications(&ctx)[0]["text"], "Failed to load bets");
}

#[test]
fn fetch_failure_on_an_empty_context_keeps_it_empty() {
    let service = InMemoryService::new_with_sample();
    service.set_fail_fetches(true);
    let controller = BetsDashboardController::new(service);
    let mut ctx = AdminContext::default();
    controller.show(&mut ctx).unwrap();

    assert!(ctx.house_bets.is_empty());
    assert!(!ctx.loading);
    assert_eq!(notifications(&ctx).len(), 1);
    assert!(render_bets_dashboard(&ctx).contains("No bets found"));
}

#[test]
fn page_totals_track_the_visible_page_only() {
    let now = Utc::now();
    let service = InMemoryService::new_with_sample();
    // Page 1 gets ten lost bets, page 2 a single cashed-out one.
    let mut bets: Vec<HouseBet> = (1..=10)
        .map(|id| HouseBet {
            bet_id: id,
            bet_amount: 100.0,
            status: STATUS_LOST.into(),
            placed_at: Some(now - Duration::minutes(id)),
            ..HouseBet::default()
        })
        .collect();
    bets.push(HouseBet {
        bet_id: 11,
        bet_amount: 100.0,
        win_amount: Some(900.0),
        status: STATUS_CASHED_OUT.into(),
        placed_at: Some(now - Duration::minutes(11)),
        ..HouseBet::default()
    });
    service.seed_house_bets(bets);

    let controller = BetsDashboardController::new(service);
    let mut ctx = AdminContext::default();
    controller.show(&mut ctx).unwrap();
    assert_eq!(ctx.context.float("total_win"), Some(0.0));
    assert_eq!(ctx.context.float("total_lost_by_players"), Some(1000.0));
    assert_eq!(ctx.context.float("total_made_by_house"), Some(1000.0));

    controller.next_page(&mut ctx);
    assert_eq!(ctx.context.float("total_win"), Some(900.0));
    assert_eq!(ctx.context.float("total_lost_by_players"), Some(0.0));
    assert_eq!(ctx.context.float("total_made_by_house"), Some(-900.0));
}

#[test]
fn withdrawals_sort_by_request_time_then_id() {
    let now = Utc::now();
    let service = InMemoryService::new_with_sample();
    service.seed_withdrawals(vec![
        Withdrawal {
            id: 1,
            requested_at: Some(now - Duration::minutes(5)),
            ..Withdrawal::default()
        },
        Withdrawal {
            id: 2,
            requested_at: None,
            ..Withdrawal::default()
        },
        Withdrawal {
            id: 3,
            requested_at: Some(now - Duration::minutes(1)),
            ..Withdrawal::default()
        },
        Withdrawal {
            id: 4,
            requested_at: None,
            ..Withdrawal::default()
        },
    ]);
    let controller = WithdrawalsController::new(service);
    let mut ctx = AdminContext::default();
    controller.show(&mut ctx).unwrap();
    let ids: Vec<i64> = ctx.withdrawals.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![3, 1, 4, 2]);
}

#[test]
fn withdrawal_table_renders_money_and_placeholders() {
    let service = InMemoryService::new_with_sample();
    let controller = WithdrawalsController::new(service);
    let mut ctx = AdminContext::default();
    controller.show(&mut ctx).unwrap();
    let html = render_withdrawals_dashboard(&ctx);
    assert!(html.contains("\u{20a6}25,000"));
    assert!(html.contains("GTBank"));
    // Unprocessed withdrawals show a placeholder timestamp.
    assert!(html.contains("<td>-</td>"));
}
