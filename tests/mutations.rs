use bet_admin_rust::notify::{notifications, take_notifications};
use bet_admin_rust::services::{
    AdminContext, AdminService, InMemoryService, STATUS_LOST, STATUS_PAID, STATUS_WON,
};
use bet_admin_rust::sportsbook::SportBetsController;
use bet_admin_rust::withdrawals::WithdrawalsController;

#[test]
fn settled_sport_bet_round_trips_through_the_fetcher() {
    let service = InMemoryService::new_with_sample();
    let controller = SportBetsController::new(service.clone());
    let mut ctx = AdminContext::default();
    controller.show(&mut ctx).unwrap();

    controller.mark_won(&mut ctx, 501).unwrap();
    controller.mark_lost(&mut ctx, 503).unwrap();

    // The context mirrors what a fresh fetch returns.
    let fetched = service.fetch_sport_bets().unwrap();
    for bets in [&ctx.sport_bets, &fetched] {
        assert_eq!(
            bets.iter().find(|bet| bet.id == 501).unwrap().status,
            STATUS_WON
        );
        assert_eq!(
            bets.iter().find(|bet| bet.id == 503).unwrap().status,
            STATUS_LOST
        );
    }
    assert_eq!(notifications(&ctx).len(), 2);
}

#[test]
fn status_strings_are_not_validated_client_side() {
    let service = InMemoryService::new_with_sample();
    let controller = SportBetsController::new(service.clone());
    let mut ctx = AdminContext::default();
    controller.show(&mut ctx).unwrap();

    controller
        .set_status(&mut ctx, 502, "definitely-not-a-status")
        .unwrap();
    let fetched = service.fetch_sport_bets().unwrap();
    assert_eq!(
        fetched.iter().find(|bet| bet.id == 502).unwrap().status,
        "definitely-not-a-status"
    );
}

#[test]
fn paid_withdrawal_round_trips_through_the_fetcher() {
    let service = InMemoryService::new_with_sample();
    let controller = WithdrawalsController::new(service.clone());
    let mut ctx = AdminContext::default();
    controller.show(&mut ctx).unwrap();

    controller.mark_paid(&mut ctx, 9001).unwrap();

    let fetched = service.fetch_pending_withdrawals().unwrap();
    let paid = fetched.iter().find(|w| w.id == 9001).unwrap();
    assert_eq!(paid.status, STATUS_PAID);
    assert!(paid.processed_at.is_some());

    let notes = take_notifications(&mut ctx);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["kind"], "success");
}

#[test]
fn failed_mutation_notifies_without_touching_state() {
    let service = InMemoryService::new_with_sample();
    let controller = WithdrawalsController::new(service.clone());
    let mut ctx = AdminContext::default();
    controller.show(&mut ctx).unwrap();
    let before = ctx.withdrawals.clone();

    controller.mark_paid(&mut ctx, 424242).unwrap();

    assert_eq!(ctx.withdrawals, before);
    let notes = notifications(&ctx);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["kind"], "error");
    assert_eq!(notes[0]["text"], "Failed to update withdrawal");
}

#[test]
fn successful_write_with_failing_refetch_keeps_the_stale_view() {
    let service = InMemoryService::new_with_sample();
    let controller = WithdrawalsController::new(service.clone());
    let mut ctx = AdminContext::default();
    controller.show(&mut ctx).unwrap();

    service.set_fail_fetches(true);
    controller.mark_paid(&mut ctx, 9001).unwrap();

    // The write landed upstream even though the view is stale.
    service.set_fail_fetches(false);
    let fetched = service.fetch_pending_withdrawals().unwrap();
    assert_eq!(
        fetched.iter().find(|w| w.id == 9001).unwrap().status,
        STATUS_PAID
    );
    let stale = ctx.withdrawals.iter().find(|w| w.id == 9001).unwrap();
    assert_ne!(stale.status, STATUS_PAID);

    // One success for the write, one failure for the refetch.
    let notes = notifications(&ctx);
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0]["kind"], "success");
    assert_eq!(notes[1]["kind"], "error");
}
