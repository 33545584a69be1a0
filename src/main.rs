use bet_admin_rust::bets::BetsDashboardController;
use bet_admin_rust::notify::take_notifications;
use bet_admin_rust::services::{AdminContext, InMemoryService};
use bet_admin_rust::sportsbook::SportBetsController;
use bet_admin_rust::templates::bets_template::render_bets_dashboard;
use bet_admin_rust::templates::render_notifications;
use bet_admin_rust::templates::sportsbook_template::render_sportsbook_dashboard;
use bet_admin_rust::templates::withdrawals_template::render_withdrawals_dashboard;
use bet_admin_rust::withdrawals::WithdrawalsController;

fn main() {
    let service = InMemoryService::default();
    let bets_controller = BetsDashboardController::new(service.clone());
    let sport_controller = SportBetsController::new(service.clone());
    let withdrawals_controller = WithdrawalsController::new(service);

    let mut ctx = AdminContext::default();
    if let Err(error) = bets_controller.show(&mut ctx) {
        eprintln!("bets show() -> {error}");
    }
    println!("== Bets ==");
    println!("{}", render_bets_dashboard(&ctx));

    let mut sport_ctx = AdminContext::default();
    if let Err(error) = sport_controller.show(&mut sport_ctx) {
        eprintln!("sportsbook show() -> {error}");
    }
    if let Err(error) = sport_controller.mark_won(&mut sport_ctx, 501) {
        eprintln!("mark_won() -> {error}");
    }
    println!("== Sportsbook ==");
    println!("{}", render_sportsbook_dashboard(&sport_ctx));
    println!("{}", render_notifications(&take_notifications(&mut sport_ctx)));

    let mut withdrawal_ctx = AdminContext::default();
    if let Err(error) = withdrawals_controller.show(&mut withdrawal_ctx) {
        eprintln!("withdrawals show() -> {error}");
    }
    if let Err(error) = withdrawals_controller.mark_paid(&mut withdrawal_ctx, 9002) {
        eprintln!("mark_paid() -> {error}");
    }
    println!("== Withdrawals ==");
    println!("{}", render_withdrawals_dashboard(&withdrawal_ctx));
    println!(
        "{}",
        render_notifications(&take_notifications(&mut withdrawal_ctx))
    );
}
