use bet_admin_rust::bets::BetsDashboardController;
use bet_admin_rust::notify::take_notifications;
use bet_admin_rust::services::http::{ApiConfig, HttpService};
use bet_admin_rust::services::AdminContext;
use bet_admin_rust::sportsbook::SportBetsController;
use bet_admin_rust::templates::bets_template::render_bets_dashboard;
use bet_admin_rust::templates::render_notifications;
use bet_admin_rust::templates::sportsbook_template::render_sportsbook_dashboard;
use bet_admin_rust::templates::withdrawals_template::render_withdrawals_dashboard;
use bet_admin_rust::withdrawals::WithdrawalsController;
use dotenvy::dotenv;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv().ok();
    init_tracing();

    let mut args = env::args().skip(1);
    let view = args.next().unwrap_or_else(|| "bets".into());
    let page = args
        .next()
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(1);

    let config = ApiConfig::from_env();
    info!(house = %config.house_base, sport = %config.sport_base, view = %view, page, "loading dashboard");
    let service = HttpService::new(config);

    let mut ctx = AdminContext::default();
    ctx.request.set("page", page);

    let output = match view.as_str() {
        "bets" => {
            let controller = BetsDashboardController::new(service);
            if let Err(error) = controller.show(&mut ctx) {
                eprintln!("show() -> {error}");
            }
            render_bets_dashboard(&ctx)
        }
        "sportsbook" => {
            let controller = SportBetsController::new(service);
            if let Err(error) = controller.show(&mut ctx) {
                eprintln!("show() -> {error}");
            }
            render_sportsbook_dashboard(&ctx)
        }
        "withdrawals" => {
            let controller = WithdrawalsController::new(service);
            if let Err(error) = controller.show(&mut ctx) {
                eprintln!("show() -> {error}");
            }
            render_withdrawals_dashboard(&ctx)
        }
        other => {
            eprintln!("unknown dashboard '{other}', expected bets, sportsbook or withdrawals");
            std::process::exit(2);
        }
    };

    println!("{output}");
    let notes = take_notifications(&mut ctx);
    if !notes.is_empty() {
        eprintln!("{}", render_notifications(&notes));
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
