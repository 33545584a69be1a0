use dioxus::prelude::*;
use reqwasm::http::{Method, Request};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use web_sys::wasm_bindgen::JsValue;

fn main() {
    launch(App);
}

const BETS_PER_PAGE: usize = 10;

// ---------- Types ----------
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
struct HouseBet {
    bet_id: i64,
    username: String,
    bet_amount: f64,
    cashout_multiplier: Option<f64>,
    win_amount: Option<f64>,
    lost_amount: Option<f64>,
    round_id: String,
    status: String,
    placed_at: Option<String>,
    cashed_out_at: Option<String>,
}

impl HouseBet {
    fn is_cashed_out(&self) -> bool {
        self.status == "CASHED_OUT"
    }

    fn lost_amount(&self) -> f64 {
        if self.is_cashed_out() {
            self.lost_amount.unwrap_or(0.0)
        } else {
            self.bet_amount
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
struct SportBetUser {
    name: String,
    phone_number: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
struct SportBet {
    id: i64,
    bet_code: String,
    sportsbook_name: String,
    amount: f64,
    potential_win: f64,
    potential_loss: f64,
    status: String,
    user: Option<SportBetUser>,
    created_at: Option<String>,
    updated_at: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
struct Withdrawal {
    id: i64,
    user_name: String,
    bank_name: String,
    account_number: String,
    account_name: String,
    amount: f64,
    status: String,
    requested_at: Option<String>,
    processed_at: Option<String>,
}

// ---------- Utilities ----------
fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

fn copy_to_clipboard(text: &str) {
    // Fire and forget; the browser promise is not awaited.
    if let Some(win) = window() {
        let _ = win.navigator().clipboard().write_text(text);
    }
}

fn naira(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let fraction = cents % 100;
    let digits = whole.to_string();
    let mut out = String::new();
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if fraction != 0 {
        if fraction % 10 == 0 {
            out.push_str(&format!(".{}", fraction / 10));
        } else {
            out.push_str(&format!(".{fraction:02}"));
        }
    }
    if negative {
        format!("\u{20a6}-{out}")
    } else {
        format!("\u{20a6}{out}")
    }
}

fn local_time(ts: &Option<String>) -> String {
    match ts {
        Some(raw) if !raw.is_empty() => {
            let date = js_sys::Date::new(&JsValue::from_str(raw));
            String::from(date.to_locale_string("en-NG", &JsValue::UNDEFINED))
        }
        _ => "-".into(),
    }
}

fn multiplier(value: Option<f64>) -> String {
    value.map(|m| format!("{m}x")).unwrap_or_else(|| "-".into())
}

async fn get_json<T: DeserializeOwned>(base: &str, path: &str) -> Result<T, String> {
    let url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| format!("read failed: {e}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {status}: {text}"));
    }
    serde_json::from_str(&text).map_err(|e| format!("decode failed: {e}"))
}

async fn put_empty(base: &str, path: &str) -> Result<(), String> {
    let url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    let resp = Request::new(&url)
        .method(Method::PUT)
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;
    if !resp.ok() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        return Err(format!("HTTP {status}: {text}"));
    }
    Ok(())
}

// ---------- App ----------
fn App() -> Element {
    let house_base = use_signal(|| "https://aviator-app-latest.onrender.com".to_string());
    let sport_base = use_signal(|| "https://twoxbet-app-latest.onrender.com".to_string());
    let mut status = use_signal(|| "Ready".to_string());

    let start_path = window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    let mut active_view = use_signal(move || {
        if start_path.starts_with("/withdrawal") {
            "withdrawals".to_string()
        } else if start_path.starts_with("/sportsbook") {
            "sportsbook".to_string()
        } else {
            "bets".to_string()
        }
    });

    let bets = use_signal(Vec::<HouseBet>::new);
    let bets_loading = use_signal(|| false);
    let mut bets_page = use_signal(|| 1usize);

    let sport_bets = use_signal(Vec::<SportBet>::new);
    let sport_loading = use_signal(|| false);
    let mut sport_page = use_signal(|| 1usize);

    let withdrawals = use_signal(Vec::<Withdrawal>::new);
    let withdrawals_loading = use_signal(|| false);
    let mut withdrawals_page = use_signal(|| 1usize);

    // data loaders
    fn load_bets_inner(
        base: String,
        mut list: Signal<Vec<HouseBet>>,
        mut loading: Signal<bool>,
        mut status: Signal<String>,
    ) -> impl std::future::Future<Output = ()> {
        async move {
            loading.set(true);
            match get_json::<Vec<HouseBet>>(&base, "/admin/bets").await {
                Ok(mut fetched) => {
                    fetched.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
                    list.set(fetched);
                    status.set("Bets loaded".into());
                }
                Err(err) => status.set(format!("Failed to load bets: {err}")),
            }
            loading.set(false);
        }
    }

    fn load_sport_bets_inner(
        base: String,
        mut list: Signal<Vec<SportBet>>,
        mut loading: Signal<bool>,
        mut status: Signal<String>,
    ) -> impl std::future::Future<Output = ()> {
        async move {
            loading.set(true);
            match get_json::<Vec<SportBet>>(&base, "/api/admin/bets").await {
                Ok(mut fetched) => {
                    fetched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                    list.set(fetched);
                    status.set("Bets loaded".into());
                }
                Err(err) => status.set(format!("Failed to load bets: {err}")),
            }
            loading.set(false);
        }
    }

    fn load_withdrawals_inner(
        base: String,
        mut list: Signal<Vec<Withdrawal>>,
        mut loading: Signal<bool>,
        mut status: Signal<String>,
    ) -> impl std::future::Future<Output = ()> {
        async move {
            loading.set(true);
            match get_json::<Vec<Withdrawal>>(&base, "/api/admin/pending").await {
                Ok(mut fetched) => {
                    fetched.sort_by(|a, b| (&b.requested_at, b.id).cmp(&(&a.requested_at, a.id)));
                    list.set(fetched);
                    status.set("Withdrawals loaded".into());
                }
                Err(err) => status.set(format!("Failed to load withdrawals: {err}")),
            }
            loading.set(false);
        }
    }

    let load_bets = move || {
        let base = house_base.read().clone();
        spawn(load_bets_inner(base, bets, bets_loading, status));
    };

    let load_sport_bets = move || {
        let base = sport_base.read().clone();
        spawn(load_sport_bets_inner(base, sport_bets, sport_loading, status));
    };

    let load_withdrawals = move || {
        let base = sport_base.read().clone();
        spawn(load_withdrawals_inner(
            base,
            withdrawals,
            withdrawals_loading,
            status,
        ));
    };

    // actions
    let copy_id = move |id: String| {
        let mut status = status.clone();
        copy_to_clipboard(&id);
        status.set(format!("Copied: {id}"));
    };

    let set_bet_status = move |bet_id: i64, new_status: &'static str| {
        let base = sport_base.read().clone();
        let mut status = status.clone();
        spawn(async move {
            status.set("Updating bet...".into());
            let path = format!("/api/admin/bets/{bet_id}/status?status={new_status}");
            match put_empty(&base, &path).await {
                Ok(()) => {
                    status.set(format!("Bet {bet_id} marked {new_status}"));
                    load_sport_bets_inner(base, sport_bets, sport_loading, status).await;
                }
                Err(err) => status.set(format!("Failed to update bet: {err}")),
            }
        });
    };

    let mark_paid = move |withdrawal_id: i64| {
        let base = sport_base.read().clone();
        let mut status = status.clone();
        spawn(async move {
            status.set("Updating withdrawal...".into());
            let path = format!("/api/admin/{withdrawal_id}/pay");
            match put_empty(&base, &path).await {
                Ok(()) => {
                    status.set("Withdrawal marked as PAID".into());
                    load_withdrawals_inner(base, withdrawals, withdrawals_loading, status).await;
                }
                Err(err) => status.set(format!("Failed to update withdrawal: {err}")),
            }
        });
    };

    use_effect(move || {
        load_bets();
        load_sport_bets();
        load_withdrawals();
    });

    let view = active_view.read().clone();

    // page slices
    let all_bets = bets.read().clone();
    let bets_total_pages = (all_bets.len() + BETS_PER_PAGE - 1) / BETS_PER_PAGE;
    let bets_current_page = (*bets_page.read()).clamp(1, bets_total_pages.max(1));
    let current_bets: Vec<HouseBet> = all_bets
        .iter()
        .skip((bets_current_page - 1) * BETS_PER_PAGE)
        .take(BETS_PER_PAGE)
        .cloned()
        .collect();
    let total_win: f64 = current_bets
        .iter()
        .filter(|b| b.is_cashed_out())
        .map(|b| b.win_amount.unwrap_or(0.0))
        .sum();
    let total_lost_by_players: f64 = current_bets
        .iter()
        .filter(|b| !b.is_cashed_out())
        .map(|b| b.bet_amount)
        .sum();
    let total_made_by_house = total_lost_by_players - total_win;

    let all_sport_bets = sport_bets.read().clone();
    let sport_total_pages = (all_sport_bets.len() + BETS_PER_PAGE - 1) / BETS_PER_PAGE;
    let sport_current_page = (*sport_page.read()).clamp(1, sport_total_pages.max(1));
    let current_sport_bets: Vec<SportBet> = all_sport_bets
        .iter()
        .skip((sport_current_page - 1) * BETS_PER_PAGE)
        .take(BETS_PER_PAGE)
        .cloned()
        .collect();
    let total_staked: f64 = current_sport_bets.iter().map(|b| b.amount).sum();
    let total_potential_win: f64 = current_sport_bets.iter().map(|b| b.potential_win).sum();

    let all_withdrawals = withdrawals.read().clone();
    let withdrawals_total_pages = (all_withdrawals.len() + BETS_PER_PAGE - 1) / BETS_PER_PAGE;
    let withdrawals_current_page =
        (*withdrawals_page.read()).clamp(1, withdrawals_total_pages.max(1));
    let current_withdrawals: Vec<Withdrawal> = all_withdrawals
        .iter()
        .skip((withdrawals_current_page - 1) * BETS_PER_PAGE)
        .take(BETS_PER_PAGE)
        .cloned()
        .collect();

    rsx! {
        style { {STYLE} }
        div { class: "app-shell",
            nav { class: "top-nav",
                div { class: "brand",
                    span { class: "brand__dot" }
                    span { "Bet Admin" }
                }
                div { class: "nav-links",
                    a { class: if view == "bets" { "nav-link active" } else { "nav-link" },
                        onclick: move |_| active_view.set("bets".into()), "Bets" }
                    a { class: if view == "sportsbook" { "nav-link active" } else { "nav-link" },
                        onclick: move |_| active_view.set("sportsbook".into()), "Sportsbook" }
                    a { class: if view == "withdrawals" { "nav-link active" } else { "nav-link" },
                        onclick: move |_| active_view.set("withdrawals".into()), "Withdrawals" }
                }
            }

            div { class: "status-bar", "Status: {status.read()}" }

            {if view == "bets" { rsx! {
                section { class: "panel",
                    div { class: "panel__header",
                        h2 { "Bet Dashboard" }
                        button { onclick: move |_| load_bets(), "Refresh" }
                    }
                    div { class: "totals",
                        span { class: "totals-win", "Total Made By Players: {naira(total_win)}" }
                        span { class: "totals-lost", "Total Lost By Players: {naira(total_lost_by_players)}" }
                        span { class: "totals-house", "Total Made By House: {naira(total_made_by_house)}" }
                    }
                    {if *bets_loading.read() { rsx! {
                        p { class: "muted", "Loading bets..." }
                    }} else if all_bets.is_empty() { rsx! {
                        p { class: "muted", "No bets found" }
                    }} else { rsx! {
                        table { class: "records",
                            thead {
                                tr {
                                    th { "ID" } th { "Username" } th { "Bet Amount" }
                                    th { "Cashout Multiplier" } th { "Win Amount" } th { "Lost Amount" }
                                    th { "Round ID" } th { "Status" } th { "Placed At" }
                                    th { "Cashed Out At" } th { "Copy ID" }
                                }
                            }
                            tbody {
                                { current_bets.iter().cloned().map(|bet| {
                                    let cashed_out = bet.is_cashed_out();
                                    let win = if cashed_out { naira(bet.win_amount.unwrap_or(0.0)) } else { "-".to_string() };
                                    let cashed_at = if cashed_out { local_time(&bet.cashed_out_at) } else { "-".to_string() };
                                    rsx! {
                                        tr {
                                            td { "{bet.bet_id}" }
                                            td { "{bet.username}" }
                                            td { class: "num", "{naira(bet.bet_amount)}" }
                                            td { class: "num", "{multiplier(bet.cashout_multiplier)}" }
                                            td { class: "num", "{win}" }
                                            td { class: "num", "{naira(bet.lost_amount())}" }
                                            td { "{bet.round_id}" }
                                            td {
                                                span { class: if cashed_out { "badge status-won" } else { "badge status-lost" },
                                                    {if cashed_out { "CASHED_OUT" } else { "LOST" }} }
                                            }
                                            td { "{local_time(&bet.placed_at)}" }
                                            td { "{cashed_at}" }
                                            td {
                                                button { class: "copy-btn",
                                                    onclick: move |_| copy_id(bet.bet_id.to_string()), "Copy" }
                                            }
                                        }
                                    }
                                })}
                            }
                        }
                        div { class: "pagination",
                            button {
                                disabled: bets_current_page <= 1,
                                onclick: move |_| { let p = *bets_page.read(); bets_page.set(p.saturating_sub(1).max(1)); },
                                "Previous"
                            }
                            span { "Page {bets_current_page} of {bets_total_pages}" }
                            button {
                                disabled: bets_current_page >= bets_total_pages,
                                onclick: move |_| { let p = *bets_page.read(); bets_page.set((p + 1).min(bets_total_pages.max(1))); },
                                "Next"
                            }
                        }
                    }}}
                }
            }} else if view == "sportsbook" { rsx! {
                section { class: "panel",
                    div { class: "panel__header",
                        h2 { "Sportsbook Bets" }
                        button { onclick: move |_| load_sport_bets(), "Refresh" }
                    }
                    div { class: "totals",
                        span { "Total Staked: {naira(total_staked)}" }
                        span { "Total Potential Win: {naira(total_potential_win)}" }
                    }
                    {if *sport_loading.read() { rsx! {
                        p { class: "muted", "Loading bets..." }
                    }} else if all_sport_bets.is_empty() { rsx! {
                        p { class: "muted", "No bets found" }
                    }} else { rsx! {
                        table { class: "records",
                            thead {
                                tr {
                                    th { "ID" } th { "Bet Code" } th { "Sportsbook" } th { "User" }
                                    th { "Phone" } th { "Amount" } th { "Potential Win" }
                                    th { "Potential Loss" } th { "Status" } th { "Created At" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                { current_sport_bets.iter().cloned().map(|bet| {
                                    let pending = bet.status == "PENDING" || bet.status.is_empty();
                                    let badge = match bet.status.as_str() {
                                        "WON" => "badge status-won",
                                        "LOST" => "badge status-lost",
                                        _ => "badge status-pending",
                                    };
                                    let user_name = bet.user.as_ref().map(|u| u.name.clone()).unwrap_or_else(|| "-".into());
                                    let phone = bet.user.as_ref().map(|u| u.phone_number.clone()).unwrap_or_else(|| "-".into());
                                    let bet_code = bet.bet_code.clone();
                                    rsx! {
                                        tr {
                                            td { "{bet.id}" }
                                            td { "{bet.bet_code}" }
                                            td { "{bet.sportsbook_name}" }
                                            td { "{user_name}" }
                                            td { "{phone}" }
                                            td { class: "num", "{naira(bet.amount)}" }
                                            td { class: "num", "{naira(bet.potential_win)}" }
                                            td { class: "num", "{naira(bet.potential_loss)}" }
                                            td { span { class: badge, "{bet.status}" } }
                                            td { "{local_time(&bet.created_at)}" }
                                            td { class: "actions-cell",
                                                button { class: "copy-btn",
                                                    onclick: move |_| copy_id(bet_code.clone()), "Copy" }
                                                {if pending { rsx! {
                                                    button { class: "action-btn won",
                                                        onclick: move |_| set_bet_status(bet.id, "WON"), "Won" }
                                                    button { class: "action-btn lost",
                                                        onclick: move |_| set_bet_status(bet.id, "LOST"), "Lost" }
                                                }} else { rsx! {} }}
                                            }
                                        }
                                    }
                                })}
                            }
                        }
                        div { class: "pagination",
                            button {
                                disabled: sport_current_page <= 1,
                                onclick: move |_| { let p = *sport_page.read(); sport_page.set(p.saturating_sub(1).max(1)); },
                                "Previous"
                            }
                            span { "Page {sport_current_page} of {sport_total_pages}" }
                            button {
                                disabled: sport_current_page >= sport_total_pages,
                                onclick: move |_| { let p = *sport_page.read(); sport_page.set((p + 1).min(sport_total_pages.max(1))); },
                                "Next"
                            }
                        }
                    }}}
                }
            }} else { rsx! {
                section { class: "panel",
                    div { class: "panel__header",
                        h2 { "Withdrawal Dashboard" }
                        button { onclick: move |_| load_withdrawals(), "Refresh" }
                    }
                    {if *withdrawals_loading.read() { rsx! {
                        p { class: "muted", "Loading withdrawals..." }
                    }} else if all_withdrawals.is_empty() { rsx! {
                        p { class: "muted", "No pending withdrawals" }
                    }} else { rsx! {
                        table { class: "records",
                            thead {
                                tr {
                                    th { "ID" } th { "User" } th { "Bank" } th { "Account No" }
                                    th { "Account Name" } th { "Amount" } th { "Status" }
                                    th { "Requested At" } th { "Processed At" } th { "Actions" }
                                }
                            }
                            tbody {
                                { current_withdrawals.iter().cloned().map(|w| {
                                    let badge = match w.status.as_str() {
                                        "PAID" => "badge status-won",
                                        "PENDING" => "badge status-pending",
                                        _ => "badge status-lost",
                                    };
                                    let payable = w.status != "PAID";
                                    rsx! {
                                        tr {
                                            td { "{w.id}" }
                                            td { "{w.user_name}" }
                                            td { "{w.bank_name}" }
                                            td { "{w.account_number}" }
                                            td { "{w.account_name}" }
                                            td { class: "num", "{naira(w.amount)}" }
                                            td { span { class: badge, "{w.status}" } }
                                            td { "{local_time(&w.requested_at)}" }
                                            td { "{local_time(&w.processed_at)}" }
                                            td { class: "actions-cell",
                                                {if payable { rsx! {
                                                    button { class: "action-btn pay",
                                                        onclick: move |_| mark_paid(w.id), "Pay" }
                                                }} else { rsx! {} }}
                                            }
                                        }
                                    }
                                })}
                            }
                        }
                        div { class: "pagination",
                            button {
                                disabled: withdrawals_current_page <= 1,
                                onclick: move |_| { let p = *withdrawals_page.read(); withdrawals_page.set(p.saturating_sub(1).max(1)); },
                                "Previous"
                            }
                            span { "Page {withdrawals_current_page} of {withdrawals_total_pages}" }
                            button {
                                disabled: withdrawals_current_page >= withdrawals_total_pages,
                                onclick: move |_| { let p = *withdrawals_page.read(); withdrawals_page.set((p + 1).min(withdrawals_total_pages.max(1))); },
                                "Next"
                            }
                        }
                    }}}
                }
            }}}
        }
    }
}

// ---------- Styles ----------
const STYLE: &str = r#"
:root { --bg: #111827; --panel: #1f2937; --muted: #9ca3af; --text: #f9fafb; --green: #34d399; --red: #f87171; --yellow: #fbbf24; --blue: #2563eb; --border: rgba(255,255,255,0.08); }
* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: var(--text); font-family: system-ui, -apple-system, "Segoe UI", sans-serif; }
a { color: inherit; text-decoration: none; cursor: pointer; }
.app-shell { max-width: 1280px; margin: 0 auto; padding: 18px 18px 36px; display: flex; flex-direction: column; gap: 14px; }
.top-nav { display: flex; align-items: center; justify-content: space-between; padding: 10px 14px; border: 1px solid var(--border); background: rgba(17,24,39,0.92); border-radius: 12px; }
.brand { display: flex; align-items: center; gap: 10px; font-weight: 800; letter-spacing: 0.4px; text-transform: uppercase; }
.brand__dot { width: 10px; height: 10px; border-radius: 50%; background: var(--yellow); }
.nav-links { display: flex; gap: 8px; align-items: center; }
.nav-link { padding: 8px 12px; border-radius: 10px; border: 1px solid var(--border); background: rgba(255,255,255,0.03); font-weight: 600; }
.nav-link.active { background: var(--blue); color: #fff; }
.status-bar { border: 1px dashed var(--border); border-radius: 10px; padding: 10px 12px; color: var(--muted); background: rgba(255,255,255,0.02); }
.panel { background: var(--panel); border: 1px solid var(--border); border-radius: 12px; padding: 16px; }
.panel__header { display: flex; align-items: center; justify-content: space-between; gap: 10px; margin-bottom: 10px; }
.panel h2 { margin: 0; font-size: 20px; }
.muted { color: var(--muted); text-align: center; margin: 24px 0; }
.totals { display: flex; justify-content: center; gap: 24px; margin-bottom: 12px; font-weight: 600; font-size: 14px; flex-wrap: wrap; }
.totals-win { color: var(--green); }
.totals-lost { color: var(--red); }
.totals-house { color: var(--yellow); }
.records { width: 100%; border-collapse: collapse; font-size: 14px; border: 1px solid var(--border); border-radius: 8px; overflow: hidden; }
.records th { background: rgba(255,255,255,0.04); color: var(--muted); text-align: left; padding: 8px; }
.records td { padding: 8px; border-top: 1px solid var(--border); }
.records tr:hover td { background: rgba(255,255,255,0.03); }
.num { text-align: right; font-variant-numeric: tabular-nums; }
.badge { padding: 2px 8px; border-radius: 6px; font-size: 12px; font-weight: 600; }
.status-won { background: rgba(52,211,153,0.2); color: var(--green); }
.status-lost { background: rgba(248,113,113,0.2); color: var(--red); }
.status-pending { background: rgba(251,191,36,0.2); color: var(--yellow); }
button { padding: 8px 12px; border: none; border-radius: 8px; background: var(--blue); color: #fff; font-weight: 600; cursor: pointer; }
button:disabled { opacity: 0.4; cursor: default; }
.copy-btn { background: rgba(255,255,255,0.08); color: var(--muted); }
.copy-btn:hover { color: var(--text); }
.action-btn.won, .action-btn.pay { background: #059669; }
.action-btn.lost { background: #dc2626; }
.actions-cell { display: flex; gap: 6px; justify-content: center; }
.pagination { display: flex; justify-content: center; align-items: center; gap: 12px; margin-top: 14px; }
@media (max-width: 900px) { .records { display: block; overflow-x: auto; } }
"#;
