use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub mod http;

pub type ServiceResult<T> = Result<T, AdminError>;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("internal error: {0}")]
    Internal(String),
}

pub const STATUS_CASHED_OUT: &str = "CASHED_OUT";
pub const STATUS_LOST: &str = "LOST";
pub const STATUS_WON: &str = "WON";
pub const STATUS_PENDING: &str = "PENDING";
pub const STATUS_PAID: &str = "PAID";

#[derive(Clone, Debug, Default)]
pub struct DataBag {
    inner: HashMap<String, Value>,
}

impl DataBag {
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: T) {
        self.inner.insert(
            key.to_string(),
            serde_json::to_value(value).unwrap_or(Value::Null),
        );
    }

    pub fn remove(&mut self, key: &str) {
        self.inner.remove(key);
    }

    pub fn bool(&self, key: &str) -> bool {
        self.inner
            .get(key)
            .and_then(|value| value.as_bool())
            .unwrap_or(false)
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        self.inner.get(key).and_then(|value| value.as_i64())
    }

    pub fn float(&self, key: &str) -> Option<f64> {
        self.inner.get(key).and_then(|value| value.as_f64())
    }

    pub fn string(&self, key: &str) -> Option<String> {
        self.inner
            .get(key)
            .and_then(|value| value.as_str().map(|s| s.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }
}

#[derive(Clone, Debug, Default)]
pub struct RequestVars {
    data: DataBag,
}

impl RequestVars {
    pub fn new() -> Self {
        Self {
            data: DataBag::new(),
        }
    }

    pub fn bool(&self, key: &str) -> bool {
        self.data.bool(key)
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        self.data.int(key)
    }

    pub fn string(&self, key: &str) -> Option<String> {
        self.data.string(key)
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: T) {
        self.data.set(key, value);
    }

    pub fn remove(&mut self, key: &str) {
        self.data.remove(key);
    }
}

pub fn push_to_array<T: Serialize>(bag: &mut DataBag, key: &str, value: T) {
    let mut existing = bag
        .inner
        .get(key)
        .cloned()
        .and_then(|val| val.as_array().cloned())
        .unwrap_or_default();
    existing.push(serde_json::to_value(value).unwrap_or(Value::Null));
    bag.set(key, Value::Array(existing));
}

/// House-side (crash game) bet. `status` is stored as received from the
/// API; anything other than CASHED_OUT is treated as a lost bet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HouseBet {
    pub bet_id: i64,
    pub username: String,
    pub bet_amount: f64,
    pub cashout_multiplier: Option<f64>,
    pub win_amount: Option<f64>,
    pub lost_amount: Option<f64>,
    pub round_id: String,
    pub status: String,
    pub placed_at: Option<DateTime<Utc>>,
    pub cashed_out_at: Option<DateTime<Utc>>,
}

impl HouseBet {
    pub fn is_cashed_out(&self) -> bool {
        self.status == STATUS_CASHED_OUT
    }

    // The stake counts as lost in full unless the player cashed out.
    pub fn lost_amount(&self) -> f64 {
        if self.is_cashed_out() {
            self.lost_amount.unwrap_or(0.0)
        } else {
            self.bet_amount
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SportBetUser {
    pub name: String,
    pub phone_number: String,
}

/// Sportsbook bet with stored potential win/loss, settled by an admin
/// marking it WON or LOST.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SportBet {
    pub id: i64,
    pub bet_code: String,
    pub sportsbook_name: String,
    pub amount: f64,
    pub potential_win: f64,
    pub potential_loss: f64,
    pub status: String,
    pub user: Option<SportBetUser>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl SportBet {
    pub fn is_pending(&self) -> bool {
        self.status == STATUS_PENDING || self.status.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Withdrawal {
    pub id: i64,
    pub user_name: String,
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
    pub amount: f64,
    pub status: String,
    pub requested_at: Option<DateTime<Utc>>,
    pub processed_at: Option<DateTime<Utc>>,
}

impl Withdrawal {
    pub fn is_paid(&self) -> bool {
        self.status == STATUS_PAID
    }
}

/// Per-view state carried across fetches and page turns. Record sets are
/// a read-only copy of whatever the API last returned; controllers never
/// edit individual records, they refetch.
#[derive(Clone, Debug, Default)]
pub struct AdminContext {
    pub house_bets: Vec<HouseBet>,
    pub sport_bets: Vec<SportBet>,
    pub withdrawals: Vec<Withdrawal>,
    pub loading: bool,
    pub request: RequestVars,
    pub settings: DataBag,
    pub context: DataBag,
}

pub trait AdminService {
    fn fetch_house_bets(&self) -> ServiceResult<Vec<HouseBet>>;
    fn fetch_sport_bets(&self) -> ServiceResult<Vec<SportBet>>;
    fn update_sport_bet_status(&self, bet_id: i64, status: &str) -> ServiceResult<()>;
    fn fetch_pending_withdrawals(&self) -> ServiceResult<Vec<Withdrawal>>;
    fn mark_withdrawal_paid(&self, withdrawal_id: i64) -> ServiceResult<()>;
}

#[derive(Default)]
struct InMemoryState {
    house_bets: Vec<HouseBet>,
    sport_bets: Vec<SportBet>,
    withdrawals: Vec<Withdrawal>,
    fail_fetches: bool,
}

#[derive(Clone)]
pub struct InMemoryService {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryService {
    pub fn new_with_sample() -> Self {
        let now = Utc::now();
        let mut state = InMemoryState::default();
        state.house_bets = vec![
            HouseBet {
                bet_id: 1001,
                username: "adebayo".into(),
                bet_amount: 2000.0,
                cashout_multiplier: Some(1.87),
                win_amount: Some(3740.0),
                lost_amount: None,
                round_id: "R-4821".into(),
                status: STATUS_CASHED_OUT.into(),
                placed_at: Some(now - Duration::minutes(9)),
                cashed_out_at: Some(now - Duration::minutes(8)),
            },
            HouseBet {
                bet_id: 1002,
                username: "chidi_o".into(),
                bet_amount: 5000.0,
                cashout_multiplier: None,
                win_amount: None,
                lost_amount: None,
                round_id: "R-4821".into(),
                status: STATUS_LOST.into(),
                placed_at: Some(now - Duration::minutes(4)),
                cashed_out_at: None,
            },
            HouseBet {
                bet_id: 1003,
                username: "halima".into(),
                bet_amount: 1500.0,
                cashout_multiplier: Some(2.4),
                win_amount: Some(3600.0),
                lost_amount: None,
                round_id: "R-4820".into(),
                status: STATUS_CASHED_OUT.into(),
                placed_at: Some(now - Duration::minutes(15)),
                cashed_out_at: Some(now - Duration::minutes(14)),
            },
            HouseBet {
                bet_id: 1004,
                username: "tunde99".into(),
                bet_amount: 800.0,
                cashout_multiplier: None,
                win_amount: None,
                lost_amount: None,
                round_id: "R-4822".into(),
                status: STATUS_LOST.into(),
                placed_at: Some(now - Duration::minutes(1)),
                cashed_out_at: None,
            },
        ];
        state.sport_bets = vec![
            SportBet {
                id: 501,
                bet_code: "BC-7F2K".into(),
                sportsbook_name: "SportyBet".into(),
                amount: 1000.0,
                potential_win: 4500.0,
                potential_loss: 1000.0,
                status: STATUS_PENDING.into(),
                user: Some(SportBetUser {
                    name: "Musa Ibrahim".into(),
                    phone_number: "08031234567".into(),
                }),
                created_at: Some(now - Duration::minutes(20)),
                updated_at: Some(now - Duration::minutes(20)),
            },
            SportBet {
                id: 502,
                bet_code: "BC-9QZ3".into(),
                sportsbook_name: "BetKing".into(),
                amount: 2500.0,
                potential_win: 8750.0,
                potential_loss: 2500.0,
                status: STATUS_WON.into(),
                user: Some(SportBetUser {
                    name: "Ngozi Eze".into(),
                    phone_number: "08059876543".into(),
                }),
                created_at: Some(now - Duration::minutes(6)),
                updated_at: Some(now - Duration::minutes(2)),
            },
            SportBet {
                id: 503,
                bet_code: "BC-2MNP".into(),
                sportsbook_name: "SportyBet".into(),
                amount: 600.0,
                potential_win: 1980.0,
                potential_loss: 600.0,
                status: STATUS_PENDING.into(),
                user: None,
                created_at: Some(now - Duration::minutes(45)),
                updated_at: Some(now - Duration::minutes(45)),
            },
        ];
        state.withdrawals = vec![
            Withdrawal {
                id: 9001,
                user_name: "Ngozi Eze".into(),
                bank_name: "GTBank".into(),
                account_number: "0123456789".into(),
                account_name: "Ngozi Eze".into(),
                amount: 25000.0,
                status: STATUS_PENDING.into(),
                requested_at: Some(now - Duration::minutes(30)),
                processed_at: None,
            },
            Withdrawal {
                id: 9002,
                user_name: "Ibrahim Musa".into(),
                bank_name: "Access Bank".into(),
                account_number: "0987654321".into(),
                account_name: "Ibrahim Musa".into(),
                amount: 8000.0,
                status: STATUS_PENDING.into(),
                requested_at: Some(now - Duration::minutes(10)),
                processed_at: None,
            },
            Withdrawal {
                id: 9003,
                user_name: "Seun Ade".into(),
                bank_name: "UBA".into(),
                account_number: "1122334455".into(),
                account_name: "Oluwaseun Ade".into(),
                amount: 12500.0,
                status: STATUS_PAID.into(),
                requested_at: Some(now - Duration::minutes(120)),
                processed_at: Some(now - Duration::minutes(60)),
            },
        ];
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn seed_house_bets(&self, bets: Vec<HouseBet>) {
        self.state.lock().unwrap().house_bets = bets;
    }

    pub fn seed_sport_bets(&self, bets: Vec<SportBet>) {
        self.state.lock().unwrap().sport_bets = bets;
    }

    pub fn seed_withdrawals(&self, withdrawals: Vec<Withdrawal>) {
        self.state.lock().unwrap().withdrawals = withdrawals;
    }

    // Makes every subsequent fetch fail, so failure handling is testable
    // without a network.
    pub fn set_fail_fetches(&self, fail: bool) {
        self.state.lock().unwrap().fail_fetches = fail;
    }

    fn guard_fetch(&self, state: &InMemoryState) -> ServiceResult<()> {
        if state.fail_fetches {
            Err(AdminError::Transport("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

impl Default for InMemoryService {
    fn default() -> Self {
        Self::new_with_sample()
    }
}

impl AdminService for InMemoryService {
    fn fetch_house_bets(&self) -> ServiceResult<Vec<HouseBet>> {
        let state = self.state.lock().unwrap();
        self.guard_fetch(&state)?;
        Ok(state.house_bets.clone())
    }

    fn fetch_sport_bets(&self) -> ServiceResult<Vec<SportBet>> {
        let state = self.state.lock().unwrap();
        self.guard_fetch(&state)?;
        Ok(state.sport_bets.clone())
    }

    fn update_sport_bet_status(&self, bet_id: i64, status: &str) -> ServiceResult<()> {
        let mut state = self.state.lock().unwrap();
        let bet = state
            .sport_bets
            .iter_mut()
            .find(|bet| bet.id == bet_id)
            .ok_or_else(|| AdminError::Validation(format!("bet {bet_id} not found")))?;
        // The status string is stored exactly as sent; validation is the
        // API's concern.
        bet.status = status.to_string();
        bet.updated_at = Some(Utc::now());
        Ok(())
    }

    fn fetch_pending_withdrawals(&self) -> ServiceResult<Vec<Withdrawal>> {
        let state = self.state.lock().unwrap();
        self.guard_fetch(&state)?;
        Ok(state.withdrawals.clone())
    }

    fn mark_withdrawal_paid(&self, withdrawal_id: i64) -> ServiceResult<()> {
        let mut state = self.state.lock().unwrap();
        let withdrawal = state
            .withdrawals
            .iter_mut()
            .find(|w| w.id == withdrawal_id)
            .ok_or_else(|| {
                AdminError::Validation(format!("withdrawal {withdrawal_id} not found"))
            })?;
        withdrawal.status = STATUS_PAID.to_string();
        withdrawal.processed_at = Some(Utc::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_data_covers_both_bet_outcomes() {
        let service = InMemoryService::new_with_sample();
        let bets = service.fetch_house_bets().unwrap();
        assert!(bets.iter().any(|bet| bet.is_cashed_out()));
        assert!(bets.iter().any(|bet| !bet.is_cashed_out()));
    }

    #[test]
    fn lost_amount_is_stake_unless_cashed_out() {
        let mut bet = HouseBet {
            bet_amount: 750.0,
            status: STATUS_LOST.into(),
            ..HouseBet::default()
        };
        assert_eq!(bet.lost_amount(), 750.0);
        bet.status = STATUS_CASHED_OUT.into();
        assert_eq!(bet.lost_amount(), 0.0);
        bet.lost_amount = Some(120.0);
        assert_eq!(bet.lost_amount(), 120.0);
    }

    #[test]
    fn fetches_fail_when_switched() {
        let service = InMemoryService::new_with_sample();
        service.set_fail_fetches(true);
        assert!(service.fetch_house_bets().is_err());
        assert!(service.fetch_pending_withdrawals().is_err());
        service.set_fail_fetches(false);
        assert!(service.fetch_house_bets().is_ok());
    }

    #[test]
    fn status_updates_are_stored_verbatim() {
        let service = InMemoryService::new_with_sample();
        service.update_sport_bet_status(501, "VOIDED").unwrap();
        let bets = service.fetch_sport_bets().unwrap();
        let bet = bets.iter().find(|bet| bet.id == 501).unwrap();
        assert_eq!(bet.status, "VOIDED");
        assert!(bet.updated_at.is_some());
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let service = InMemoryService::new_with_sample();
        assert!(service.update_sport_bet_status(999, "WON").is_err());
        assert!(service.mark_withdrawal_paid(999).is_err());
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let bet: HouseBet = serde_json::from_str(
            r#"{"betId": 7, "username": "amina", "betAmount": 300, "roundId": "R-1", "status": "LOST"}"#,
        )
        .unwrap();
        assert_eq!(bet.bet_id, 7);
        assert_eq!(bet.cashout_multiplier, None);
        assert_eq!(bet.win_amount, None);
        assert_eq!(bet.placed_at, None);
    }
}
