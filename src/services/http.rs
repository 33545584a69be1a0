use crate::services::{
    AdminError, AdminService, HouseBet, ServiceResult, SportBet, Withdrawal,
};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::env;
use tracing::debug;

const DEFAULT_HOUSE_API_BASE: &str = "https://aviator-app-latest.onrender.com";
const DEFAULT_SPORT_API_BASE: &str = "https://twoxbet-app-latest.onrender.com";

/// Remote API endpoints. Two separate hosts: the crash game exposes the
/// house-side bets, the sportsbook host owns sport bets and withdrawals.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub house_base: String,
    pub sport_base: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            house_base: env::var("HOUSE_API_BASE")
                .unwrap_or_else(|_| DEFAULT_HOUSE_API_BASE.into()),
            sport_base: env::var("SPORT_API_BASE")
                .unwrap_or_else(|_| DEFAULT_SPORT_API_BASE.into()),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            house_base: DEFAULT_HOUSE_API_BASE.into(),
            sport_base: DEFAULT_SPORT_API_BASE.into(),
        }
    }
}

pub struct HttpService {
    config: ApiConfig,
    client: Client,
}

impl HttpService {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn url(base: &str, path: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> ServiceResult<T> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| AdminError::Transport(err.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .map_err(|err| AdminError::Transport(err.to_string()))?;
        if !status.is_success() {
            return Err(AdminError::Api {
                status: status.as_u16(),
                body: text,
            });
        }
        serde_json::from_str(&text).map_err(|err| AdminError::Decode(err.to_string()))
    }

    fn put_empty(&self, url: &str, query: &[(&str, &str)]) -> ServiceResult<()> {
        debug!(url, "PUT");
        let response = self
            .client
            .put(url)
            .query(query)
            .send()
            .map_err(|err| AdminError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AdminError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

impl AdminService for HttpService {
    fn fetch_house_bets(&self) -> ServiceResult<Vec<HouseBet>> {
        self.get_json(&Self::url(&self.config.house_base, "/admin/bets"))
    }

    fn fetch_sport_bets(&self) -> ServiceResult<Vec<SportBet>> {
        self.get_json(&Self::url(&self.config.sport_base, "/api/admin/bets"))
    }

    fn update_sport_bet_status(&self, bet_id: i64, status: &str) -> ServiceResult<()> {
        // The status goes out as a query parameter, unvalidated.
        let url = Self::url(
            &self.config.sport_base,
            &format!("/api/admin/bets/{bet_id}/status"),
        );
        self.put_empty(&url, &[("status", status)])
    }

    fn fetch_pending_withdrawals(&self) -> ServiceResult<Vec<Withdrawal>> {
        self.get_json(&Self::url(&self.config.sport_base, "/api/admin/pending"))
    }

    fn mark_withdrawal_paid(&self, withdrawal_id: i64) -> ServiceResult<()> {
        let url = Self::url(
            &self.config.sport_base,
            &format!("/api/admin/{withdrawal_id}/pay"),
        );
        self.put_empty(&url, &[])
    }
}
