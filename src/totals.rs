use crate::services::{HouseBet, SportBet};

/// Aggregate money figures for the house-side dashboard. These cover only
/// the slice passed in, which in practice is the visible page, not the
/// full result set; widening the scope is a product decision, not a fix.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageTotals {
    pub total_win: f64,
    pub total_lost_by_players: f64,
    pub total_made_by_house: f64,
}

pub fn page_totals(bets: &[HouseBet]) -> PageTotals {
    let total_win: f64 = bets
        .iter()
        .filter(|bet| bet.is_cashed_out())
        .map(|bet| bet.win_amount.unwrap_or(0.0))
        .sum();
    let total_lost_by_players: f64 = bets
        .iter()
        .filter(|bet| !bet.is_cashed_out())
        .map(|bet| bet.bet_amount)
        .sum();
    PageTotals {
        total_win,
        total_lost_by_players,
        total_made_by_house: total_lost_by_players - total_win,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SportPageTotals {
    pub total_staked: f64,
    pub total_potential_win: f64,
}

pub fn sport_page_totals(bets: &[SportBet]) -> SportPageTotals {
    SportPageTotals {
        total_staked: bets.iter().map(|bet| bet.amount).sum(),
        total_potential_win: bets.iter().map(|bet| bet.potential_win).sum(),
    }
}
