use serde::{Deserialize, Serialize};

const BASE_SCORE: u32 = 50;
const SCORE_PER_EVENT: u32 = 8;
const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthTier {
    FinancialBeginner,
    MoneyExplorer,
    WealthVoyager,
    FiscalMaster,
}

impl HealthTier {
    #[must_use]
    pub fn for_score(score: u32) -> Self {
        match score {
            0..40 => Self::FinancialBeginner,
            40..60 => Self::MoneyExplorer,
            60..80 => Self::WealthVoyager,
            _ => Self::FiscalMaster,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::FinancialBeginner => "Financial Beginner",
            Self::MoneyExplorer => "Money Explorer",
            Self::WealthVoyager => "Wealth Voyager",
            Self::FiscalMaster => "Fiscal Master",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::FinancialBeginner => "You're taking the first steps in your financial journey!",
            Self::MoneyExplorer => "You're on the right track towards financial stability.",
            Self::WealthVoyager => {
                "Great planning! You're well on your way to financial freedom."
            }
            Self::FiscalMaster => {
                "Exceptional financial planning! You're a true financial strategist."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthScore {
    pub score: u32,
    pub tier: HealthTier,
}

/// Planning score from the number of declared events.
///
/// Starts at 50 and adds 8 per event, capped at 100.
#[must_use]
pub fn health_score(event_count: usize) -> HealthScore {
    let events = u32::try_from(event_count).unwrap_or(u32::MAX);
    let score = BASE_SCORE
        .saturating_add(events.saturating_mul(SCORE_PER_EVENT))
        .min(MAX_SCORE);
    HealthScore {
        score,
        tier: HealthTier::for_score(score),
    }
}
