use serde::{Deserialize, Serialize};

/// Subscription level gating query quotas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Paid,
}

impl Tier {
    pub fn all() -> &'static [Tier] {
        &[Tier::Free, Tier::Paid]
    }

    pub fn label(&self) -> &str {
        match self {
            Tier::Free => "Free Trial",
            Tier::Paid => "Professional",
        }
    }

    pub fn price(&self) -> &str {
        match self {
            Tier::Free => "$0",
            Tier::Paid => "$20 / month",
        }
    }

    /// Plan-card bullet points shown on the profile page.
    pub fn perks(&self) -> &'static [&'static str] {
        match self {
            Tier::Free => &["2 queries per day", "6 queries per month", "Basic support"],
            Tier::Paid => &[
                "50 queries per day",
                "500 queries per month",
                "Priority support",
                "Advanced features",
            ],
        }
    }
}

/// Authoritative usage snapshot for a user, fetched from the backend.
/// Superseded wholesale on every fetch; never merged incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageData {
    pub user_id: String,
    pub subscription_tier: Tier,
    pub subscription_end_date: Option<String>,
    pub usage: UsageCounters,
    #[serde(default)]
    pub recent_queries: Vec<RecentQuery>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageCounters {
    pub daily: u32,
    pub daily_limit: u32,
    pub monthly: u32,
    pub monthly_limit: u32,
    pub total: u64,
}

impl UsageCounters {
    pub fn daily_percent(&self) -> f32 {
        percent(self.daily, self.daily_limit)
    }

    pub fn monthly_percent(&self) -> f32 {
        percent(self.monthly, self.monthly_limit)
    }

    /// Daily usage has crossed the warning threshold (80% of the limit).
    pub fn daily_warning(&self) -> bool {
        self.daily as f32 > self.daily_limit as f32 * 0.8
    }

    pub fn monthly_warning(&self) -> bool {
        self.monthly as f32 > self.monthly_limit as f32 * 0.8
    }
}

/// Display percentage, clamped to 100. A zero limit renders as 0
/// rather than dividing by zero.
fn percent(used: u32, limit: u32) -> f32 {
    if limit == 0 {
        return 0.0;
    }
    (used as f32 / limit as f32 * 100.0).min(100.0)
}

/// One row of the recent-query history on the profile page.
/// `scope` is echoed back by the server as a plain string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentQuery {
    pub query: String,
    pub scope: String,
    pub tokens_used: u32,
    pub created_at: String,
}
