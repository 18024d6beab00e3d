use chrono::{DateTime, Utc};

use super::Catalog;
use crate::models::{LaunchProject, LaunchStatus, ReputationRecord, Reward, Tier};
use crate::scoring::{allocation, evaluate_resource, reward_eligibility, GateDecision, RewardEligibility};

#[derive(Debug, Clone, Copy, Default)]
pub struct LaunchFilter {
    pub status: Option<LaunchStatus>,
    /// Exact match on the launch's minimum tier.
    pub tier: Option<Tier>,
}

impl LaunchFilter {
    pub fn matches(&self, launch: &LaunchProject) -> bool {
        self.status.map_or(true, |s| launch.status == s)
            && self.tier.map_or(true, |t| launch.min_tier == t)
    }
}

/// A launch as seen by one user.
#[derive(Debug, Clone)]
pub struct LaunchView<'a> {
    pub project: &'a LaunchProject,
    pub gate: GateDecision,
    /// Only present when the user has a record and passes the gate.
    pub allocation: Option<i64>,
}

impl<'a> LaunchView<'a> {
    pub fn can_participate(&self) -> bool {
        self.gate.has_access && self.project.status == LaunchStatus::Active
    }
}

#[derive(Debug, Clone)]
pub struct RewardView<'a> {
    pub reward: &'a Reward,
    pub eligibility: RewardEligibility,
}

impl Catalog {
    pub fn filter_launches(&self, filter: &LaunchFilter) -> Vec<&LaunchProject> {
        self.launches.iter().filter(|l| filter.matches(l)).collect()
    }

    pub fn launch_views(
        &self,
        filter: &LaunchFilter,
        record: Option<&ReputationRecord>,
        base_allocation: f64,
    ) -> Vec<LaunchView<'_>> {
        let tier = record.map(|r| r.tier);
        self.filter_launches(filter)
            .into_iter()
            .map(|project| {
                let gate = evaluate_resource(tier, project);
                let allocation = match record {
                    Some(r) if gate.has_access => {
                        Some(allocation(r.combined_score, r.tier, base_allocation))
                    }
                    _ => None,
                };
                LaunchView { project, gate, allocation }
            })
            .collect()
    }

    pub fn reward_views(&self, record: Option<&ReputationRecord>) -> Vec<RewardView<'_>> {
        let tier = record.map(|r| r.tier);
        let score = record.map_or(0.0, |r| r.combined_score);
        self.rewards
            .iter()
            .map(|reward| RewardView {
                reward,
                eligibility: reward_eligibility(tier, score, reward),
            })
            .collect()
    }
}

/// Share of the raise already filled, capped at 100.
pub fn progress_percentage(raised: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    (raised / total * 100.0).min(100.0)
}

/// Compact countdown such as `3d 4h`, `5h 12m`, `9m`, or `Ended`.
pub fn time_remaining(end: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = end - now;
    if diff.num_milliseconds() <= 0 {
        return "Ended".to_string();
    }

    let days = diff.num_days();
    let hours = diff.num_hours() % 24;
    let minutes = diff.num_minutes() % 60;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
