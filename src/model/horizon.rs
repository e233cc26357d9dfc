use serde::{Deserialize, Serialize};

use crate::model::task::Recurrence;

/// How far ahead the planner predicts occurrences of a recurring task that
/// has not been cloned yet.
///
/// The defaults (7 daily/weekly steps, 6 monthly steps) match the shipped
/// app; they are a product choice, not a correctness requirement, so hosts
/// may tune them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanHorizon {
    #[serde(default = "default_daily_weekly_steps")]
    pub daily_weekly_steps: u32,
    #[serde(default = "default_monthly_steps")]
    pub monthly_steps: u32,
}

fn default_daily_weekly_steps() -> u32 {
    7
}

fn default_monthly_steps() -> u32 {
    6
}

impl Default for PlanHorizon {
    fn default() -> Self {
        PlanHorizon {
            daily_weekly_steps: default_daily_weekly_steps(),
            monthly_steps: default_monthly_steps(),
        }
    }
}

impl PlanHorizon {
    /// Number of speculative occurrences to emit for a cadence
    pub fn steps(&self, cadence: Recurrence) -> u32 {
        match cadence {
            Recurrence::None => 0,
            Recurrence::Daily | Recurrence::Weekly => self.daily_weekly_steps,
            Recurrence::Monthly => self.monthly_steps,
        }
    }
}
