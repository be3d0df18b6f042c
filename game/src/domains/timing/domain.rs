use serde::{Deserialize, Serialize};

pub struct TimingDomain {
    pub day: u32,
}

impl Default for TimingDomain {
    fn default() -> Self {
        Self { day: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Timing {
    DayStarted { day: u32 },
}
