use crate::timing::{Timing, TimingDomain};

impl TimingDomain {
    pub fn start_new_day(&mut self) -> Vec<Timing> {
        self.day += 1;
        vec![Timing::DayStarted { day: self.day }]
    }

    pub fn load_day(&mut self, day: u32) {
        self.day = day;
    }
}
