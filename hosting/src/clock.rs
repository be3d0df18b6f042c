/// Turns real seconds into whole game days.
#[derive(Debug, Clone)]
pub struct DayClock {
    pub seconds_per_day: f32,
    elapsed: f32,
}

impl DayClock {
    pub fn new(seconds_per_day: f32) -> Self {
        Self {
            seconds_per_day,
            elapsed: 0.0,
        }
    }

    /// Returns number of days passed since previous update.
    pub fn update(&mut self, real_seconds: f32) -> u32 {
        if self.seconds_per_day <= 0.0 {
            return 0;
        }
        self.elapsed += real_seconds.max(0.0);
        let mut days = 0;
        while self.elapsed >= self.seconds_per_day {
            self.elapsed -= self.seconds_per_day;
            days += 1;
        }
        days
    }

    pub fn seconds_left(&self) -> f32 {
        (self.seconds_per_day - self.elapsed).max(0.0)
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}
