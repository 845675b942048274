// Settings module
// Display preferences for the calendar views

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    /// Height of one hour in day and week time grids.
    pub hour_height_px: f32,
    /// Duration used for timed tasks whose end time is missing or unusable.
    pub default_event_minutes: u32,
    pub hide_completed: bool,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            hour_height_px: 60.0,
            default_event_minutes: 60,
            hide_completed: false,
        }
    }
}

impl CalendarSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !self.hour_height_px.is_finite() || self.hour_height_px <= 0.0 {
            return Err(format!(
                "hour_height_px must be a positive number, got {}",
                self.hour_height_px
            ));
        }

        if !(1..=1440).contains(&self.default_event_minutes) {
            return Err(format!(
                "default_event_minutes must be between 1 and 1440, got {}",
                self.default_event_minutes
            ));
        }

        Ok(())
    }
}
