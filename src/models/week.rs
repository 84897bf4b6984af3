use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// One value per weekday, serialized under lowercase English day names.
/// All seven keys are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week<T> {
    pub monday: T,
    pub tuesday: T,
    pub wednesday: T,
    pub thursday: T,
    pub friday: T,
    pub saturday: T,
    pub sunday: T,
}

impl<T> Week<T> {
    /// Build a week by evaluating `f` for each day, Monday first.
    pub fn from_fn(mut f: impl FnMut(Weekday) -> T) -> Self {
        Self {
            monday: f(Weekday::Mon),
            tuesday: f(Weekday::Tue),
            wednesday: f(Weekday::Wed),
            thursday: f(Weekday::Thu),
            friday: f(Weekday::Fri),
            saturday: f(Weekday::Sat),
            sunday: f(Weekday::Sun),
        }
    }

    pub fn get(&self, day: Weekday) -> &T {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn get_mut(&mut self, day: Weekday) -> &mut T {
        match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }
}
