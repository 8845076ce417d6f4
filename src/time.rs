//! Time sampling for the clock face

use core::fmt;

use chrono::Timelike;

/// Half of the day a [`SampledTime`] falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Suffix shown after the digital readout
    pub fn suffix(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// Hour above 11, or minute/second above 59
    OutOfRange,
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeError::OutOfRange => f.write_str("time field out of range"),
        }
    }
}

/// Wall-clock time read once per frame.
///
/// Hours are on the 12 hour dial (0 to 11), with the half of the day kept
/// separately in `meridiem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampledTime {
    hour: u8,
    minute: u8,
    second: u8,
    meridiem: Meridiem,
}

impl SampledTime {
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
        meridiem: Meridiem::Am,
    };

    /// Create a sampled time, checking every field against the dial
    pub fn new(hour: u8, minute: u8, second: u8, meridiem: Meridiem) -> Result<Self, TimeError> {
        if hour > 11 || minute > 59 || second > 59 {
            return Err(TimeError::OutOfRange);
        }
        Ok(Self {
            hour,
            minute,
            second,
            meridiem,
        })
    }

    /// Convert a 24 hour chrono time onto the 12 hour dial.
    ///
    /// A leap second (reported by chrono as second 59 with extra
    /// nanoseconds) stays on 59.
    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        let hour = time.hour();
        Self {
            hour: (hour % 12) as u8,
            minute: time.minute().min(59) as u8,
            second: time.second().min(59) as u8,
            meridiem: if hour < 12 { Meridiem::Am } else { Meridiem::Pm },
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }
}

/// Source of the current wall-clock time
pub trait TimeSource {
    /// Sample the current time
    fn now(&self) -> SampledTime;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> SampledTime {
        (**self).now()
    }
}

/// Clock that always reports the same time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub SampledTime);

impl FixedClock {
    /// Point the clock at another time
    pub fn set(&mut self, time: SampledTime) {
        self.0 = time;
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> SampledTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn rejects_fields_outside_the_dial() {
        assert_eq!(SampledTime::new(12, 0, 0, Meridiem::Am), Err(TimeError::OutOfRange));
        assert_eq!(SampledTime::new(0, 60, 0, Meridiem::Am), Err(TimeError::OutOfRange));
        assert_eq!(SampledTime::new(0, 0, 60, Meridiem::Pm), Err(TimeError::OutOfRange));
        assert!(SampledTime::new(11, 59, 59, Meridiem::Pm).is_ok());
    }

    #[test]
    fn error_message() {
        assert_eq!(TimeError::OutOfRange.to_string(), "time field out of range");
    }

    #[test]
    fn converts_24_hour_time() {
        let t = NaiveTime::from_hms_opt(21, 5, 3).unwrap();
        assert_eq!(
            SampledTime::from_timelike(&t),
            SampledTime::new(9, 5, 3, Meridiem::Pm).unwrap()
        );

        let t = NaiveTime::from_hms_opt(12, 30, 0).unwrap();
        let sampled = SampledTime::from_timelike(&t);
        assert_eq!(sampled.hour(), 0);
        assert_eq!(sampled.meridiem(), Meridiem::Pm);

        let t = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        assert_eq!(SampledTime::from_timelike(&t), SampledTime::MIDNIGHT);
    }

    #[test]
    fn leap_second_stays_on_the_dial() {
        let t = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        assert_eq!(SampledTime::from_timelike(&t).second(), 59);
    }

    #[test]
    fn fixed_clock_reports_what_it_was_given() {
        let mut clock = FixedClock(SampledTime::MIDNIGHT);
        assert_eq!(clock.now(), SampledTime::MIDNIGHT);

        let later = SampledTime::new(3, 15, 0, Meridiem::Pm).unwrap();
        clock.set(later);
        assert_eq!((&clock).now(), later);
    }
}
