use chrono::{DateTime, Utc};
use venue_shared_contracts::time::TimeService;

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_monotonic() {
        // Arrange
        let sut = TimeServiceImpl;

        // Act
        let first = sut.now();
        let second = sut.now();

        // Assert
        assert!(first <= second);
    }
}
