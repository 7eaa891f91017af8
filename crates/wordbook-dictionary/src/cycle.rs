use crate::error::CycleError;

/// Rotates over 2 or 3 markers, tracking which one the parser expects next.
#[derive(Debug, Clone)]
pub struct DelimiterCycle {
    markers: Vec<String>,
    position: usize,
    cycles: usize,
}

impl DelimiterCycle {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            markers: vec![first.into(), second.into()],
            position: 0,
            cycles: 0,
        }
    }

    pub fn with_markers<I, S>(markers: I) -> Result<Self, CycleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let markers: Vec<String> = markers.into_iter().map(Into::into).collect();
        if !(2..=3).contains(&markers.len()) {
            return Err(CycleError::MarkerCount(markers.len()));
        }

        Ok(Self {
            markers,
            position: 0,
            cycles: 0,
        })
    }

    /// Marker expected next; always the first one until the cycle has moved
    pub fn current(&self) -> &str {
        if self.cycles == 0 {
            &self.markers[0]
        } else {
            &self.markers[self.position]
        }
    }

    /// Step to the next marker, wrapping past the end
    pub fn advance(&mut self) -> &str {
        self.position = (self.position + 1) % self.markers.len();
        self.cycles += 1;
        self.current()
    }

    pub fn reset(&mut self) {
        self.position = 0;
        self.cycles = 0;
    }

    /// Number of `advance` calls since the last reset
    pub fn cycles(&self) -> usize {
        self.cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_markers_alternate() {
        let mut cycle = DelimiterCycle::new("|", "-=>>");
        assert_eq!(cycle.current(), "|");
        assert_eq!(cycle.advance(), "-=>>");
        assert_eq!(cycle.advance(), "|");
        assert_eq!(cycle.advance(), "-=>>");
        assert_eq!(cycle.cycles(), 3);
    }

    #[test]
    fn test_three_markers_wrap() {
        let mut cycle = DelimiterCycle::with_markers(["a", "b", "c"]).unwrap();
        assert_eq!(cycle.advance(), "b");
        assert_eq!(cycle.advance(), "c");
        assert_eq!(cycle.advance(), "a");
        assert_eq!(cycle.current(), "a");
    }

    #[test]
    fn test_reset() {
        let mut cycle = DelimiterCycle::new("|", "-=>>");
        cycle.advance();
        cycle.reset();
        assert_eq!(cycle.current(), "|");
        assert_eq!(cycle.cycles(), 0);
    }

    #[test]
    fn test_marker_count() {
        assert_eq!(
            DelimiterCycle::with_markers(["only"]).unwrap_err(),
            CycleError::MarkerCount(1)
        );
        assert_eq!(
            DelimiterCycle::with_markers(["a", "b", "c", "d"]).unwrap_err(),
            CycleError::MarkerCount(4)
        );
    }
}
