use crate::domain::DomainError;

/// The prompt always asks for this many suggestions per day of the trip.
pub const PLACES_PER_DAY: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryRequest {
    destination: String,
    days: u32,
}

impl ItineraryRequest {
    pub fn new(destination: impl Into<String>, days: u32) -> Result<Self, DomainError> {
        if days == 0 {
            return Err(DomainError::invalid_input(
                "days must be a positive integer",
            ));
        }
        Ok(Self {
            destination: destination.into(),
            days,
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Widened so that any `u32` day count multiplies without overflow.
    pub fn place_count(&self) -> u64 {
        u64::from(self.days) * u64::from(PLACES_PER_DAY)
    }

    /// The destination is inserted verbatim.
    pub fn prompt(&self) -> String {
        format!(
            "Give me a list of {} most popular places to go in {}. \
             Put each place (name and description together) between ' and separate each place by ,. \
             Also, put the name of each place between * and the description after. \
             Do not put numbers in front.",
            self.place_count(),
            self.destination
        )
    }
}
