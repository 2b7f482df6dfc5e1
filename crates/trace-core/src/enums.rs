//! Event types and stakeholder roles.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EventType
// ---------------------------------------------------------------------------

/// Kind of step in a product's supply-chain history.
///
/// ```text
/// origin → processing → transport → retail → purchase
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Origin,
    Processing,
    Transport,
    Retail,
    Purchase,
}

impl EventType {
    /// All event types in journey order.
    pub const ALL: [Self; 5] = [
        Self::Origin,
        Self::Processing,
        Self::Transport,
        Self::Retail,
        Self::Purchase,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Processing => "processing",
            Self::Transport => "transport",
            Self::Retail => "retail",
            Self::Purchase => "purchase",
        }
    }

    /// Human label shown next to a timeline entry.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Origin => "Farm",
            Self::Processing => "Processing",
            Self::Transport => "Transport",
            Self::Retail => "Retail",
            Self::Purchase => "Purchase",
        }
    }

    /// Single-character marker drawn on the timeline rail.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Origin => 'F',
            Self::Processing => 'P',
            Self::Transport => 'T',
            Self::Retail => 'R',
            Self::Purchase => '$',
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StakeholderRole
// ---------------------------------------------------------------------------

/// Who is interacting with the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StakeholderRole {
    Farmer,
    Distributor,
    Retailer,
    Consumer,
}

impl StakeholderRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Farmer => "farmer",
            Self::Distributor => "distributor",
            Self::Retailer => "retailer",
            Self::Consumer => "consumer",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Farmer => "Farmer",
            Self::Distributor => "Distributor",
            Self::Retailer => "Retailer",
            Self::Consumer => "Consumer",
        }
    }

    /// The event type a role records when it handles a product.
    ///
    /// Consumers only read histories, so they record nothing.
    #[must_use]
    pub const fn recorded_event_type(self) -> Option<EventType> {
        match self {
            Self::Farmer => Some(EventType::Origin),
            Self::Distributor => Some(EventType::Transport),
            Self::Retailer => Some(EventType::Retail),
            Self::Consumer => None,
        }
    }
}

impl fmt::Display for StakeholderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_serializes_snake_case() {
        let json = serde_json::to_string(&EventType::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
        let back: EventType = serde_json::from_str("\"purchase\"").unwrap();
        assert_eq!(back, EventType::Purchase);
    }

    #[test]
    fn as_str_matches_serde() {
        for event_type in EventType::ALL {
            let json = serde_json::to_string(&event_type).unwrap();
            assert_eq!(json, format!("\"{}\"", event_type.as_str()));
        }
    }

    #[test]
    fn glyphs_are_distinct() {
        let mut glyphs: Vec<char> = EventType::ALL.iter().map(|t| t.glyph()).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), EventType::ALL.len());
    }

    #[test]
    fn intermediaries_record_their_step() {
        assert_eq!(
            StakeholderRole::Distributor.recorded_event_type(),
            Some(EventType::Transport)
        );
        assert_eq!(
            StakeholderRole::Retailer.recorded_event_type(),
            Some(EventType::Retail)
        );
        assert_eq!(StakeholderRole::Consumer.recorded_event_type(), None);
    }
}
