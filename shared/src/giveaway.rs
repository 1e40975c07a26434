use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_GIVEAWAY_MAX_PARTICIPANTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GiveawayStatus {
    Active,
    Completed,
    Upcoming,
}

impl GiveawayStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Ended",
            Self::Upcoming => "Upcoming",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Giveaway {
    pub id: String,
    pub title: String,
    pub prize: String,
    pub end_time: String,
    pub participants: u32,
    #[serde(default = "default_max_participants")]
    pub max_participants: u32,
    pub status: GiveawayStatus,
    #[serde(default)]
    pub is_entered: bool,
}

fn default_max_participants() -> u32 {
    DEFAULT_GIVEAWAY_MAX_PARTICIPANTS
}

impl Giveaway {
    pub fn participation_percentage(&self) -> u32 {
        participation_percentage(self.participants, self.max_participants)
    }

    pub fn can_enter(&self) -> bool {
        self.status == GiveawayStatus::Active && !self.is_entered
    }
}

/// Filled share of the entry cap, floored and capped at 100. A zero cap reads as full.
pub fn participation_percentage(participants: u32, max_participants: u32) -> u32 {
    if max_participants == 0 {
        return 100;
    }
    let percentage = u64::from(participants) * 100 / u64::from(max_participants);
    percentage.min(100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participation_percentage() {
        assert_eq!(participation_percentage(0, 100), 0);
        assert_eq!(participation_percentage(33, 200), 16);
        assert_eq!(participation_percentage(250, 100), 100);
        assert_eq!(participation_percentage(5, 0), 100);
    }

    #[test]
    fn test_giveaway_defaults_and_entry() {
        let giveaway: Giveaway = serde_json::from_str(
            r#"{"id":"g1","title":"Weekly Drop","prize":"$100","endTime":"Sunday","participants":42,"status":"active"}"#,
        )
        .unwrap();
        assert_eq!(giveaway.max_participants, 100);
        assert_eq!(giveaway.participation_percentage(), 42);
        assert!(giveaway.can_enter());

        let entered = Giveaway {
            is_entered: true,
            ..giveaway
        };
        assert!(!entered.can_enter());
    }
}
