use serde::Serialize;

/// Outgoing invitations of a single player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InviteSummary {
    pub total_invites: usize,
    pub invited_players: Vec<String>,
}

impl From<Vec<String>> for InviteSummary {
    fn from(invited_players: Vec<String>) -> Self {
        Self {
            total_invites: invited_players.len(),
            invited_players,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn total_matches_list_length() {
        let summary = InviteSummary::from(vec!["bob".to_string(), "carol".to_string()]);

        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({ "total_invites": 2, "invited_players": ["bob", "carol"] })
        );
    }

    #[test]
    fn nobody_invited() {
        let summary = InviteSummary::from(Vec::new());

        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({ "total_invites": 0, "invited_players": [] })
        );
    }
}
