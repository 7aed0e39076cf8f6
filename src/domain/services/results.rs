use serde::Serialize;

use crate::domain::models::participant::Participant;
use crate::domain::models::restaurant::Restaurant;
use crate::domain::models::vote::SessionVote;

#[derive(Debug, Serialize, Clone)]
pub struct VoterEntry {
    pub participant_id: String,
    pub participant_name: String,
    pub liked: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct RestaurantTally {
    pub restaurant: Restaurant,
    pub yes_votes: i64,
    pub total_votes: i64,
    pub voters: Vec<VoterEntry>,
}

/// Builds the ranked tally for a session: every catalog restaurant, joined
/// with all votes cast by the session's participants, sorted by yes-votes
/// descending, then total votes descending. The sort is stable so remaining
/// ties keep catalog order, making the display reproducible.
pub fn ranked_tallies(catalog: &[Restaurant], votes: &[SessionVote]) -> Vec<RestaurantTally> {
    let mut tallies: Vec<RestaurantTally> = catalog
        .iter()
        .map(|restaurant| {
            let voters: Vec<VoterEntry> = votes
                .iter()
                .filter(|v| v.restaurant_id == restaurant.id)
                .map(|v| VoterEntry {
                    participant_id: v.participant_id.clone(),
                    participant_name: v.participant_name.clone(),
                    liked: v.liked,
                })
                .collect();

            let yes_votes = voters.iter().filter(|v| v.liked).count() as i64;
            let total_votes = voters.len() as i64;

            RestaurantTally {
                restaurant: restaurant.clone(),
                yes_votes,
                total_votes,
                voters,
            }
        })
        .collect();

    tallies.sort_by_key(|t| (-t.yes_votes, -t.total_votes));
    tallies
}

/// Participants still swiping, in join order.
pub fn pending_participants(participants: &[Participant]) -> Vec<Participant> {
    participants
        .iter()
        .filter(|p| !p.is_completed())
        .cloned()
        .collect()
}

/// True once every participant has completed. A session with no participants
/// is never finished, so an empty lobby does not show results.
pub fn everyone_finished(participants: &[Participant]) -> bool {
    !participants.is_empty() && participants.iter().all(|p| p.is_completed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn restaurant(id: i64) -> Restaurant {
        Restaurant {
            id,
            name: format!("Restaurant {}", id),
            cuisine: "Test".into(),
            rating: None,
            price_level: None,
            distance: None,
            description: None,
            image_url: None,
        }
    }

    fn vote(restaurant_id: i64, participant: &str, liked: bool) -> SessionVote {
        SessionVote {
            restaurant_id,
            liked,
            participant_id: participant.to_string(),
            participant_name: participant.to_string(),
        }
    }

    fn participant(name: &str, completed: bool) -> Participant {
        let mut p = Participant::new("s1".into(), name.into());
        if completed {
            p.completed_at = Some(Utc::now());
        }
        p
    }

    #[test]
    fn test_ranking_breaks_yes_ties_on_total_votes() {
        // R1: 3 yes / 4 total, R2: 3 yes / 2 total, R3: 1 yes / 1 total
        let catalog = vec![restaurant(1), restaurant(2), restaurant(3)];
        let votes = vec![
            vote(1, "a", true),
            vote(1, "b", true),
            vote(1, "c", true),
            vote(1, "d", false),
            vote(2, "a", true),
            vote(2, "b", true),
            vote(2, "c", true),
            vote(3, "a", true),
        ];

        let tallies = ranked_tallies(&catalog, &votes);
        let order: Vec<i64> = tallies.iter().map(|t| t.restaurant.id).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(tallies[0].yes_votes, 3);
        assert_eq!(tallies[0].total_votes, 4);
        assert_eq!(tallies[1].total_votes, 3);
    }

    #[test]
    fn test_full_ties_keep_catalog_order() {
        let catalog = vec![restaurant(1), restaurant(2), restaurant(3)];
        let votes = vec![vote(1, "a", true), vote(2, "a", true), vote(3, "a", true)];

        let order: Vec<i64> = ranked_tallies(&catalog, &votes)
            .iter()
            .map(|t| t.restaurant.id)
            .collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_unvoted_restaurants_still_appear_in_tally() {
        let catalog = vec![restaurant(1), restaurant(2)];
        let votes = vec![vote(2, "a", true)];

        let tallies = ranked_tallies(&catalog, &votes);
        assert_eq!(tallies.len(), 2);
        assert_eq!(tallies[0].restaurant.id, 2);
        assert_eq!(tallies[1].yes_votes, 0);
        assert!(tallies[1].voters.is_empty());
    }

    #[test]
    fn test_everyone_finished_edge_cases() {
        assert!(!everyone_finished(&[]), "Empty session must not count as finished");

        let mixed = vec![participant("a", true), participant("b", false)];
        assert!(!everyone_finished(&mixed));
        assert_eq!(pending_participants(&mixed).len(), 1);
        assert_eq!(pending_participants(&mixed)[0].name, "b");

        let done = vec![participant("a", true), participant("b", true)];
        assert!(everyone_finished(&done));
        assert!(pending_participants(&done).is_empty());
    }
}
