use crate::models::Activity;

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: [&'static str; 2],
}

const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: ["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: ["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: ["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Team",
        description: "Competitive soccer team training and matches",
        schedule: "Mondays, Wednesdays, 4:00 PM - 6:00 PM",
        max_participants: 18,
        participants: ["liam@mergington.edu", "noah@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Club",
        description: "Pickup games and skill development for basketball players",
        schedule: "Tuesdays, Thursdays, 4:00 PM - 6:00 PM",
        max_participants: 15,
        participants: ["ava@mergington.edu", "isabella@mergington.edu"],
    },
    SeedActivity {
        name: "Art Club",
        description: "Explore drawing, painting, and mixed media projects",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 16,
        participants: ["mia@mergington.edu", "charlotte@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Society",
        description: "Acting, stagecraft, and putting on school productions",
        schedule: "Thursdays, 3:30 PM - 5:30 PM",
        max_participants: 25,
        participants: ["logan@mergington.edu", "lucas@mergington.edu"],
    },
    SeedActivity {
        name: "Science Club",
        description: "Hands-on experiments, science fairs, and research projects",
        schedule: "Fridays, 2:30 PM - 4:00 PM",
        max_participants: 20,
        participants: ["amelia@mergington.edu", "harper@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Practice formal debating and compete in tournaments",
        schedule: "Mondays, Tuesdays, 3:30 PM - 5:00 PM",
        max_participants: 14,
        participants: ["jackson@mergington.edu", "elijah@mergington.edu"],
    },
];

/// The activity set every process starts with.
pub fn seed_activities() -> Vec<(String, Activity)> {
    SEED_ACTIVITIES
        .iter()
        .map(|seed| {
            let activity = Activity::new(seed.description, seed.schedule, seed.max_participants)
                .with_participants(seed.participants);
            (seed.name.to_string(), activity)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_has_nine_uniquely_named_activities() {
        let seeds = seed_activities();
        assert_eq!(seeds.len(), 9);
        let names: HashSet<_> = seeds.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn seeded_rosters_fit_capacity() {
        for (name, activity) in seed_activities() {
            assert_eq!(activity.participants.len(), 2, "{name}");
            assert!(activity.participants.len() <= activity.max_participants as usize, "{name}");
        }
    }
}
