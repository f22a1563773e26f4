use crate::models::{Activity, Directory};

const NO_PARTICIPANTS: &str = "No participants yet";

/// `signed up/capacity`. May exceed 1 since capacity is not enforced.
pub fn capacity_fraction(activity: &Activity) -> String {
    format!(
        "{}/{}",
        activity.participants.len(),
        activity.max_participants
    )
}

pub fn render_card(name: &str, activity: &Activity) -> String {
    let mut card = format!(
        "{name}\n  {}\n  Schedule: {}\n  Capacity: {}\n  Participants:\n",
        activity.description,
        activity.schedule,
        capacity_fraction(activity)
    );
    if activity.participants.is_empty() {
        card.push_str(&format!("    ({NO_PARTICIPANTS})\n"));
    } else {
        for email in &activity.participants {
            card.push_str(&format!("    - {email}\n"));
        }
    }
    card
}

/// Activity names in the order a selection control lists them.
pub fn activity_options(activities: &Directory) -> Vec<&str> {
    activities.keys().map(String::as_str).collect()
}

pub fn render_directory(activities: &Directory) -> String {
    if activities.is_empty() {
        return "No activities available.\n".to_string();
    }

    let cards: Vec<String> = activities
        .iter()
        .map(|(name, activity)| render_card(name, activity))
        .collect();
    let options = activity_options(activities)
        .iter()
        .map(|name| format!("  * {name}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\nSign up for:\n{}\n", cards.join("\n"), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(max: u32, participants: &[&str]) -> Activity {
        Activity {
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_activity_shows_placeholder() {
        let card = render_card("Chess Club", &activity(12, &[]));
        assert!(card.starts_with("Chess Club\n"));
        assert!(card.contains("Capacity: 0/12"));
        assert!(card.contains(NO_PARTICIPANTS));
    }

    #[test]
    fn test_full_activity_still_renders_everyone() {
        let emails: Vec<String> = (0..12).map(|i| format!("s{i}@mergington.edu")).collect();
        let refs: Vec<&str> = emails.iter().map(String::as_str).collect();
        let card = render_card("Chess Club", &activity(12, &refs));
        assert!(card.contains("Capacity: 12/12"));
        for email in &emails {
            assert!(card.contains(email.as_str()));
        }
        assert!(!card.contains(NO_PARTICIPANTS));
    }

    #[test]
    fn test_over_capacity_fraction() {
        assert_eq!(capacity_fraction(&activity(1, &["a@x", "b@x"])), "2/1");
    }

    #[test]
    fn test_directory_lists_cards_and_options() {
        let mut dir = Directory::new();
        dir.insert("Chess Club".to_string(), activity(12, &["ada@mergington.edu"]));
        dir.insert("Art Club".to_string(), activity(15, &[]));

        assert_eq!(activity_options(&dir), vec!["Art Club", "Chess Club"]);
        let out = render_directory(&dir);
        assert!(out.contains("    - ada@mergington.edu"));
        assert!(out.contains("Sign up for:\n  * Art Club\n  * Chess Club\n"));
    }

    #[test]
    fn test_empty_directory() {
        assert_eq!(render_directory(&Directory::new()), "No activities available.\n");
    }
}
