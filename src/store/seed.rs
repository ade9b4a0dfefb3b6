//! Room catalog loaded at startup

use crate::core::{Meeting, Room};

fn room(id: &str, name: &str, capacity: u32, available: bool, meetings: Vec<Meeting>) -> Room {
    Room {
        id: id.to_string(),
        name: name.to_string(),
        capacity,
        available,
        meetings_today: meetings,
    }
}

/// The fixed set of rooms served by the directory
pub fn seeded_rooms() -> Vec<Room> {
    vec![
        room("boardroom", "Boardroom", 20, false, vec![
            Meeting::new("08:30–09:30", "Exec Standup", "CEO Office"),
            Meeting::new("10:00–12:00", "Q2 Strategy", "A. Rivera"),
            Meeting::new("14:00–16:00", "Board Review", "B. Chen"),
        ]),
        room("conf_a", "Conf A", 12, true, vec![
            Meeting::new("13:00–14:00", "Sprint Planning", "Dev Team"),
        ]),
        room("conf_b", "Conf B", 10, false, vec![
            Meeting::new("09:00–10:30", "UX Review", "Design"),
            Meeting::new("11:00–12:00", "Vendor Call", "Procurement"),
            Meeting::new("15:00–16:00", "Retro", "Scrum Master"),
        ]),
        room("conf_c", "Conf C", 10, true, vec![
            Meeting::new("14:30–15:30", "HR One-on-Ones", "HR Dept"),
        ]),
        room("conf_d", "Conf D", 12, true, vec![]),
        room("conf_e", "Conf E", 10, false, vec![
            Meeting::new("09:30–11:00", "Client Demo", "Sales"),
            Meeting::new("13:00–14:30", "Partner Sync", "Partnerships"),
        ]),
        room("focus_a", "Focus A", 4, true, vec![
            Meeting::new("10:00–11:00", "1-on-1: Eng", "T. Park"),
        ]),
        room("focus_b", "Focus B", 4, true, vec![]),
        room("focus_c", "Focus C", 4, false, vec![
            Meeting::new("08:00–09:00", "Morning Briefing", "Ops"),
            Meeting::new("15:30–16:00", "Quick Sync", "M. Wang"),
        ]),
        room("focus_d", "Focus D", 4, true, vec![]),
        room("east_a", "East Mtg A", 6, true, vec![
            Meeting::new("11:00–12:00", "Cross-team Sync", "PM Office"),
        ]),
        room("east_b", "East Mtg B", 6, false, vec![
            Meeting::new("09:00–17:00", "All-day Workshop", "L&D Team"),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_unique() {
        let rooms = seeded_rooms();
        let ids: HashSet<&str> = rooms.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), rooms.len());
        assert_eq!(rooms.len(), 12);
    }

    #[test]
    fn test_seed_capacities_positive() {
        assert!(seeded_rooms().iter().all(|r| r.capacity > 0));
    }
}
