//! Developer directory fallback.

use triage_common::Developer;

/// Fixed fallback roster used when the remote roster is unreachable.
/// Names and order are stable across calls so reassignment options stay
/// consistent within a session.
pub const FALLBACK_ROSTER: [&str; 8] = [
    "Alice Johnson",
    "Bob Smith",
    "Carol Davis",
    "David Wilson",
    "Emma Brown",
    "Frank Miller",
    "Grace Lee",
    "Henry Taylor",
];

pub fn fallback_roster() -> Vec<Developer> {
    FALLBACK_ROSTER.iter().copied().map(Developer::named).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_is_stable_across_calls() {
        assert_eq!(fallback_roster(), fallback_roster());
    }

    #[test]
    fn roster_has_eight_unique_names() {
        let roster = fallback_roster();
        assert_eq!(roster.len(), 8);
        let mut names: Vec<&str> = roster.iter().map(|d| d.name.as_str()).collect();
        names.dedup();
        assert_eq!(names.len(), 8);
        assert_eq!(names[0], "Alice Johnson");
        assert_eq!(names[7], "Henry Taylor");
    }
}
