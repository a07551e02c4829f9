//! Cache key builders for all TalentGate cache entries.
//!
//! Centralising key construction prevents typos and makes it easy to
//! find every key the application uses.

use uuid::Uuid;

/// Prefix applied to all TalentGate cache keys.
const PREFIX: &str = "talentgate";

/// Key for a session subject record by session id.
pub fn session(session_id: Uuid) -> String {
    format!("{PREFIX}:session:{session_id}")
}

/// Key for the fixed-window request counter of a route/caller pair.
pub fn rate_limit(route: &str, caller: &str) -> String {
    format!("{PREFIX}:ratelimit:{route}:{caller}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_namespaced() {
        let id = Uuid::new_v4();
        assert_eq!(session(id), format!("talentgate:session:{id}"));
        assert_eq!(
            rate_limit("/login", "10.0.0.1"),
            "talentgate:ratelimit:/login:10.0.0.1"
        );
    }
}
