//! Static state → city reference data for the address fields.

const STATES: &[(&str, &[&str])] = &[
    ("California", &["Los Angeles", "San Francisco", "San Diego"]),
    ("New York", &["New York City", "Buffalo", "Rochester"]),
    ("Texas", &["Houston", "Dallas", "Austin"]),
    ("Florida", &["Miami", "Orlando", "Tampa"]),
    ("Illinois", &["Chicago", "Aurora", "Naperville"]),
];

/// All selectable states, in display order.
pub fn states() -> Vec<&'static str> {
    STATES.iter().map(|(state, _)| *state).collect()
}

/// Cities of `state`. Empty for an unknown state.
pub fn cities(state: &str) -> &'static [&'static str] {
    STATES
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, cities)| *cities)
        .unwrap_or(&[])
}

pub fn is_known_state(state: &str) -> bool {
    STATES.iter().any(|(name, _)| *name == state)
}

/// Whether `city` is one of the cities of `state`.
pub fn is_city_of(state: &str, city: &str) -> bool {
    cities(state).contains(&city)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_in_display_order() {
        assert_eq!(
            states(),
            vec!["California", "New York", "Texas", "Florida", "Illinois"]
        );
    }

    #[test]
    fn test_cities_lookup() {
        assert_eq!(cities("Texas"), &["Houston", "Dallas", "Austin"]);
        assert!(cities("Ohio").is_empty());
        assert!(cities("").is_empty());
    }

    #[test]
    fn test_city_membership() {
        assert!(is_city_of("Florida", "Tampa"));
        assert!(!is_city_of("Florida", "Chicago"));
        assert!(!is_city_of("Nowhere", "Tampa"));
        assert!(is_known_state("Illinois"));
        assert!(!is_known_state("illinois"));
    }
}
