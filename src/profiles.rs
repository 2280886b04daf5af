//! Static descriptive content per trait.

use crate::core::DiscTrait;
use serde::Serialize;

/// Display content for one trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraitProfile {
    /// Full label, e.g. "Dominance (D)".
    pub name: &'static str,
    /// Short label without the code, e.g. "Dominance".
    pub title: &'static str,
    pub nickname: &'static str,
    pub description: &'static str,
    pub exemplars: [&'static str; 2],
}

const DOMINANCE: TraitProfile = TraitProfile {
    name: "Dominance (D)",
    title: "Dominance",
    nickname: "The Winner",
    description: "Bold, Decisive, Results-driven. Takes charge, Moves fast, Persistent, \
                  Adventurous, Problem Solver, Direct and Embraces challenges.",
    exemplars: ["Steve Jobs", "Serena Williams"],
};

const INFLUENCE: TraitProfile = TraitProfile {
    name: "Influence (I)",
    title: "Influence",
    nickname: "The Enthusiast",
    description: "Enthusiastic, Social, Inspiring. Energizes groups, Charming, Confident, \
                  Convincing, Sociable, Trusting and Communicates with optimism.",
    exemplars: ["Oprah Winfrey", "Will Smith"],
};

const STEADINESS: TraitProfile = TraitProfile {
    name: "Steadiness (S)",
    title: "Steadiness",
    nickname: "The Peacekeeper",
    description: "Patient, Dependable, Calm. Values harmony, Empathy, Understanding, Friendly, \
                  Good listener, Relaxed, Sincere, Stable, Team Player and Consistent support.",
    exemplars: ["Mahatma Gandhi", "Fred Rogers"],
};

const CONSCIENTIOUS: TraitProfile = TraitProfile {
    name: "Conscientious (C)",
    title: "Conscientious",
    nickname: "The Analyst",
    description: "Analytical, Precise, Quality-focused, Logical, Accurate, Compliant, \
                  Courteous, Detailed, Diplomatic, Fact-finder, Objective and Clear standards.",
    exemplars: ["Marie Curie", "Bill Gates"],
};

pub fn profile(disc_trait: DiscTrait) -> &'static TraitProfile {
    match disc_trait {
        DiscTrait::D => &DOMINANCE,
        DiscTrait::I => &INFLUENCE,
        DiscTrait::S => &STEADINESS,
        DiscTrait::C => &CONSCIENTIOUS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_trait_has_profile_with_its_code() {
        for t in DiscTrait::ALL {
            let p = profile(t);
            assert!(p.name.ends_with(&format!("({})", t.code())));
            assert!(p.name.starts_with(p.title));
            assert!(!p.description.is_empty());
        }
    }

    #[test]
    fn test_nicknames() {
        assert_eq!(profile(DiscTrait::D).nickname, "The Winner");
        assert_eq!(profile(DiscTrait::C).nickname, "The Analyst");
    }
}
