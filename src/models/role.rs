use serde::{Deserialize, Serialize};

/// Work position held on a day. Advisory only: never used in aggregation math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Role {
    Picker,   // PREPA
    Cleaning, // NETTOYAGE
    Stuffer,  // BOURREUR
    Box,      // BOX
    Other,    // AUTRE
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::Picker => "PREPA",
            Role::Cleaning => "NETTOYAGE",
            Role::Stuffer => "BOURREUR",
            Role::Box => "BOX",
            Role::Other => "AUTRE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Picker => "Picker",
            Role::Cleaning => "Cleaning",
            Role::Stuffer => "Stuffer",
            Role::Box => "Box",
            Role::Other => "Other",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert DB string → enum (case-insensitive)
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "PREPA" => Some(Role::Picker),
            "NETTOYAGE" => Some(Role::Cleaning),
            "BOURREUR" => Some(Role::Stuffer),
            "BOX" => Some(Role::Box),
            "AUTRE" => Some(Role::Other),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_codes_round_trip_case_insensitively() {
        assert_eq!(Role::from_db_str("prepa"), Some(Role::Picker));
        assert_eq!(Role::from_db_str(Role::Box.to_db_str()), Some(Role::Box));
        assert_eq!(Role::from_db_str("driver"), None);
    }
}
