//! Role catalogue.
//!
//! Role codes are compared case-insensitively everywhere; [`normalize`] is the
//! single place that folds them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    SuperAdmin,
    DirectorUtama,
    DirectorOps,
    Manager,
    Kurator,
    HeadKeeper,
    Keeper,
    Kesehatan,
    AnimalRegister,
    StoreMaster,
    View,
}

impl Role {
    pub const ALL: [Role; 11] = [
        Role::SuperAdmin,
        Role::DirectorUtama,
        Role::DirectorOps,
        Role::Manager,
        Role::Kurator,
        Role::HeadKeeper,
        Role::Keeper,
        Role::Kesehatan,
        Role::AnimalRegister,
        Role::StoreMaster,
        Role::View,
    ];

    /// Wire code as sent by the API.
    pub const fn code(self) -> &'static str {
        match self {
            Role::SuperAdmin => "super-admin",
            Role::DirectorUtama => "director-utama",
            Role::DirectorOps => "director-ops",
            Role::Manager => "manager",
            Role::Kurator => "kurator",
            Role::HeadKeeper => "head-keeper",
            Role::Keeper => "keeper",
            Role::Kesehatan => "kesehatan",
            Role::AnimalRegister => "animal-register",
            Role::StoreMaster => "store-master",
            Role::View => "view",
        }
    }

    pub fn from_code(code: &str) -> Option<Role> {
        let code = normalize(code);
        Role::ALL.into_iter().find(|r| r.code() == code)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::DirectorUtama => "Managing Director",
            Role::DirectorOps => "Operations Director",
            Role::Manager => "Manager",
            Role::Kurator => "Curator",
            Role::HeadKeeper => "Head Keeper",
            Role::Keeper => "Keeper",
            Role::Kesehatan => "Veterinary",
            Role::AnimalRegister => "Animal Registrar",
            Role::StoreMaster => "Store Master",
            Role::View => "Viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        self.code()
    }
}

/// Executive roles.
pub const ADMIN_ROLES: [Role; 3] = [Role::SuperAdmin, Role::DirectorUtama, Role::DirectorOps];

/// Executive plus mid-management roles.
pub const MANAGEMENT_ROLES: [Role; 6] = [
    Role::SuperAdmin,
    Role::DirectorUtama,
    Role::DirectorOps,
    Role::Manager,
    Role::Kurator,
    Role::HeadKeeper,
];

/// Executive plus manager and read-only viewer.
pub const FULL_ACCESS_ROLES: [Role; 5] = [
    Role::SuperAdmin,
    Role::DirectorUtama,
    Role::DirectorOps,
    Role::Manager,
    Role::View,
];

/// Case-folded, trimmed role code.
pub fn normalize(code: &str) -> String {
    code.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_in_any_casing() {
        for role in Role::ALL {
            assert_eq!(Role::from_code(role.code()), Some(role));
            assert_eq!(Role::from_code(&role.code().to_uppercase()), Some(role));
        }
        assert_eq!(Role::from_code(" Head-Keeper "), Some(Role::HeadKeeper));
        assert_eq!(Role::from_code("janitor"), None);
    }
}
