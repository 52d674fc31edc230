//! Static map from navigation path to the roles allowed to see it.

use std::collections::HashMap;

use super::permissions::RoleSet;
use super::roles::{normalize, Role};

/// What happens for a path the map does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessPolicy {
    /// Undeclared routes are visible to every authenticated user.
    #[default]
    FailOpen,
    /// Undeclared routes are hidden.
    FailClosed,
}

impl AccessPolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "open" | "fail-open" => Some(AccessPolicy::FailOpen),
            "closed" | "fail-closed" => Some(AccessPolicy::FailClosed),
            _ => None,
        }
    }
}

const ANIMAL_ROLES: &[Role] = &[
    Role::AnimalRegister,
    Role::DirectorOps,
    Role::DirectorUtama,
    Role::HeadKeeper,
    Role::Kesehatan,
    Role::Kurator,
    Role::Manager,
    Role::SuperAdmin,
    Role::View,
];

const CAGE_ROLES: &[Role] = &[
    Role::DirectorOps,
    Role::DirectorUtama,
    Role::HeadKeeper,
    Role::Kesehatan,
    Role::Kurator,
    Role::Manager,
    Role::SuperAdmin,
    Role::View,
];

const FEED_ROLES: &[Role] = &[
    Role::DirectorOps,
    Role::DirectorUtama,
    Role::HeadKeeper,
    Role::Keeper,
    Role::Kesehatan,
    Role::Kurator,
    Role::Manager,
    Role::SuperAdmin,
    Role::View,
];

const TASK_ROLES: &[Role] = &[
    Role::DirectorOps,
    Role::DirectorUtama,
    Role::HeadKeeper,
    Role::Keeper,
    Role::Kurator,
    Role::Manager,
    Role::SuperAdmin,
    Role::View,
];

const STOCK_ROLES: &[Role] = &[
    Role::DirectorOps,
    Role::DirectorUtama,
    Role::Manager,
    Role::StoreMaster,
    Role::SuperAdmin,
    Role::View,
];

pub const MASTER_DATA_PATHS: [&str; 10] = [
    "/unit-area",
    "/zone-area",
    "/family",
    "/feed-category",
    "/cage-model",
    "/cage-type",
    "/feed-type",
    "/mix-feed",
    "/species",
    "/unit",
];

/// Path -> allowed role codes. An empty entry means "everyone".
#[derive(Debug, Clone, Default)]
pub struct PermissionMap {
    entries: HashMap<String, Vec<String>>,
    policy: AccessPolicy,
}

impl PermissionMap {
    pub fn new(policy: AccessPolicy) -> Self {
        Self {
            entries: HashMap::new(),
            policy,
        }
    }

    pub fn with_entry<S: AsRef<str>>(mut self, path: &str, roles: &[S]) -> Self {
        self.entries.insert(
            path.to_string(),
            roles.iter().map(|r| normalize(r.as_ref())).collect(),
        );
        self
    }

    /// The back-office route table.
    pub fn standard(policy: AccessPolicy) -> Self {
        let mut map = Self::new(policy)
            .with_entry("/dashboard", &Role::ALL)
            .with_entry("/animal", ANIMAL_ROLES)
            .with_entry("/mutation", ANIMAL_ROLES)
            .with_entry("/sick", ANIMAL_ROLES)
            .with_entry("/dead", ANIMAL_ROLES)
            .with_entry("/cage", CAGE_ROLES)
            .with_entry("/feed", FEED_ROLES)
            .with_entry("/task", TASK_ROLES)
            .with_entry("/stock", STOCK_ROLES);
        for path in MASTER_DATA_PATHS {
            map = map.with_entry(path, ANIMAL_ROLES);
        }
        map
    }

    /// Declared roles for `path`, `None` when the path is undeclared.
    pub fn allowed_roles(&self, path: &str) -> Option<&[String]> {
        self.entries.get(path).map(Vec::as_slice)
    }

    pub fn can_access_menu(&self, path: &str, user_roles: &RoleSet) -> bool {
        match self.allowed_roles(path) {
            None => self.policy == AccessPolicy::FailOpen,
            Some([]) => true,
            Some(allowed) => user_roles.intersects(allowed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(codes: &[&str]) -> RoleSet {
        RoleSet::from_codes(codes)
    }

    fn can_access_menu(path: &str, user_roles: &RoleSet) -> bool {
        PermissionMap::standard(AccessPolicy::FailOpen).can_access_menu(path, user_roles)
    }

    #[test]
    fn test_undeclared_path_is_open_by_default() {
        assert!(can_access_menu("/reports", &roles(&[])));
        assert!(can_access_menu("/reports", &roles(&["keeper"])));
    }

    #[test]
    fn test_undeclared_path_closed_policy() {
        let map = PermissionMap::standard(AccessPolicy::FailClosed);
        assert!(!map.can_access_menu("/reports", &roles(&["super-admin"])));
        assert!(map.can_access_menu("/animal", &roles(&["super-admin"])));
    }

    #[test]
    fn test_empty_declaration_is_public() {
        let map = PermissionMap::new(AccessPolicy::FailClosed).with_entry::<&str>("/help", &[]);
        assert!(map.can_access_menu("/help", &roles(&[])));
    }

    #[test]
    fn test_declared_paths() {
        let keeper = roles(&["Keeper"]);
        assert!(can_access_menu("/feed", &keeper));
        assert!(can_access_menu("/task", &keeper));
        assert!(!can_access_menu("/animal", &keeper));
        assert!(!can_access_menu("/stock", &keeper));

        let vet = roles(&["kesehatan"]);
        assert!(can_access_menu("/cage", &vet));
        assert!(!can_access_menu("/task", &vet));

        let registrar = roles(&["animal-register"]);
        assert!(can_access_menu("/family", &registrar));
        assert!(!can_access_menu("/cage", &registrar));

        assert!(can_access_menu("/stock", &roles(&["store-master"])));
        assert!(!can_access_menu("/dashboard", &roles(&[])));
    }

    #[test]
    fn test_dashboard_open_to_every_role() {
        for role in Role::ALL {
            assert!(can_access_menu("/dashboard", &roles(&[role.code()])));
        }
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(AccessPolicy::parse("Closed"), Some(AccessPolicy::FailClosed));
        assert_eq!(AccessPolicy::parse("open"), Some(AccessPolicy::FailOpen));
        assert_eq!(AccessPolicy::parse("maybe"), None);
    }

    #[test]
    fn test_declared_roles_are_normalized() {
        let map = PermissionMap::new(AccessPolicy::FailClosed).with_entry("/reports", &[" Manager ", "KURATOR"]);
        assert_eq!(map.allowed_roles("/reports"), Some(&["manager".to_string(), "kurator".to_string()][..]));
        assert!(map.can_access_menu("/reports", &roles(&["manager"])));
        assert!(map.can_access_menu("/reports", &roles(&["Kurator"])));
        assert!(!map.can_access_menu("/reports", &roles(&["keeper"])));
    }
}
