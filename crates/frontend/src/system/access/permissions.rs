//! Permission evaluator over the authenticated user's roles.
//!
//! All checks are total: an absent user or one without roles simply has no
//! permission. Only primary roles (`role_user`) count for [`has_role`];
//! secondary roles widen the effective set used for menu visibility.

use contracts::system::auth::{RoleAssignment, UserProfile};

use super::menu_permissions::PermissionMap;
use super::roles::{normalize, Role, ADMIN_ROLES, FULL_ACCESS_ROLES, MANAGEMENT_ROLES};

/// Case-folded role codes in first-seen order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(Vec<String>);

impl RoleSet {
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = RoleSet::default();
        for code in codes {
            set.insert(code.as_ref());
        }
        set
    }

    fn from_assignments<'a>(roles: impl IntoIterator<Item = &'a RoleAssignment>) -> Self {
        Self::from_codes(roles.into_iter().map(|r| r.role_code.as_str()))
    }

    pub fn insert(&mut self, code: &str) {
        let code = normalize(code);
        if !code.is_empty() && !self.0.contains(&code) {
            self.0.push(code);
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        let code = normalize(code);
        self.0.iter().any(|c| *c == code)
    }

    /// True iff at least one of `codes` is in the set.
    pub fn intersects<S: AsRef<str>>(&self, codes: &[S]) -> bool {
        codes.iter().any(|c| self.contains(c.as_ref()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

fn primary_roles(user: &UserProfile) -> RoleSet {
    RoleSet::from_assignments(&user.role_user)
}

/// True iff the user's primary roles intersect `allowed` (case-insensitive).
pub fn has_role<S: AsRef<str>>(user: Option<&UserProfile>, allowed: &[S]) -> bool {
    let Some(user) = user else {
        return false;
    };
    let roles = primary_roles(user);
    !roles.is_empty() && roles.intersects(allowed)
}

/// True iff every role in `required` is among the user's primary roles.
/// A user without roles never passes; an empty `required` list passes for
/// any user holding at least one role.
pub fn has_all_roles<S: AsRef<str>>(user: Option<&UserProfile>, required: &[S]) -> bool {
    let Some(user) = user else {
        return false;
    };
    let roles = primary_roles(user);
    !roles.is_empty() && required.iter().all(|r| roles.contains(r.as_ref()))
}

/// Primary and secondary role codes merged.
pub fn user_roles(user: Option<&UserProfile>) -> RoleSet {
    match user {
        Some(user) => RoleSet::from_assignments(user.role_user.iter().chain(&user.sub_role_user)),
        None => RoleSet::default(),
    }
}

pub fn is_admin(user: Option<&UserProfile>) -> bool {
    has_role(user, &ADMIN_ROLES)
}

pub fn is_management(user: Option<&UserProfile>) -> bool {
    has_role(user, &MANAGEMENT_ROLES)
}

pub fn has_full_access(user: Option<&UserProfile>) -> bool {
    has_role(user, &FULL_ACCESS_ROLES)
}

pub const DEFAULT_LANDING_PAGE: &str = "/animal";

/// Route a user lands on after login, by primary role code.
pub fn default_landing_page(role_code: &str) -> &'static str {
    match Role::from_code(role_code) {
        Some(Role::Keeper) => "/feed",
        Some(Role::StoreMaster) => "/stock",
        _ => DEFAULT_LANDING_PAGE,
    }
}

/// Snapshot handed to views: the effective role set plus the primary roles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Permissions {
    user: Option<UserProfile>,
    effective: RoleSet,
}

impl Permissions {
    pub fn for_user(user: Option<UserProfile>) -> Self {
        let effective = user_roles(user.as_ref());
        Self { user, effective }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn roles(&self) -> &RoleSet {
        &self.effective
    }

    pub fn has_role<S: AsRef<str>>(&self, allowed: &[S]) -> bool {
        has_role(self.user(), allowed)
    }

    pub fn can_access_menu(&self, map: &PermissionMap, path: &str) -> bool {
        map.can_access_menu(path, &self.effective)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn user_with(primary: &[&str], sub: &[&str]) -> UserProfile {
        UserProfile {
            name: "Test".into(),
            email: "test@zoo.id".into(),
            role_user: primary.iter().map(|c| RoleAssignment::new(c, c)).collect(),
            sub_role_user: sub.iter().map(|c| RoleAssignment::new(c, c)).collect(),
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_has_role_is_case_insensitive_both_ways() {
        for role in Role::ALL {
            let stored = role.code().to_uppercase();
            let user = user_with(&[stored.as_str()], &[]);
            assert!(has_role(Some(&user), &[role.code()]));
            assert!(has_role(Some(&user), &[role.code().to_uppercase()]));

            let user = user_with(&[role.code()], &[]);
            let mixed: String = role
                .code()
                .chars()
                .enumerate()
                .map(|(i, c)| if i % 2 == 0 { c.to_ascii_uppercase() } else { c })
                .collect();
            assert!(has_role(Some(&user), &[mixed]));
        }
    }

    #[test]
    fn test_has_role_without_user_or_roles() {
        assert!(!has_role::<&str>(None, &["keeper"]));
        let nobody = user_with(&[], &[]);
        assert!(!has_role(Some(&nobody), &["keeper"]));
    }

    #[test]
    fn test_has_role_ignores_sub_roles() {
        // acting role vs entitled role: sub-roles never grant has_role
        let user = user_with(&["keeper"], &["manager"]);
        assert!(!has_role(Some(&user), &["manager"]));
        assert!(user_roles(Some(&user)).contains("manager"));
    }

    #[test]
    fn test_has_all_roles_is_conjunctive() {
        let user = user_with(&["Keeper", "kesehatan", "keeper"], &["manager"]);
        assert!(has_all_roles(Some(&user), &["keeper", "KESEHATAN"]));
        assert!(!has_all_roles(Some(&user), &["keeper", "kesehatan", "kurator"]));
        assert!(!has_all_roles(Some(&user), &["manager"]));
        assert!(has_all_roles::<&str>(Some(&user), &[]));
        assert!(!has_all_roles::<&str>(Some(&user_with(&[], &[])), &[]));
        assert!(!has_all_roles::<&str>(None, &["keeper"]));
    }

    #[test]
    fn test_user_roles_first_seen_order() {
        let user = user_with(&["Manager", "view"], &["VIEW", "kurator", "manager"]);
        let set = user_roles(Some(&user));
        let roles: Vec<&str> = set.iter().collect();
        assert_eq!(roles, vec!["manager", "view", "kurator"]);
        assert!(user_roles(None).is_empty());
    }

    #[test]
    fn test_fixed_predicates() {
        let director = user_with(&["director-ops"], &[]);
        let curator = user_with(&["kurator"], &[]);
        let viewer = user_with(&["view"], &[]);
        let keeper = user_with(&["keeper"], &[]);

        assert!(is_admin(Some(&director)));
        assert!(!is_admin(Some(&curator)));
        assert!(is_management(Some(&curator)));
        assert!(!is_management(Some(&viewer)));
        assert!(has_full_access(Some(&viewer)));
        assert!(!has_full_access(Some(&curator)));
        assert!(!has_full_access(Some(&keeper)));
        assert!(!is_admin(None));
    }

    #[test]
    fn test_default_landing_page() {
        assert_eq!(default_landing_page("keeper"), "/feed");
        assert_eq!(default_landing_page("KEEPER"), "/feed");
        assert_eq!(default_landing_page("Store-Master"), "/stock");
        assert_eq!(default_landing_page("super-admin"), "/animal");
        assert_eq!(default_landing_page(""), "/animal");
    }
}
