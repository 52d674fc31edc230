//! Navigation tree and its role-based pruning.

use crate::system::access::{PermissionMap, RoleSet};

#[derive(Debug, Clone, PartialEq)]
pub struct MenuNode {
    pub title: &'static str,
    /// `None` for a pure grouping parent.
    pub path: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub children: Vec<MenuNode>,
    /// Overrides the permission map for this node when non-empty.
    pub allowed_roles: Vec<String>,
}

impl MenuNode {
    pub fn leaf(title: &'static str, path: &'static str) -> Self {
        Self {
            title,
            path: Some(path),
            icon: None,
            children: Vec::new(),
            allowed_roles: Vec::new(),
        }
    }

    pub fn group(title: &'static str, icon: &'static str, children: Vec<MenuNode>) -> Self {
        Self {
            title,
            path: None,
            icon: Some(icon),
            children,
            allowed_roles: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_roles<S: AsRef<str>>(mut self, roles: &[S]) -> Self {
        self.allowed_roles = roles.iter().map(|r| r.as_ref().to_lowercase()).collect();
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Stable id for expand/collapse state.
    pub fn key(&self) -> &'static str {
        self.path.unwrap_or(self.title)
    }
}

/// The back-office navigation definition.
pub fn navigation() -> Vec<MenuNode> {
    vec![
        MenuNode::leaf("Dashboard", "/dashboard").with_icon("dashboard"),
        MenuNode::group(
            "Animal Management",
            "paw",
            vec![
                MenuNode::leaf("Animals", "/animal"),
                MenuNode::leaf("Mutations", "/mutation"),
                MenuNode::leaf("Sick Animals", "/sick"),
                MenuNode::leaf("Deceased Animals", "/dead"),
            ],
        ),
        MenuNode::group(
            "Master Data",
            "database",
            vec![
                MenuNode::leaf("Families", "/family"),
                MenuNode::leaf("Species", "/species"),
                MenuNode::leaf("Unit Areas", "/unit-area"),
                MenuNode::leaf("Zone Areas", "/zone-area"),
                MenuNode::leaf("Units", "/unit"),
                MenuNode::leaf("Cage Models", "/cage-model"),
                MenuNode::leaf("Cage Types", "/cage-type"),
                MenuNode::leaf("Feed Categories", "/feed-category"),
                MenuNode::leaf("Feed Types", "/feed-type"),
                MenuNode::leaf("Mix Feed", "/mix-feed"),
            ],
        ),
        MenuNode::group(
            "Areas & Cages",
            "grid",
            vec![MenuNode::leaf("Cages", "/cage")],
        ),
        MenuNode::group(
            "Feed & Logistics",
            "feed",
            vec![
                MenuNode::leaf("Feeding", "/feed"),
                MenuNode::leaf("Stock", "/stock"),
            ],
        ),
        MenuNode::group("Staff", "users", vec![MenuNode::leaf("Tasks", "/task")]),
    ]
}

fn leaf_visible(node: &MenuNode, roles: &RoleSet, map: &PermissionMap) -> bool {
    if !node.allowed_roles.is_empty() {
        return roles.intersects(&node.allowed_roles);
    }
    match node.path {
        Some(path) => map.can_access_menu(path, roles),
        None => true,
    }
}

/// Depth-first pruning. A node with children is kept iff some child survives,
/// whatever its own path or roles say. Sibling order is preserved.
pub fn filter_menu(nodes: &[MenuNode], roles: &RoleSet, map: &PermissionMap) -> Vec<MenuNode> {
    nodes
        .iter()
        .filter_map(|node| {
            if node.has_children() {
                let children = filter_menu(&node.children, roles, map);
                if children.is_empty() {
                    return None;
                }
                if !node.allowed_roles.is_empty() && !roles.intersects(&node.allowed_roles) {
                    log::debug!(
                        "menu group '{}' shown through its children despite its own roles",
                        node.title
                    );
                }
                Some(MenuNode {
                    children,
                    ..node.clone()
                })
            } else if leaf_visible(node, roles, map) {
                Some(node.clone())
            } else {
                None
            }
        })
        .collect()
}

/// Titles from the root down to the node at `path`.
pub fn breadcrumbs(nodes: &[MenuNode], path: &str) -> Vec<&'static str> {
    for node in nodes {
        if node.path == Some(path) {
            return vec![node.title];
        }
        let mut trail = breadcrumbs(&node.children, path);
        if !trail.is_empty() {
            trail.insert(0, node.title);
            return trail;
        }
    }
    Vec::new()
}

pub fn title_for(nodes: &[MenuNode], path: &str) -> Option<&'static str> {
    breadcrumbs(nodes, path).last().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::access::AccessPolicy;

    fn roles(codes: &[&str]) -> RoleSet {
        RoleSet::from_codes(codes)
    }

    fn sample_tree() -> Vec<MenuNode> {
        vec![MenuNode::group(
            "Dashboard",
            "dashboard",
            vec![
                MenuNode::leaf("A", "/a").with_roles(&["x"]),
                MenuNode::leaf("B", "/b").with_roles(&["y"]),
            ],
        )]
    }

    fn titles(nodes: &[MenuNode]) -> Vec<&'static str> {
        nodes.iter().map(|n| n.title).collect()
    }

    #[test]
    fn test_prunes_children_by_role() {
        let map = PermissionMap::new(AccessPolicy::FailOpen);
        let filtered = filter_menu(&sample_tree(), &roles(&["Y"]), &map);
        assert_eq!(titles(&filtered), vec!["Dashboard"]);
        assert_eq!(titles(&filtered[0].children), vec!["B"]);
    }

    #[test]
    fn test_empty_group_is_dropped() {
        let map = PermissionMap::new(AccessPolicy::FailOpen);
        assert!(filter_menu(&sample_tree(), &roles(&["z"]), &map).is_empty());
        assert!(filter_menu(&sample_tree(), &roles(&[]), &map).is_empty());
    }

    #[test]
    fn test_hybrid_node_governed_by_children() {
        let map = PermissionMap::new(AccessPolicy::FailOpen);
        let mut hybrid = MenuNode::leaf("Hybrid", "/hybrid").with_roles(&["admin-only"]);
        hybrid.children = vec![MenuNode::leaf("Child", "/child")];
        let filtered = filter_menu(&[hybrid.clone()], &roles(&["keeper"]), &map);
        assert_eq!(titles(&filtered), vec!["Hybrid"]);

        hybrid.children = vec![MenuNode::leaf("Child", "/child").with_roles(&["vet"])];
        let filtered = filter_menu(&[hybrid], &roles(&["admin-only"]), &map);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_leaf_without_roles_uses_permission_map() {
        let map = PermissionMap::standard(AccessPolicy::FailOpen);
        let filtered = filter_menu(&navigation(), &roles(&["keeper"]), &map);
        assert_eq!(
            titles(&filtered),
            vec!["Dashboard", "Feed & Logistics", "Staff"]
        );
        assert_eq!(titles(&filtered[1].children), vec!["Feeding"]);
    }

    #[test]
    fn test_sibling_order_preserved() {
        let map = PermissionMap::standard(AccessPolicy::FailOpen);
        let all = filter_menu(&navigation(), &roles(&["super-admin"]), &map);
        assert_eq!(titles(&all), titles(&navigation()));
        assert_eq!(all[2].children.len(), 10);
    }

    #[test]
    fn test_closed_policy_hides_undeclared_leaf() {
        let tree = vec![MenuNode::leaf("Reports", "/reports")];
        let open = PermissionMap::new(AccessPolicy::FailOpen);
        let closed = PermissionMap::new(AccessPolicy::FailClosed);
        assert_eq!(filter_menu(&tree, &roles(&[]), &open).len(), 1);
        assert!(filter_menu(&tree, &roles(&["super-admin"]), &closed).is_empty());
    }

    #[test]
    fn test_breadcrumbs() {
        let nav = navigation();
        assert_eq!(breadcrumbs(&nav, "/feed-type"), vec!["Master Data", "Feed Types"]);
        assert_eq!(breadcrumbs(&nav, "/dashboard"), vec!["Dashboard"]);
        assert!(breadcrumbs(&nav, "/nowhere").is_empty());
        assert_eq!(title_for(&nav, "/animal"), Some("Animals"));
    }
}
