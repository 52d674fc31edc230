//! Sidebar with collapsible menu groups, pruned to what the user may see.

use super::menu::{filter_menu, navigation, MenuNode};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::access::use_permission_map;
use crate::system::auth::context::{use_auth, use_permissions};
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let permissions = use_permissions();
    let map = use_permission_map();

    let (auth_state, _) = use_auth();

    // A degraded session has no roles to prune by
    let menu = Memo::new(move |_| {
        if auth_state.with(|s| s.degraded) {
            navigation()
        } else {
            permissions.with(|p| filter_menu(&navigation(), p.roles(), &map))
        }
    });

    // Open the group holding the current route
    let expanded_groups = RwSignal::new(Vec::<&'static str>::new());
    Effect::new(move |_| {
        let path = ctx.path.get();
        let owner = menu.with(|nodes| {
            nodes
                .iter()
                .find(|n| n.children.iter().any(|c| c.path == Some(path.as_str())))
                .map(MenuNode::key)
        });
        if let Some(key) = owner {
            expanded_groups.update(|items| {
                if !items.contains(&key) {
                    items.push(key);
                }
            });
        }
    });

    view! {
        <div class="app-sidebar__content">
            {move || menu.get().into_iter().map(|node| {
                let key = node.key();
                let has_children = node.has_children();
                let own_path = node.path;

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                !has_children && own_path.is_some_and(|p| ctx.path.with(|cur| cur == p))
                            }
                            style:padding-left="12px"
                            on:click=move |_| {
                                if has_children {
                                    expanded_groups.update(|items| {
                                        if let Some(pos) = items.iter().position(|x| *x == key) {
                                            items.remove(pos);
                                        } else {
                                            items.push(key);
                                        }
                                    });
                                } else if let Some(path) = own_path {
                                    ctx.navigate(path);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(node.icon.unwrap_or("item"))}
                                <span>{node.title}</span>
                            </div>
                            {has_children.then(|| view! {
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&key)
                                >
                                    {icon("chevron-right")}
                                </div>
                            })}
                        </div>

                        {has_children.then(|| {
                            let children = StoredValue::new(node.children.clone());
                            view! {
                                <Show when=move || expanded_groups.get().contains(&key)>
                                    <div class="app-sidebar__children">
                                        {children.get_value().into_iter().filter_map(|child| {
                                            let path = child.path?;
                                            Some(view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || ctx.path.with(|cur| cur == path)
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.navigate(path)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(child.icon.unwrap_or("item"))}
                                                        <span>{child.title}</span>
                                                    </div>
                                                </div>
                                            })
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
