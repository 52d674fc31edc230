use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::use_api;
use crate::system::auth::context::{do_login, use_auth, LoginError};

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let api = use_api();
    let (_, set_auth_state) = use_auth();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let submit = move || {
        if is_loading.get_untracked() {
            return;
        }
        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match do_login(&api, request).await {
                Ok((state, landing)) => {
                    set_auth_state.set(state);
                    ctx.navigate(landing);
                }
                Err(e) => {
                    if let LoginError::Validation(errors) = &e {
                        log::debug!("login form rejected: {}", errors);
                    }
                    set_error_message.set(Some(e.user_message()));
                }
            }
            set_is_loading.set(false);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Zoo Back Office"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Flex vertical=true gap=FlexGap::Medium>
                        <div class="form-group">
                            <Label>"Email"</Label>
                            <Input
                                value=email
                                input_type=InputType::Email
                                placeholder="name@zoo.id"
                                disabled=Signal::derive(move || is_loading.get())
                            />
                        </div>

                        <div class="form-group">
                            <Label>"Password"</Label>
                            <Input
                                value=password
                                input_type=InputType::Password
                                disabled=Signal::derive(move || is_loading.get())
                            />
                        </div>

                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </Flex>
                </form>
            </div>
        </div>
    }
}
