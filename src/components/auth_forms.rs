//! Login and Signup Forms
//!
//! Local-only accounts; see `accounts::AccountStore`.

use leptos::prelude::*;
use std::collections::BTreeMap;

use crate::context::use_app_context;
use crate::models::Account;
use crate::router::Page;
use crate::store::{account_store, store_login, use_app_store};

/// Signup fields and their input types
const SIGNUP_FIELDS: &[(&str, &str, &str)] = &[
    ("name", "text", "Full name"),
    ("email", "email", "Email"),
    ("phone", "tel", "Phone"),
    ("password", "password", "Password"),
];

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match store_login(&store, &email.get(), &password.get()) {
            Ok(_) => {
                ctx.message("Success", "Login successful!");
                ctx.navigate_after(Page::Home, 600);
            }
            Err(e) => ctx.message("Error", e.user_message()),
        }
    };

    view! {
        <section class="page-section auth-card">
            <h2 class="section-title">"Welcome back"</h2>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label>"Email"</label>
                    <input
                        type="email"
                        class="form-control"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Password"</label>
                    <input
                        type="password"
                        class="form-control"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn-primary btn-block">"Login"</button>
            </form>
            <p class="mt-3">
                "New here? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Page::Signup);
                }>"Create an account"</a>
            </p>
        </section>
    }
}

#[component]
pub fn SignupForm() -> impl IntoView {
    let ctx = use_app_context();
    let (entries, set_entries) = signal(BTreeMap::<String, String>::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let account = Account::from_form(entries.get());
        let result = account_store().and_then(|accounts| accounts.signup(account));
        match result {
            Ok(()) => {
                ctx.message("Success", "Registration successful! Please login.");
                ctx.navigate_after(Page::Login, 800);
            }
            Err(e) => ctx.message("Error", e.user_message()),
        }
    };

    view! {
        <section class="page-section auth-card">
            <h2 class="section-title">"Create your account"</h2>
            <form on:submit=on_submit>
                {SIGNUP_FIELDS.iter().map(|&(key, kind, label)| view! {
                    <div class="form-group">
                        <label>{label}</label>
                        <input
                            type=kind
                            name=key
                            class="form-control"
                            required
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_entries.update(|e| {
                                    e.insert(key.to_string(), value);
                                });
                            }
                        />
                    </div>
                }).collect_view()}
                <button type="submit" class="btn btn-success btn-block">"Sign up"</button>
            </form>
            <p class="mt-3">
                "Already registered? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Page::Login);
                }>"Login"</a>
            </p>
        </section>
    }
}
