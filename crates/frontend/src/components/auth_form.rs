//! Sign-in and sign-up overlay

use super::{Dialog, ErrorBanner, LoadingSpinner, SpinnerSize};
use crate::modal::use_modal;
use crate::services::account;
use crate::session::use_session;
use gallery_core::{AuthForm, AuthMode, ModalAction, SessionAction};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthDialogProps {
    pub mode: AuthMode,
}

/// Which field of the form an input edits
#[derive(Clone, Copy)]
enum Field {
    Email,
    Password,
    FirstName,
    LastName,
    PhoneNumber,
}

impl Field {
    fn slot(self, form: &mut AuthForm) -> &mut String {
        match self {
            Self::Email => &mut form.email,
            Self::Password => &mut form.password,
            Self::FirstName => &mut form.first_name,
            Self::LastName => &mut form.last_name,
            Self::PhoneNumber => &mut form.phone_number,
        }
    }
}

fn input(
    form: &Rc<RefCell<AuthForm>>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    required: bool,
) -> Html {
    let value = field.slot(&mut form.borrow_mut()).clone();
    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            *field.slot(&mut form.borrow_mut()) = input.value();
        })
    };

    html! {
        <div class="mb-4">
            <label class="block text-sm font-medium text-stone-700 mb-1">
                {label}
                <input
                    type={input_type}
                    class="w-full p-2 border border-stone-300 focus:border-black focus:outline-none"
                    {value}
                    {oninput}
                    {required}
                />
            </label>
        </div>
    }
}

#[function_component(AuthDialog)]
pub fn auth_dialog(props: &AuthDialogProps) -> Html {
    let session = use_session();
    let modal = use_modal();
    let form = use_mut_ref(|| AuthForm::new(props.mode));
    let update = use_force_update();
    let mounted = use_mut_ref(|| true);

    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| move || *mounted.borrow_mut() = false);
    }

    let on_close = {
        let modal = modal.clone();
        Callback::from(move |()| modal.dispatch(ModalAction::CloseAll))
    };

    let on_toggle = {
        let modal = modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            modal.dispatch(ModalAction::ToggleAuthForms);
        })
    };

    let on_submit = {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = form.borrow_mut().begin();
            update.force_update();
            let Ok(request) = request else {
                return;
            };

            let form = form.clone();
            let update = update.clone();
            let session = session.clone();
            let modal = modal.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = account::authenticate(request).await;
                if !*mounted.borrow() {
                    tracing::debug!("auth dialog closed before the response arrived");
                    return;
                }
                match outcome {
                    Ok(signed_in) => {
                        tracing::info!(user_id = %signed_in.id(), "signed in");
                        form.borrow_mut().succeeded();
                        session.dispatch(SessionAction::SignIn(signed_in));
                        modal.dispatch(ModalAction::AuthSucceeded);
                    }
                    Err(message) => {
                        tracing::warn!(%message, "authentication failed");
                        form.borrow_mut().failed(message);
                        update.force_update();
                    }
                }
            });
        })
    };

    let mode = props.mode;
    let (busy, error) = {
        let current = form.borrow();
        (current.is_busy(), current.error().map(str::to_string))
    };
    let (busy_label, toggle_prompt, toggle_label) = match mode {
        AuthMode::SignIn => ("Signing In...", "Don't have an account?", "Sign Up"),
        AuthMode::SignUp => ("Signing Up...", "Already have an account?", "Sign In"),
    };

    html! {
        <Dialog title={mode.title()} {on_close}>
            if let Some(message) = error {
                <ErrorBanner {message} />
            }
            <form onsubmit={on_submit}>
                {input(&form, Field::Email, "Email", "email", true)}
                {input(&form, Field::Password, "Password", "password", true)}
                if mode == AuthMode::SignUp {
                    {input(&form, Field::FirstName, "First Name", "text", false)}
                    {input(&form, Field::LastName, "Last Name", "text", false)}
                    {input(&form, Field::PhoneNumber, "Phone Number", "tel", false)}
                }
                <button
                    type="submit"
                    disabled={busy}
                    class="w-full p-2 bg-black text-white hover:bg-red-900 disabled:bg-stone-400 transition-colors"
                >
                    if busy {
                        <LoadingSpinner label={busy_label} size={SpinnerSize::Inline} />
                    } else {
                        {mode.title()}
                    }
                </button>
            </form>
            <p class="mt-4 text-sm text-center text-stone-600">
                {toggle_prompt}{" "}
                <a href="#" class="underline" onclick={on_toggle}>{toggle_label}</a>
            </p>
        </Dialog>
    }
}
