//! Modal coordinator context and provider
//!
//! Every overlay transition goes through one reducer, so compound steps like
//! the sign-in handoff are applied in a single render.

use gallery_core::{ModalAction, ModalCoordinator};
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ModalState {
    coordinator: ModalCoordinator,
}

impl Deref for ModalState {
    type Target = ModalCoordinator;

    fn deref(&self) -> &Self::Target {
        &self.coordinator
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut coordinator = self.coordinator.clone();
        if let Some(displaced) = coordinator.apply(action) {
            tracing::warn!(
                kind = %displaced.kind,
                subject_id = %displaced.draft.subject_id,
                "older deferred enquiry discarded in favour of the newest"
            );
        }

        if coordinator == self.coordinator {
            return self;
        }
        Rc::new(Self { coordinator })
    }
}

/// Modal context
pub type ModalContext = UseReducerHandle<ModalState>;

#[derive(Properties, PartialEq)]
pub struct ModalProviderProps {
    pub children: Children,
}

#[function_component(ModalProvider)]
pub fn modal_provider(props: &ModalProviderProps) -> Html {
    let modal = use_reducer(ModalState::default);

    html! {
        <ContextProvider<ModalContext> context={modal}>
            {props.children.clone()}
        </ContextProvider<ModalContext>>
    }
}

/// Hook to use the modal context
#[hook]
pub fn use_modal() -> ModalContext {
    use_context::<ModalContext>()
        .expect("ModalContext not found. Make sure to wrap your component with ModalProvider")
}
