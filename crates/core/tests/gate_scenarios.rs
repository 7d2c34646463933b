//! End-to-end runs of the enquiry authentication gate, driving the form,
//! auth and coordinator state machines the way the frontend does.

use gallery_core::{
    AuthCompletion, AuthForm, AuthMode, AuthRequest, EngagementType, EnquiryDraft, EnquiryFields,
    EnquiryForm, EnquiryKind, EnquiryPhase, ModalAction, ModalCoordinator, Overlay, Profile,
    Session, SessionAction, SessionState, Submission, ValidationError,
};

fn signed_in_session() -> Session {
    Session::new(
        Profile {
            id: "u1".into(),
            email: "mei@example.com".into(),
            ..Profile::default()
        },
        "tok-1",
    )
}

/// Mount the enquiry form for whatever overlay is open, as the modal host does
fn mount_form(coordinator: &mut ModalCoordinator, title: &str) -> EnquiryForm {
    let (kind, subject_id) = coordinator
        .overlay()
        .as_enquiry()
        .map(|(kind, id)| (kind, id.clone()))
        .expect("an enquiry overlay is open");
    let mut form = EnquiryForm::new(kind, subject_id);
    let waiting = coordinator.deferred_draft(kind).cloned();
    if let Some(action) = form.subject_loaded(title, waiting.as_ref()) {
        let _ = coordinator.apply(action);
    }
    form
}

fn sign_in(coordinator: &mut ModalCoordinator, session: &mut SessionState) -> AuthCompletion {
    let mut form = AuthForm::new(AuthMode::SignIn);
    form.email = "mei@example.com".into();
    form.password = "pw".into();
    assert!(matches!(form.begin(), Ok(AuthRequest::SignIn(_))));

    session.apply(SessionAction::SignIn(signed_in_session()));
    form.succeeded();
    coordinator
        .complete_authentication()
        .expect("the auth overlay is still open")
}

#[test]
fn artwork_enquiry_survives_sign_in() {
    let mut coordinator = ModalCoordinator::new();
    let mut session = SessionState::anonymous();

    coordinator.open_artwork_enquiry("42");
    let mut form = mount_form(&mut coordinator, "Misty Peaks");
    form.set_subject("Q1");
    form.set_message("Is this available?");

    let submission = form.submit(session.session()).unwrap();
    let Submission::Defer(action) = submission else {
        panic!("anonymous submit must defer");
    };
    let _ = coordinator.apply(action);

    assert_eq!(form.phase(), &EnquiryPhase::DeferredHandoff);
    assert_eq!(coordinator.overlay(), &Overlay::SignIn);
    assert_eq!(
        coordinator.deferred_draft(EnquiryKind::Artwork),
        Some(&EnquiryDraft::new(
            "42",
            EnquiryFields {
                subject: "Q1".into(),
                message: "Is this available?".into(),
                selected_type: None,
            }
        ))
    );

    let completion = sign_in(&mut coordinator, &mut session);
    assert!(completion.is_resume());
    assert_eq!(coordinator.overlay(), &Overlay::ArtworkEnquiry("42".into()));

    let resumed = mount_form(&mut coordinator, "Misty Peaks");
    assert_eq!(resumed.fields().subject, "Q1");
    assert_eq!(resumed.fields().message, "Is this available?");
    assert!(coordinator.pending().is_none());

    assert!(matches!(
        resumed.clone().submit(session.session()),
        Ok(Submission::Send(_))
    ));
}

#[test]
fn every_kind_defers_without_network_call() {
    for kind in EnquiryKind::RESUME_ORDER {
        let mut coordinator = ModalCoordinator::new();
        coordinator.open_enquiry(kind, "s-9");
        let mut form = mount_form(&mut coordinator, "Subject");
        form.set_message("Hello");

        let submission = form.submit(None).unwrap();
        assert!(!matches!(submission, Submission::Send(_)));
        if let Submission::Defer(action) = submission {
            let _ = coordinator.apply(action);
        }

        assert_eq!(coordinator.overlay(), &Overlay::SignIn);
        let draft = coordinator.deferred_draft(kind).unwrap();
        assert_eq!(draft.subject_id.as_str(), "s-9");
        assert_eq!(&draft.fields, form.fields());
    }
}

#[test]
fn sign_in_without_draft_takes_generic_path() {
    let mut coordinator = ModalCoordinator::new();
    let mut session = SessionState::anonymous();
    coordinator.open_sign_in();

    let completion = sign_in(&mut coordinator, &mut session);
    assert_eq!(completion, AuthCompletion::Done);
    assert!(coordinator.overlay().is_none());
    assert!(session.is_authenticated());
}

#[test]
fn failed_authentication_leaves_gate_untouched() {
    let mut coordinator = ModalCoordinator::new();
    coordinator.open_service_enquiry("s1");
    let mut form = mount_form(&mut coordinator, "Mounting");
    form.set_message("Price?");
    if let Ok(Submission::Defer(action)) = form.submit(None) {
        let _ = coordinator.apply(action);
    }
    let before = coordinator.clone();

    let mut auth = AuthForm::new(AuthMode::SignIn);
    auth.email = "mei@example.com".into();
    auth.password = "wrong".into();
    let _ = auth.begin();
    auth.failed("Invalid credentials");

    assert_eq!(coordinator, before);
    assert_eq!(auth.error(), Some("Invalid credentials"));
}

#[test]
fn masterclass_with_empty_message_fails_validation() {
    let mut coordinator = ModalCoordinator::new();
    coordinator.open_masterclass_enquiry("m1");
    let mut form = mount_form(&mut coordinator, "Ink Wash");
    assert_eq!(form.fields().selected_type, Some(EngagementType::Individual));

    let before = coordinator.clone();
    assert_eq!(form.submit(None), Err(ValidationError::MissingFields));

    assert_eq!(coordinator, before);
    assert_eq!(coordinator.overlay(), &Overlay::MasterclassEnquiry("m1".into()));
    assert!(coordinator.pending().is_none());
    assert_eq!(form.phase(), &EnquiryPhase::Ready);
}

#[test]
fn sign_up_detour_still_resumes() {
    let mut coordinator = ModalCoordinator::new();
    let mut session = SessionState::anonymous();

    coordinator.open_masterclass_enquiry("m2");
    let mut form = mount_form(&mut coordinator, "Seal Carving");
    form.set_message("Corporate booking");
    form.set_selected_type(Some(EngagementType::Corporate));
    if let Ok(Submission::Defer(action)) = form.submit(None) {
        let _ = coordinator.apply(action);
    }

    let _ = coordinator.apply(ModalAction::ToggleAuthForms);
    assert_eq!(coordinator.overlay(), &Overlay::SignUp);

    let mut sign_up = AuthForm::new(AuthMode::SignUp);
    sign_up.email = "new@example.com".into();
    sign_up.password = "pw".into();
    assert!(matches!(sign_up.begin(), Ok(AuthRequest::SignUp(_))));
    session.apply(SessionAction::SignIn(signed_in_session()));
    sign_up.succeeded();
    let _ = coordinator.apply(ModalAction::AuthSucceeded);

    let resumed = mount_form(&mut coordinator, "Seal Carving");
    assert_eq!(resumed.fields().selected_type, Some(EngagementType::Corporate));
    assert_eq!(resumed.fields().message, "Corporate booking");
}

#[test]
fn closing_and_reopening_restores_draft_once() {
    let mut coordinator = ModalCoordinator::new();
    coordinator.open_artwork_enquiry("7");
    let mut form = mount_form(&mut coordinator, "Bamboo");
    form.set_message("Still for sale?");
    if let Ok(Submission::Defer(action)) = form.submit(None) {
        let _ = coordinator.apply(action);
    }

    // Visitor dismisses sign-in and later opens the same enquiry again
    coordinator.close_all();
    coordinator.open_artwork_enquiry("7");
    let first = mount_form(&mut coordinator, "Bamboo");
    assert_eq!(first.fields().message, "Still for sale?");

    coordinator.close_all();
    coordinator.open_artwork_enquiry("7");
    let second = mount_form(&mut coordinator, "Bamboo");
    assert_eq!(second.fields().message, "");
    assert_eq!(second.fields().subject, "Enquiry about \"Bamboo\"");
}

#[test]
fn late_sign_in_does_not_replace_enquiry_opened_meanwhile() {
    let mut coordinator = ModalCoordinator::new();
    let mut session = SessionState::anonymous();

    coordinator.open_artwork_enquiry("42");
    let mut form = mount_form(&mut coordinator, "Misty Peaks");
    form.set_message("Is this available?");
    if let Ok(Submission::Defer(action)) = form.submit(None) {
        let _ = coordinator.apply(action);
    }

    // Sign-in request is in flight when the visitor dismisses the dialog
    // and starts a masterclass enquiry instead
    coordinator.close_all();
    coordinator.open_masterclass_enquiry("m1");
    let current = mount_form(&mut coordinator, "Ink Wash");
    assert!(current.fields().message.is_empty());

    session.apply(SessionAction::SignIn(signed_in_session()));
    let _ = coordinator.apply(ModalAction::AuthSucceeded);

    assert_eq!(coordinator.overlay(), &Overlay::MasterclassEnquiry("m1".into()));
    assert_eq!(
        coordinator
            .deferred_draft(EnquiryKind::Artwork)
            .map(|draft| draft.fields.message.as_str()),
        Some("Is this available?")
    );

    // The parked draft is still restored when the artwork is reopened
    coordinator.close_all();
    coordinator.open_artwork_enquiry("42");
    let resumed = mount_form(&mut coordinator, "Misty Peaks");
    assert_eq!(resumed.fields().message, "Is this available?");
}
