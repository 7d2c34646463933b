//! Integration tests for the gallery HTTP client

use gallery_core::{
    AuthRequest, Credentials, EngagementType, EnquiryFields, EnquiryKind, EnquiryRequest,
    GenerateRequest, ItemId, ProfileUpdate, SignUpDetails,
};
use gallery_http::{AuthenticatedGalleryClient, ClientError, PublicGalleryClient, TypedClientBuilder};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_builder_requires_base_url() {
    let result = TypedClientBuilder::new().build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_builder_trims_trailing_slash() {
    let client = TypedClientBuilder::new()
        .base_url("http://localhost:3000/")
        .build_public()
        .unwrap();
    assert_eq!(client.base_url(), "http://localhost:3000");
}

#[tokio::test]
async fn test_authenticated_client_requires_token() {
    let result = AuthenticatedGalleryClient::new("http://localhost:3000", " ");
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_list_artworks() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artworks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "1", "title": "Misty Peaks", "artist": {"id": "a1", "name": "Lin"}, "price": 1200},
            {"id": "2", "title": "Bamboo"}
        ])))
        .mount(&mock_server)
        .await;

    let client = PublicGalleryClient::new(mock_server.uri()).unwrap();
    let artworks = client.list_artworks().await.unwrap();

    assert_eq!(artworks.len(), 2);
    assert_eq!(artworks[0].artist.as_ref().unwrap().name, "Lin");
    assert_eq!(artworks[0].formatted_price().as_deref(), Some("$1,200"));
    assert_eq!(artworks[1].price, None);
}

#[tokio::test]
async fn test_error_payload_on_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artists/99"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "Artist not found"})))
        .mount(&mock_server)
        .await;

    let client = PublicGalleryClient::new(mock_server.uri()).unwrap();
    let err = client.get_artist(&ItemId::new("99")).await.unwrap_err();

    assert!(matches!(&err, ClientError::Api(message) if message == "Artist not found"));
    assert_eq!(err.user_message(), "Artist not found");
}

#[tokio::test]
async fn test_error_status_uses_payload_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/editorials/5"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Editorial not found"})))
        .mount(&mock_server)
        .await;

    let client = PublicGalleryClient::new(mock_server.uri()).unwrap();
    let err = client.get_editorial(&ItemId::new("5")).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(message) if message == "Editorial not found"));
}

#[tokio::test]
async fn test_masterclass_subject_found_in_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/masterclasses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "m1", "title": "Ink Wash", "description": "Brush basics"},
            {"id": "m2", "title": "Seal Carving"}
        ])))
        .mount(&mock_server)
        .await;

    let client = PublicGalleryClient::new(mock_server.uri()).unwrap();
    let subject = client
        .enquiry_subject(EnquiryKind::Masterclass, &ItemId::new("m2"))
        .await
        .unwrap();
    assert_eq!(subject.title, "Seal Carving");

    let missing = client
        .enquiry_subject(EnquiryKind::Masterclass, &ItemId::new("m9"))
        .await;
    assert!(matches!(missing, Err(ClientError::NotFound(_))));
}

#[tokio::test]
async fn test_sign_in_returns_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/sign-in"))
        .and(body_json(json!({"email": "mei@example.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "email": "mei@example.com",
            "firstName": "Mei",
            "token": "tok-1"
        })))
        .mount(&mock_server)
        .await;

    let client = PublicGalleryClient::new(mock_server.uri()).unwrap();
    let session = client
        .authenticate_with(&AuthRequest::SignIn(Credentials {
            email: "mei@example.com".into(),
            password: "pw".into(),
        }))
        .await
        .unwrap();

    assert_eq!(session.bearer_token(), "tok-1");
    assert_eq!(session.profile.first_name, "Mei");
}

#[tokio::test]
async fn test_sign_up_rejection_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/sign-up"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "Email already in use"})))
        .mount(&mock_server)
        .await;

    let client = PublicGalleryClient::new(mock_server.uri()).unwrap();
    let result = client
        .sign_up(&SignUpDetails {
            email: "mei@example.com".into(),
            password: "pw".into(),
            first_name: String::new(),
            last_name: String::new(),
            phone_number: String::new(),
        })
        .await;

    assert!(matches!(result, Err(ClientError::BadRequest(message)) if message == "Email already in use"));
}

#[tokio::test]
async fn test_masterclass_enquiry_sends_bearer_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/masterclass-enquiries"))
        .and(header("authorization", "Bearer tok-1"))
        .and(body_json(json!({
            "subject": "Q1",
            "message": "Group rates?",
            "masterclassId": "m1",
            "selectedType": "Group"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "enq-1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("tok-1")
        .unwrap();
    let receipt = client
        .submit_enquiry(&EnquiryRequest {
            kind: EnquiryKind::Masterclass,
            subject_id: ItemId::new("m1"),
            fields: EnquiryFields {
                subject: "Q1".into(),
                message: "Group rates?".into(),
                selected_type: Some(EngagementType::Group),
            },
        })
        .await
        .unwrap();

    assert_eq!(receipt.id, Some(ItemId::new("enq-1")));
}

#[tokio::test]
async fn test_expired_token_maps_to_authentication_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/artwork-enquiries"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let client = AuthenticatedGalleryClient::new(mock_server.uri(), "stale").unwrap();
    let result = client
        .submit_enquiry(&EnquiryRequest {
            kind: EnquiryKind::Artwork,
            subject_id: ItemId::new("42"),
            fields: EnquiryFields::default(),
        })
        .await;

    assert!(matches!(result, Err(ClientError::AuthenticationFailed(message)) if message == "Unauthorized"));
}

#[tokio::test]
async fn test_profile_update_and_delete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/profile"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "email": "mei@example.com",
            "firstName": "Mei",
            "lastName": "Lin",
            "phoneNumber": "0400"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/users/profile"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AuthenticatedGalleryClient::new(mock_server.uri(), "tok-1").unwrap();
    let profile = client
        .update_profile(&ProfileUpdate {
            first_name: "Mei".into(),
            last_name: "Lin".into(),
            phone_number: "0400".into(),
        })
        .await
        .unwrap();
    assert_eq!(profile.last_name, "Lin");

    client.delete_account().await.unwrap();
}

#[tokio::test]
async fn test_generate_artwork() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/playground/generate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"imageData": "data:image/png;base64,AAAA"})),
        )
        .mount(&mock_server)
        .await;

    let client = AuthenticatedGalleryClient::new(mock_server.uri(), "tok-1").unwrap();
    let response = client
        .generate_artwork(&GenerateRequest {
            subject_prompt: "Plum blossom".into(),
            ..GenerateRequest::default()
        })
        .await
        .unwrap();
    assert!(response.image_data.starts_with("data:image/png"));
}
