//! CLI commands

use anyhow::{Result, bail};
use clap::Subcommand;
use gallery_core::{
    AuthForm, AuthMode, EngagementType, EnquiryForm, EnquiryKind, ItemId, Settings, Submission,
};
use gallery_http::{Artist, Artwork, Editorial};
use tracing::{debug, info};

use crate::config::{self, Clients};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List artists
    Artists,

    /// Show one artist with their artworks
    Artist { id: String },

    /// List artworks
    Artworks,

    /// Show one artwork
    Artwork { id: String },

    /// List masterclasses
    Masterclasses,

    /// List services
    Services,

    /// List editorials
    Editorials,

    /// Show one editorial, formatted into paragraphs
    Editorial { id: String },

    /// Sign in and print the bearer token to store in GALLERY_TOKEN
    SignIn {
        #[arg(long)]
        email: String,

        #[arg(long, env = "GALLERY_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Send an enquiry about an artwork, masterclass or service
    Enquire {
        /// artwork, masterclass or service
        kind: EnquiryKind,

        /// Id of the item being enquired about
        id: String,

        /// Subject line (defaults to one derived from the item title)
        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        message: String,

        /// Individual, Group or Corporate (masterclasses only)
        #[arg(long = "type")]
        selected_type: Option<EngagementType>,
    },
}

impl Commands {
    pub async fn execute(self, settings: Settings) -> Result<()> {
        let clients = config::build_clients(&settings)?;
        let public = &clients.public;

        match self {
            Self::Artists => {
                for artist in public.list_artists().await? {
                    println!("{}\t{}\t{}", artist.id, artist.name, artist.lifespan());
                }
            }
            Self::Artist { id } => print_artist(&public.get_artist(&ItemId::new(id)).await?),
            Self::Artworks => {
                for artwork in public.list_artworks().await? {
                    println!("{}", artwork_line(&artwork));
                }
            }
            Self::Artwork { id } => print_artwork(&public.get_artwork(&ItemId::new(id)).await?),
            Self::Masterclasses => {
                for masterclass in public.list_masterclasses().await? {
                    println!("{}\t{}", masterclass.id, masterclass.title);
                }
            }
            Self::Services => {
                for service in public.list_services().await? {
                    let service_type = service.service_type.unwrap_or_default();
                    println!("{}\t{}\t{service_type}", service.id, service.title);
                }
            }
            Self::Editorials => {
                for editorial in public.list_editorials().await? {
                    let date = editorial.published_date().unwrap_or_default();
                    println!("{}\t{date}\t{}", editorial.id, editorial.title);
                }
            }
            Self::Editorial { id } => {
                print_editorial(&public.get_editorial(&ItemId::new(id)).await?);
            }
            Self::SignIn { email, password } => sign_in(&clients, email, password).await?,
            Self::Enquire {
                kind,
                id,
                subject,
                message,
                selected_type,
            } => {
                let fields = EnquiryInput {
                    subject,
                    message,
                    selected_type,
                };
                enquire(&clients, &settings, kind, ItemId::new(id), fields).await?;
            }
        }

        Ok(())
    }
}

fn artwork_line(artwork: &Artwork) -> String {
    let artist = artwork
        .artist
        .as_ref()
        .map(|artist| artist.name.as_str())
        .unwrap_or_default();
    let price = artwork.formatted_price().unwrap_or_default();
    format!("{}\t{}\t{artist}\t{price}", artwork.id, artwork.title)
}

fn print_artist(artist: &Artist) {
    println!("{}", artist.name);
    println!("{}", artist.lifespan());
    if let Some(bio) = &artist.bio {
        println!("\n{bio}");
    }
    if !artist.artworks.is_empty() {
        println!("\nArtworks:");
        for artwork in &artist.artworks {
            println!("  {}", artwork_line(artwork));
        }
    }
    if !artist.media_articles.is_empty() {
        println!("\nIn the media:");
        for article in &artist.media_articles {
            let source = article.source.as_deref().unwrap_or_default();
            println!("  {} ({source})", article.title);
        }
    }
}

fn print_artwork(artwork: &Artwork) {
    println!("{}", artwork.title);
    if let Some(artist) = &artwork.artist {
        println!("by {}", artist.name);
    }
    let facts = [
        ("Year", artwork.year.map(|year| year.to_string())),
        ("Medium", artwork.medium.clone()),
        ("Mounting", artwork.mounting.clone()),
        ("Dimensions", artwork.dimensions()),
        ("Price", artwork.formatted_price()),
    ];
    for (label, value) in facts {
        if let Some(value) = value {
            println!("{label}: {value}");
        }
    }
    if let Some(description) = &artwork.description {
        println!("\n{description}");
    }
}

fn print_editorial(editorial: &Editorial) {
    println!("{}", editorial.title);
    if let Some(author) = &editorial.author {
        println!("{author}");
    }
    for paragraph in editorial.paragraphs() {
        println!("\n{paragraph}");
    }
}

async fn sign_in(clients: &Clients, email: String, password: String) -> Result<()> {
    let mut form = AuthForm::new(AuthMode::SignIn);
    form.email = email;
    form.password = password;
    let request = form.begin()?;

    let session = clients.public.authenticate_with(&request).await?;
    form.succeeded();
    info!(user_id = %session.id(), "signed in");

    println!("Signed in as {}", session.email());
    println!("export GALLERY_TOKEN={}", session.bearer_token());
    Ok(())
}

/// Field values given on the command line
pub struct EnquiryInput {
    pub subject: Option<String>,
    pub message: String,
    pub selected_type: Option<EngagementType>,
}

/// Fill the enquiry form the way the browser does, then send it or report
/// that a sign-in is needed
pub async fn enquire(
    clients: &Clients,
    settings: &Settings,
    kind: EnquiryKind,
    id: ItemId,
    input: EnquiryInput,
) -> Result<()> {
    let subject = clients.public.enquiry_subject(kind, &id).await?;

    let mut form = EnquiryForm::new(kind, id);
    let _ = form.subject_loaded(&subject.title, None);
    if let Some(line) = input.subject {
        form.set_subject(line);
    }
    form.set_message(input.message);
    if input.selected_type.is_some() {
        form.set_selected_type(input.selected_type);
    }

    let session = config::session_from_settings(settings);
    match form.submit(session.as_ref())? {
        Submission::Send(request) => {
            let Some(client) = &clients.authenticated else {
                bail!("Sign-in required: no token configured");
            };
            let receipt = match client.submit_enquiry(&request).await {
                Ok(receipt) => receipt,
                Err(e) if e.is_unauthorized() => {
                    bail!("Sign-in required: the configured token was rejected ({e})")
                }
                Err(e) => return Err(e.into()),
            };
            debug!(?receipt, "enquiry accepted");
            println!("Enquiry about \"{}\" sent.", subject.title);
            Ok(())
        }
        Submission::Defer(_) => bail!(
            "Sign-in required: run `gallery sign-in` and set GALLERY_TOKEN before sending an enquiry"
        ),
        Submission::Ignored => bail!("enquiry form is not ready"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn catalog_server() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/artworks/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "42",
                "title": "Misty Peaks"
            })))
            .mount(&server)
            .await;
        server
    }

    fn settings(server: &MockServer, token: Option<&str>) -> Settings {
        Settings {
            api_url: server.uri(),
            token: token.map(str::to_string),
            ..Settings::default()
        }
    }

    fn input(message: &str) -> EnquiryInput {
        EnquiryInput {
            subject: None,
            message: message.to_string(),
            selected_type: None,
        }
    }

    #[tokio::test]
    async fn test_enquire_without_token_never_posts() {
        let server = catalog_server().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let settings = settings(&server, None);
        let clients = config::build_clients(&settings).unwrap();
        let err = enquire(
            &clients,
            &settings,
            EnquiryKind::Artwork,
            ItemId::new("42"),
            input("Is this available?"),
        )
        .await
        .unwrap_err();

        assert!(err.to_string().starts_with("Sign-in required"));
    }

    #[tokio::test]
    async fn test_enquire_with_token_sends_default_subject() {
        let server = catalog_server().await;
        Mock::given(method("POST"))
            .and(path("/artwork-enquiries"))
            .and(header("authorization", "Bearer tok-1"))
            .and(body_partial_json(json!({
                "subject": "Enquiry about \"Misty Peaks\"",
                "message": "Is this available?",
                "artworkId": "42"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "_id": "e1" })))
            .expect(1)
            .mount(&server)
            .await;

        let settings = settings(&server, Some("tok-1"));
        let clients = config::build_clients(&settings).unwrap();
        enquire(
            &clients,
            &settings,
            EnquiryKind::Artwork,
            ItemId::new("42"),
            input("Is this available?"),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_enquire_blank_message_is_rejected_locally() {
        let server = catalog_server().await;
        let settings = settings(&server, Some("tok-1"));
        let clients = config::build_clients(&settings).unwrap();

        let err = enquire(
            &clients,
            &settings,
            EnquiryKind::Artwork,
            ItemId::new("42"),
            input("   "),
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "Please complete all required fields");
    }
}
