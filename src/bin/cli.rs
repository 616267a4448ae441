//! Artzy CLI
//!
//! Command-line client for the Artzy gallery:
//! - Register, log in and out
//! - Browse and filter artworks, like them
//! - Upload, edit and delete your own artworks
//! - Update your profile

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use artzy::access::{self, Access, Route};
use artzy::api::ArtzyClient;
use artzy::config::{generate_default_config, Config};
use artzy::forms::{
    check_photo_size, ArtworkForm, FormError, ForgotPasswordForm, LoginForm, ProfileForm,
    RegisterForm,
};
use artzy::gallery::{sync_like, ArtworkBoard, Category};
use artzy::model::{Artwork, ArtworkId};
use artzy::{format, media, toast, ArtzyError, ArtzyResult, FileTokenStore};

#[derive(Parser)]
#[command(name = "artzy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Your personal digital art gallery")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account
    Register {
        username: String,
        email: String,
        #[arg(short, long)]
        password: String,
        /// Defaults to --password
        #[arg(long)]
        confirm_password: Option<String>,
    },

    /// Log in and remember the session
    Login {
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show your profile
    Whoami,

    /// Send a password reset link
    ForgotPassword { email: String },

    /// List your artworks
    Artworks {
        /// Painting, Digital Art, Photography, Sketch, Abstract, Sculpture, Other
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show one artwork
    Show {
        id: String,
        /// Use the public view (no login needed)
        #[arg(long)]
        public: bool,
    },

    /// Upload a new artwork
    Add {
        /// Image file
        image: PathBuf,
        #[arg(long)]
        title: String,
        #[arg(long)]
        artist: String,
        /// YYYY-MM-DD
        #[arg(long)]
        year: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Edit one of your artworks
    Edit {
        id: String,
        #[arg(long)]
        image: Option<PathBuf>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        artist: Option<String>,
        #[arg(long)]
        year: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete one of your artworks
    Delete {
        id: String,
        /// Skip the confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Like or unlike an artwork
    Like { id: String },

    /// Browse someone's public profile
    User {
        username: String,
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Update your profile
    ProfileUpdate {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// New profile photo (max 10MB)
        #[arg(long, conflicts_with = "remove_photo")]
        photo: Option<PathBuf>,
        #[arg(long)]
        remove_photo: bool,
    },

    /// Print a default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

type Client = ArtzyClient<FileTokenStore>;

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("artzy={}", config.logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Refuse commands whose page a guest could not open
fn require(client: &Client, route: Route) -> anyhow::Result<()> {
    let session = client.session();
    match access::check(&route, session.as_ref()) {
        Access::Allow => Ok(()),
        Access::Redirect(Route::Login) => bail!("Please login first: artzy login <email> --password <password>"),
        Access::Redirect(Route::Beranda) => bail!("Already logged in. Run 'artzy logout' first"),
        Access::Redirect(other) => bail!("Not available here (would redirect to {})", other.path()),
    }
}

fn parse_category(value: Option<&str>) -> anyhow::Result<Category> {
    match value {
        None => Ok(Category::All),
        Some(label) => Category::from_label(label).with_context(|| {
            let choices: Vec<&str> = Category::ALL_CHOICES.iter().map(|c| c.label()).collect();
            format!("Unknown category '{}'. Choose one of: {}", label, choices.join(", "))
        }),
    }
}

fn read_image(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
    if !media::is_image_bytes(&bytes) {
        return Err(ArtzyError::from(FormError::NotAnImage).into());
    }
    Ok(media::encode_data_url(&bytes, None))
}

fn print_artworks(artworks: &[&Artwork], format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(artworks)?);
        return Ok(());
    }

    if artworks.is_empty() {
        println!("No artworks yet.");
        return Ok(());
    }

    println!("{:<12} {:<32} {:<24} {:<14} {:>6}", "ID", "TITLE", "ARTIST", "CATEGORY", "LIKES");
    for art in artworks {
        let heart = if art.is_liked { "♥" } else { " " };
        println!(
            "{:<12} {:<32} {:<24} {:<14} {:>5}{}",
            art.id.as_str(),
            art.title,
            art.artist,
            art.category.as_deref().unwrap_or("-"),
            art.like_count,
            heart
        );
    }
    Ok(())
}

fn print_artwork(art: &Artwork, owner: bool, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(art)?);
        return Ok(());
    }

    println!("{}", art.title);
    println!("  by {}", art.artist);
    println!("  Year created: {}", format::long_date_en_gb(art.year.as_deref()));
    println!("  Category:     {}", art.category.as_deref().unwrap_or("-"));
    println!("  Likes:        {}{}", art.like_count, if art.is_liked { " (liked)" } else { "" });
    println!("  Uploaded by:  {}", format::artist_label(art));
    println!();
    println!(
        "  {}",
        art.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or("No description provided.")
    );
    if owner {
        println!();
        println!("  You own this artwork: artzy edit {0} | artzy delete {0}", art.id);
    }
    Ok(())
}

/// Artwork count for `whoami`; a failed fetch shows as `-`, not zero
fn artwork_count(artworks: ArtzyResult<Vec<Artwork>>) -> String {
    match artworks {
        Ok(artworks) => artworks.len().to_string(),
        Err(e) => {
            tracing::warn!("Failed to count artworks: {}", e);
            "-".to_string()
        }
    }
}

async fn run(cli: Cli, client: Client) -> anyhow::Result<()> {
    let output = cli.format;

    match cli.command {
        Commands::Register {
            username,
            email,
            password,
            confirm_password,
        } => {
            let form = RegisterForm {
                username,
                email,
                confirm_password: confirm_password.unwrap_or_else(|| password.clone()),
                password,
            };
            let request = form.validate().map_err(ArtzyError::from)?;
            client.register(&request).await?;
            println!("{}", toast::REGISTER_SUCCESS);
        }

        Commands::Login { email, password } => {
            require(&client, Route::Login)?;
            let request = LoginForm { email, password }
                .validate()
                .map_err(ArtzyError::from)?;
            client.login(&request).await?;
            println!("{}", toast::LOGIN_SUCCESS);
        }

        Commands::Logout => {
            client.logout()?;
            println!("{}", toast::LOGOUT_SUCCESS);
        }

        Commands::Whoami => {
            require(&client, Route::Profile)?;
            let profile = client.me().await?;
            let count = artwork_count(client.my_artworks().await);

            if output == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                println!("{}", format::full_name(&profile));
                println!("  {}", format::display_handle(&profile));
                println!("  First name: {}", format::or_dash(profile.first_name.as_deref()));
                println!("  Last name:  {}", format::or_dash(profile.last_name.as_deref()));
                println!("  Email:      {}", format::or_dash(profile.email.as_deref()));
                println!("  Artworks:   {}", count);
                println!("  Joined:     {}", format::month_year_id(profile.join_date.as_deref()));
            }
        }

        Commands::ForgotPassword { email } => {
            let request = ForgotPasswordForm { email }
                .validate()
                .map_err(ArtzyError::from)?;
            client.forgot_password(&request).await?;
            println!("{}", toast::RESET_LINK_SENT);
        }

        Commands::Artworks { category } => {
            require(&client, Route::GalleryWalls)?;
            let mut board = ArtworkBoard::new(client.my_artworks().await?);
            board.select(parse_category(category.as_deref())?);
            print_artworks(&board.visible(), output)?;
        }

        Commands::Show { id, public } => {
            let id = ArtworkId::new(id);
            let art = if public {
                client.public_artwork(&id).await?
            } else {
                require(&client, Route::EditArtwork(id.clone()))?;
                client.artwork(&id).await?
            };
            let owner = access::is_owner(client.session().as_ref(), &art);
            print_artwork(&art, owner, output)?;
        }

        Commands::Add {
            image,
            title,
            artist,
            year,
            category,
            description,
        } => {
            require(&client, Route::AddArtwork)?;
            let form = ArtworkForm {
                image: read_image(&image)?,
                title,
                artist,
                year: year.unwrap_or_default(),
                category: category.unwrap_or_default(),
                description: description.unwrap_or_default(),
            };
            let payload = form.validate_new().map_err(ArtzyError::from)?;
            client.create_artwork(&payload).await?;
            println!("{}", toast::ARTWORK_SAVED);
        }

        Commands::Edit {
            id,
            image,
            title,
            artist,
            year,
            category,
            description,
        } => {
            let id = ArtworkId::new(id);
            require(&client, Route::EditArtwork(id.clone()))?;

            let current = client.artwork(&id).await?;
            let mut form = ArtworkForm::from_artwork(&current);
            if let Some(path) = image {
                form.image = read_image(&path)?;
            }
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(artist) = artist {
                form.artist = artist;
            }
            if let Some(year) = year {
                form.year = year;
            }
            if let Some(category) = category {
                form.category = category;
            }
            if let Some(description) = description {
                form.description = description;
            }

            let payload = form.validate_edit().map_err(ArtzyError::from)?;
            client.update_artwork(&id, &payload).await?;
            println!("{}", toast::ARTWORK_UPDATED);
        }

        Commands::Delete { id, yes } => {
            let id = ArtworkId::new(id);
            require(&client, Route::EditArtwork(id.clone()))?;

            let art = client.public_artwork(&id).await?;
            if !access::is_owner(client.session().as_ref(), &art) {
                bail!("You can only delete your own artworks");
            }
            if !yes {
                println!("Delete \"{}\"? This artwork will be permanently deleted.", art.title);
                println!("Run again with --yes to confirm.");
                return Ok(());
            }

            client.delete_artwork(&id).await?;
            println!("{}", toast::ARTWORK_DELETED);
        }

        Commands::Like { id } => {
            let session = client.session();
            if let Access::Redirect(_) = access::like_gate(session.as_ref()) {
                bail!(access::LIKE_LOGIN_MESSAGE);
            }

            let id = ArtworkId::new(id);
            let board = RefCell::new(ArtworkBoard::new(vec![client.public_artwork(&id).await?]));
            let liked = sync_like(&board, &client, &id).await?;

            let count = board.borrow().get(&id).map(|a| a.like_count).unwrap_or(0);
            println!("{} ({} likes)", if liked { "Liked" } else { "Unliked" }, count);
        }

        Commands::User { username, category } => {
            let artworks = match client.user_artworks(&username).await {
                Err(ArtzyError::UserNotFound(_)) => bail!("User not found"),
                other => other?,
            };

            let mut board = ArtworkBoard::new(artworks);
            board.select(parse_category(category.as_deref())?);

            if output == OutputFormat::Table {
                println!("@{}", username);
            }
            print_artworks(&board.visible(), output)?;
        }

        Commands::ProfileUpdate {
            first_name,
            last_name,
            username,
            email,
            photo,
            remove_photo,
        } => {
            require(&client, Route::EditProfile)?;
            let mut form = ProfileForm::from_profile(&client.me().await?);

            if let Some(v) = first_name {
                form.first_name = v;
            }
            if let Some(v) = last_name {
                form.last_name = v;
            }
            if let Some(v) = username {
                form.username = v;
            }
            if let Some(v) = email {
                form.email = v;
            }
            if let Some(path) = photo {
                let size = std::fs::metadata(&path)
                    .with_context(|| format!("Failed to read {:?}", path))?
                    .len();
                check_photo_size(size).map_err(ArtzyError::from)?;
                form.set_photo(read_image(&path)?);
            }
            if remove_photo {
                form.clear_photo();
                println!("{}", toast::PHOTO_REMOVED);
            }

            client.update_profile(&form.to_update()).await?;
            println!("{}", toast::PROFILE_UPDATED);
        }

        Commands::Config { output: path } => {
            let content = generate_default_config();
            match path {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load_default();
    init_logging(&config);

    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    let store = FileTokenStore::new(config.session.resolved_token_path());
    let client = ArtzyClient::new(
        &config.api.base_url,
        Duration::from_secs(config.api.request_timeout_secs),
        store,
    )?;

    tracing::debug!("Using backend {}", client.base_url());
    run(cli, client).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_count_failure_is_not_zero() {
        assert_eq!(artwork_count(Ok(Vec::new())), "0");
        assert_eq!(artwork_count(Err(ArtzyError::Network("down".to_string()))), "-");
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category(None).unwrap(), Category::All);
        assert_eq!(parse_category(Some("sketch")).unwrap(), Category::Sketch);
        let err = parse_category(Some("Pottery")).unwrap_err();
        assert!(err.to_string().contains("Unknown category 'Pottery'"));
    }
}
