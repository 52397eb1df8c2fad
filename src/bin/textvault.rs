//! Textvault CLI — user and text management with on-demand analysis.
//!
//! Usage:
//!   textvault user <subcommand> [--db path]
//!   textvault text <subcommand> [--db path]

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use textvault::{
    DocumentId, MemoryCache, NewUser, OpenStore, ResultCache, SqliteStore, TextService, UserId,
    UserService,
};

#[derive(Parser)]
#[command(
    name = "textvault",
    version,
    about = "Multi-user text storage with on-demand analysis"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
        /// Path to SQLite database file
        #[arg(long, global = true)]
        db: Option<PathBuf>,
    },
    /// Manage and analyze texts
    Text {
        #[command(subcommand)]
        action: TextAction,
        /// Path to SQLite database file
        #[arg(long, global = true)]
        db: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Register a new user
    Create {
        /// Display name
        name: String,
        /// Unique login name
        username: String,
        /// Unique email address
        email: String,
    },
    /// Show a user by id
    Show {
        /// User id
        id: String,
    },
    /// Delete a user and all their texts
    Delete {
        /// User id
        id: String,
    },
}

#[derive(Subcommand)]
enum TextAction {
    /// Store a new text for a user
    Add {
        /// Owning user id
        #[arg(long)]
        user: String,
        /// Text content (reads stdin when omitted)
        content: Option<String>,
    },
    /// Print a text's content
    Show {
        /// Text id
        id: String,
        /// Owning user id
        #[arg(long)]
        user: String,
    },
    /// Replace a text's content
    Update {
        /// Text id
        id: String,
        /// Owning user id
        #[arg(long)]
        user: String,
        /// New content
        content: String,
    },
    /// Delete a text
    Delete {
        /// Text id
        id: String,
        /// Owning user id
        #[arg(long)]
        user: String,
    },
    /// List a user's texts
    List {
        /// Owning user id
        #[arg(long)]
        user: String,
    },
    /// Analyze a text
    Analyze {
        /// Text id
        id: String,
        /// Owning user id
        #[arg(long)]
        user: String,
        /// Which metric to compute
        #[arg(value_enum, default_value = "report")]
        metric: Metric,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Metric {
    Words,
    Chars,
    Sentences,
    Paragraphs,
    Longest,
    Report,
}

/// Get the default database path (~/.local/share/textvault/textvault.db)
fn default_db_path() -> PathBuf {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".local/share"));
    let vault_dir = data_dir.join("textvault");
    std::fs::create_dir_all(&vault_dir).ok();
    vault_dir.join("textvault.db")
}

fn open_services(db: Option<PathBuf>) -> Result<(UserService, TextService), String> {
    let db_path = db.unwrap_or_else(default_db_path);
    let store = SqliteStore::open(&db_path)
        .map_err(|e| format!("Failed to open database: {}", e))?;
    let store: Arc<dyn textvault::DocumentStore> = Arc::new(store);
    let cache = ResultCache::new(Arc::new(MemoryCache::new()));
    Ok((
        UserService::new(store.clone()),
        TextService::new(store, cache),
    ))
}

fn parse_user_id(raw: &str) -> Result<UserId, String> {
    UserId::parse(raw).map_err(|_| format!("invalid user id '{}'", raw))
}

fn parse_text_id(raw: &str) -> Result<DocumentId, String> {
    DocumentId::parse(raw).map_err(|_| format!("invalid text id '{}'", raw))
}

async fn cmd_user(users: &UserService, action: UserAction) -> i32 {
    match action {
        UserAction::Create { name, username, email } => {
            match users.register(NewUser { name, username, email }).await {
                Ok(user) => {
                    println!("Created user '{}' ({})", user.username, user.id);
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        UserAction::Show { id } => {
            let id = match parse_user_id(&id) {
                Ok(id) => id,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return 1;
                }
            };
            match users.get(&id).await {
                Ok(user) => {
                    println!("{:<12} {}", "id:", user.id);
                    println!("{:<12} {}", "name:", user.name);
                    println!("{:<12} {}", "username:", user.username);
                    println!("{:<12} {}", "email:", user.email);
                    println!("{:<12} {}", "created:", user.created_at);
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        UserAction::Delete { id } => {
            let id = match parse_user_id(&id) {
                Ok(id) => id,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return 1;
                }
            };
            match users.delete(&id).await {
                Ok(()) => {
                    println!("Deleted user {}", id);
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
    }
}

async fn cmd_text(texts: &TextService, action: TextAction) -> i32 {
    match action {
        TextAction::Add { user, content } => {
            let owner = match parse_user_id(&user) {
                Ok(id) => id,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return 1;
                }
            };
            let content = match content {
                Some(content) => content,
                None => {
                    let mut buf = String::new();
                    if let Err(e) = std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf) {
                        eprintln!("Error: cannot read stdin: {}", e);
                        return 1;
                    }
                    buf
                }
            };
            match texts.create(&owner, &content).await {
                Ok(doc) => {
                    println!("Created text {}", doc.id);
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        TextAction::Show { id, user } => {
            match resolve(&id, &user) {
                Ok((id, owner)) => match texts.get(&id, &owner).await {
                    Ok(doc) => {
                        println!("{}", doc.content);
                        0
                    }
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        1
                    }
                },
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        TextAction::Update { id, user, content } => {
            match resolve(&id, &user) {
                Ok((id, owner)) => match texts.update(&id, &owner, &content).await {
                    Ok(()) => {
                        println!("Updated text {}", id);
                        0
                    }
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        1
                    }
                },
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        TextAction::Delete { id, user } => {
            match resolve(&id, &user) {
                Ok((id, owner)) => match texts.delete(&id, &owner).await {
                    Ok(()) => {
                        println!("Deleted text {}", id);
                        0
                    }
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        1
                    }
                },
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        TextAction::List { user } => {
            let owner = match parse_user_id(&user) {
                Ok(id) => id,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return 1;
                }
            };
            match texts.list(&owner).await {
                Ok(docs) => {
                    if docs.is_empty() {
                        println!("No texts stored.");
                        return 0;
                    }
                    println!("{:<36}  {:<20}  {:>6}", "ID", "CREATED", "CHARS");
                    println!("{}", "-".repeat(66));
                    for doc in docs {
                        println!(
                            "{:<36}  {:<20}  {:>6}",
                            doc.id,
                            doc.created_at.format("%Y-%m-%d %H:%M:%S"),
                            doc.content.chars().count()
                        );
                    }
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        TextAction::Analyze { id, user, metric } => {
            match resolve(&id, &user) {
                Ok((id, owner)) => cmd_analyze(texts, &id, &owner, metric).await,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
    }
}

fn resolve(id: &str, user: &str) -> Result<(DocumentId, UserId), String> {
    Ok((parse_text_id(id)?, parse_user_id(user)?))
}

async fn cmd_analyze(texts: &TextService, id: &DocumentId, owner: &UserId, metric: Metric) -> i32 {
    fn render_json<T: serde::Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_default()
    }

    let outcome = match metric {
        Metric::Words => texts.word_count(id, owner).await.map(|n| n.to_string()),
        Metric::Chars => texts.character_count(id, owner).await.map(|n| n.to_string()),
        Metric::Sentences => texts.sentence_count(id, owner).await.map(|n| n.to_string()),
        Metric::Paragraphs => texts.paragraph_count(id, owner).await.map(|n| n.to_string()),
        Metric::Longest => texts.longest_words(id, owner).await.map(|w| render_json(&w)),
        Metric::Report => texts.full_report(id, owner).await.map(|r| render_json(&r)),
    };
    match outcome {
        Ok(rendered) => {
            println!("{}", rendered);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::User { action, db } => match open_services(db) {
            Ok((users, _)) => cmd_user(&users, action).await,
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
        Commands::Text { action, db } => match open_services(db) {
            Ok((_, texts)) => cmd_text(&texts, action).await,
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
    };
    std::process::exit(code);
}
