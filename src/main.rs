use clap::Parser;
use galerya::config::cli::{CliConfig, Command};
use galerya::config::toml_config::TomlConfig;
use galerya::core::forms::{status_label, SettingsForm, UploadForm};
use galerya::core::login::{submit_login, LoginForm};
use galerya::core::stats::{monthly_stats, totals, AdminStats};
use galerya::core::view::CollectionView;
use galerya::domain::login::LoginOutcome;
use galerya::utils::logger;
use galerya::{AppConfig, GaleryaError, HttpLoginGateway, Record, ShellOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 設定檔中的日誌格式要先讀出來才能初始化日誌
    let file_format = cli
        .config
        .as_deref()
        .and_then(|path| TomlConfig::from_file(path).ok())
        .and_then(|file| file.log_format().map(str::to_string));
    logger::init_logger(cli.log_format.as_deref().or(file_format.as_deref()), cli.verbose);

    tracing::info!("Starting galerya CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match AppConfig::load(cli.api_url.as_deref(), cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    match cli.command {
        Command::Login {
            email,
            password,
            role,
        } => {
            let gateway = HttpLoginGateway::new(config)?;
            let form = LoginForm::new(&email, &password, role);
            match submit_login(&gateway, &form).await {
                LoginOutcome::Redirect { route } => println!("✅ Signed in, continue to {}", route),
                LoginOutcome::Rejected { message } => {
                    eprintln!("❌ {}", message);
                    std::process::exit(2);
                }
            }
        }
        Command::Users {
            search,
            role,
            status,
            delete,
        } => {
            let mut view = CollectionView::seeded_user_admin();
            delete_if_requested(&mut view, delete.as_deref());
            view.set_search(&search);
            view.select("role", &role);
            view.select("status", &status);
            print_rows(&view.visible(), &["id", "name", "email", "role", "status"]);
        }
        Command::Artworks {
            search,
            status,
            delete,
        } => {
            let mut view = CollectionView::seeded_artwork_admin();
            delete_if_requested(&mut view, delete.as_deref());
            view.set_search(&search);
            view.select("status", &status);
            for record in view.visible() {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    field(record, "id"),
                    field(record, "title"),
                    field(record, "artist"),
                    field(record, "category"),
                    status_label(&field(record, "status")),
                );
            }
        }
        Command::Gallery { search, category } => {
            let mut view = CollectionView::seeded_gallery();
            view.set_search(&search);
            view.select("category", &category);
            print_rows(&view.visible(), &["id", "title", "category", "views", "likes"]);
        }
        Command::Stats => {
            let admin = AdminStats::default();
            println!("📊 Total artworks:    {}", admin.total_artworks);
            println!("📊 Pending approvals: {}", admin.pending_approvals);
            println!("📊 Total artists:     {}", admin.total_artists);
            println!("📊 Total views:       {}", admin.total_views);

            let monthly = monthly_stats();
            for stat in &monthly {
                println!("{}\t{} views\t{} likes", stat.month, stat.views, stat.likes);
            }
            let sum = totals(&monthly);
            println!("Total\t{} views\t{} likes", sum.views, sum.likes);
        }
        Command::Upload {
            title,
            description,
            category,
            tags,
            tag_list,
        } => {
            let mut form = UploadForm::new();
            form.title = title;
            form.description = description;
            form.category = category;
            for tag in &tags {
                form.tags.set_draft(tag);
                form.tags.confirm_draft();
            }
            if let Some(list) = tag_list.as_deref() {
                form.tags.extend_from_delimited(list);
            }

            match form.submit() {
                Ok(submission) => println!("{}", serde_json::to_string_pretty(&submission)?),
                Err(e) => {
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(1);
                }
            }
        }
        Command::Settings {
            file,
            email,
            website,
        } => {
            let mut form = match file.as_deref().map(load_settings).transpose() {
                Ok(form) => form.unwrap_or_default(),
                Err(e) => {
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(1);
                }
            };
            if let Some(email) = email {
                form.email = email;
            }
            if let Some(website) = website {
                form.website = website;
            }

            match form.submit() {
                Ok(saved) => println!("{}", serde_json::to_string_pretty(&saved)?),
                Err(e) => {
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn delete_if_requested(view: &mut CollectionView, raw_id: Option<&str>) {
    let Some(raw_id) = raw_id else {
        return;
    };

    match view.resolve_id(raw_id) {
        Some(id) if view.open_delete(&id) => {
            if let ShellOutcome::Deleted(id) = view.commit_delete() {
                println!("🗑️ Deleted {} record {}", view.name(), id);
            }
        }
        _ => {
            let err = GaleryaError::ValidationError {
                message: format!("No {} record with id '{}'", view.name(), raw_id),
            };
            eprintln!("⚠️ {}", err.user_friendly_message());
        }
    }
}

fn load_settings(path: &std::path::Path) -> Result<SettingsForm, GaleryaError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn print_rows(records: &[&Record], columns: &[&str]) {
    if records.is_empty() {
        println!("(no matching records)");
        return;
    }
    for record in records {
        let row: Vec<String> = columns.iter().map(|c| field(record, c)).collect();
        println!("{}", row.join("\t"));
    }
}

fn field(record: &Record, name: &str) -> String {
    match record.get(name) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
