//! Dynasty Premium - Admin Console
//!
//! Interactive terminal dashboard for the Dynasty Premium backend: product
//! catalog, category, membership tier, and user/permission administration.
//!
//! Run: cargo run -p dynasty-console

mod editor;
mod input;
mod pages;
mod session;
mod sidebar;
mod stores;

use anyhow::{Context, Result};
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use dynasty_client::{
    AuthService, CategoryService, ClientConfig, MembershipService, ProductService, UserService,
};

use input::{get_input, get_input_with_default};
use session::Session;
use stores::{CategoryStore, MembershipStore, ProductStore, UserStore};

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
        )
    }
}

fn init_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = std::path::Path::new("logs");
    std::fs::create_dir_all(log_dir).context("Failed to create logs directory")?;

    let file_appender = rolling::daily(log_dir, "dynasty-console.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = if let Ok(from_env) = EnvFilter::try_from_default_env() {
        from_env
    } else if cfg!(debug_assertions) {
        EnvFilter::new("info,dynasty_client=debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to the rolling file; the terminal stays clean for the UI.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_timer(LocalTimer)
                .with_ansi(false)
                .with_writer(non_blocking_file),
        )
        .init();

    Ok(guard)
}

async fn login(config: &ClientConfig) -> Result<Session> {
    let auth = AuthService::new(config.build_http_client());
    loop {
        let email = get_input("Email: ");
        let password = get_input("Password: ");
        match auth.login(&email, &password).await {
            Ok(response) => {
                let session = Session::hydrate(response);
                tracing::info!(user = %session.user.email, role = %session.role, "login successful");
                println!("✅ Welcome back, {}!", session.user.name);
                return Ok(session);
            }
            Err(err) => {
                pages::toast_error(&err);
                println!("Try again, or press Ctrl+C to quit.\n");
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let _guard = init_logging()?;

    println!("\n👑 Dynasty Premium Admin Console");
    println!("=================================\n");

    let mut config = ClientConfig::from_env();
    config.base_url = get_input_with_default("Backend URL", &config.base_url);

    let session = login(&config).await?;

    // Authenticated client shared by every service.
    let http = config.build_http_client().with_token(session.token.clone());
    let mut products = ProductStore::new(ProductService::new(http.clone(), config.asset_base()));
    let mut categories = CategoryStore::new(CategoryService::new(http.clone()));
    let mut memberships = MembershipStore::new(MembershipService::new(http.clone()));
    let mut users = UserStore::new(UserService::new(http.clone()));

    // Immutable menu definition, built once; visibility is recomputed from
    // the session on every render.
    let menu = sidebar::build_menu();

    loop {
        let items = sidebar::render(&menu, &session);
        let choice = get_input("\nEnter choice: ");
        if choice == "0" {
            println!("\n👋 Goodbye!");
            break;
        }
        let selected = choice
            .parse::<usize>()
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| items.get(i).cloned());
        let Some(item) = selected else {
            println!("❌ Invalid choice");
            continue;
        };

        match item.page.as_str() {
            "dashboard" => pages::dashboard(&session),
            "products" => pages::products::run(&mut products, &mut categories).await,
            "category-management" => pages::categories::run(&mut categories).await,
            "membership" => pages::memberships::run(&mut memberships).await,
            "user-management" => pages::users::run(&mut users).await,
            "profile" => pages::profile(&session),
            _ => pages::placeholder(&item.label),
        }
    }

    Ok(())
}
