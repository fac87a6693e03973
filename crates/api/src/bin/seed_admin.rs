//! Create or refresh the back-office admin account.
//!
//! Reads `ADMIN_EMAIL`, `ADMIN_PASSWORD` and `ADMIN_NAME` (default `Admin`).
//! An existing user with that email keeps its id and gets the new name and
//! password hash.

use divesite_api::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use divesite_core::roles::ROLE_ADMIN;
use divesite_db::models::user::CreateUser;
use divesite_db::repositories::UserRepo;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed_admin=info".into()),
        )
        .init();

    let email = std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set");
    let password = std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set");
    let name = std::env::var("ADMIN_NAME").unwrap_or_else(|_| "Admin".into());
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://divesite.db".into());

    if let Err(msg) = validate_password_strength(&password, MIN_PASSWORD_LENGTH) {
        tracing::error!(error = %msg, "Refusing to seed admin");
        std::process::exit(1);
    }

    let pool = divesite_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    divesite_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let password_hash = hash_password(&password).expect("Failed to hash password");

    let existing = UserRepo::find_by_email(&pool, &email)
        .await
        .expect("Failed to look up admin user");

    match existing {
        Some(user) => {
            UserRepo::update_credentials(&pool, &user.id, &name, &password_hash)
                .await
                .expect("Failed to update admin user");
            tracing::info!(user_id = %user.id, email = %email, "Admin user updated");
        }
        None => {
            let user = UserRepo::create(
                &pool,
                &CreateUser {
                    email: email.clone(),
                    name,
                    password_hash,
                    role: ROLE_ADMIN.to_string(),
                },
            )
            .await
            .expect("Failed to create admin user");
            tracing::info!(user_id = %user.id, email = %email, "Admin user created");
        }
    }

    pool.close().await;
}
