// Leptos web application server
//
// This binary starts the admin server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - PostgreSQL connection pool
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use leptos_meta::MetaTags;
    use shop_admin::web_app::api::{db, queries};
    use shop_admin::web_app::app::App as WebApp;
    use std::io;
    use tracing_subscriber::EnvFilter;

    // Initialize logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Loads .env as well
    let config = db::DbConfig::from_env();

    let pool = db::create_pool(&config)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    tracing::info!(
        "Connected to database (max {} connections)",
        config.max_connections
    );

    // Initialize global pool for server functions
    db::init_db(pool.clone());

    queries::create_schema(&pool)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    // Seed database if empty
    if let Err(e) = seed_database(&pool).await {
        tracing::error!("Failed to seed database: {}", e);
    }

    // Leptos configuration
    let conf = leptos_config::get_configuration(None)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();
        let pool_data = web::Data::new(pool.clone());

        App::new()
            // Share database pool across all handlers
            .app_data(pool_data.clone())
            // Also share raw pool for direct access if needed
            .app_data(pool.clone())
            // Explicitly handle server functions
            .route("/api/{tail:.*}", handle_server_fns())
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR with proper shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || {
                    view! {
                        <!DOCTYPE html>
                        <html lang="en">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <MetaTags/>
                            </head>
                            <body>
                                <WebApp/>
                            </body>
                        </html>
                    }
                }
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await
}

/// Import the catalog seed file when the product table is empty
#[cfg(feature = "ssr")]
async fn seed_database(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    use anyhow::Context;
    use shop_admin::web_app::api::queries;
    use shop_admin::web_app::model::CatalogImport;
    use std::fs::File;
    use std::io::BufReader;

    let count = queries::count_products(pool).await?;
    if count > 0 {
        tracing::info!("Database already contains {} products, skipping seed.", count);
        return Ok(());
    }

    let path = std::env::var("SEED_FILE").unwrap_or_else(|_| "data/catalog.json".to_string());
    tracing::info!("Seeding database from {}...", path);

    let file = File::open(&path).with_context(|| format!("opening seed file {}", path))?;
    let catalog: CatalogImport = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing seed file {}", path))?;

    let status = queries::import_catalog(pool, &catalog).await?;
    for error in &status.errors {
        tracing::warn!("Seed entry failed: {}", error);
    }

    tracing::info!(
        "Database seeded: {} of {} entries imported.",
        status.succeeded,
        status.total
    );
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
