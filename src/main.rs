use astra::{Request, Server};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use yuhplace::config::AppConfig;
use yuhplace::db::connection::{init_db, Database};
use yuhplace::db::seed_demo_data;
use yuhplace::router::{handle, App};
use yuhplace::templates;

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("yuhplace=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 1️⃣ Load configuration (.env + YUHPLACE_* overrides)
    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Create the database handle and apply the schema
    let db = Database::new(config.db_path.clone());
    if let Err(e) = init_db(&db, &config.schema_path) {
        error!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    if config.seed_demo {
        if let Err(e) = seed_demo_data(&db) {
            error!("Seeding demo data failed: {e}");
            std::process::exit(1);
        }
    }

    // 3️⃣ Start the server
    let addr = config.bind_addr;
    info!(%addr, workers = config.max_workers, page_size = config.page_size, "starting server");

    let server = Server::bind(&addr).max_workers(config.max_workers);
    let app = App::new(db, config);

    // 4️⃣ Serve requests, passing the app handle into the closure
    let result = server.serve(move |req: Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                warn!(%method, %path, "{err}");
                templates::html_error_response(err)
            }
        };

        info!(%method, %path, status = resp.status().as_u16(), "request");
        resp
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
