mod catalog;
mod config;
mod error;
mod render;
mod routes;
mod util;

use catalog::Catalog;
use config::Config;

const SAMPLE_SIZE: u32 = 137;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_args(pico_args::Arguments::from_env()) {
        Ok(Some(config)) => config,
        Ok(None) => {
            print!("{}", config::HELP);
            return;
        }
        Err(err) => {
            log::error!("{}", err);
            eprint!("{}", config::HELP);
            std::process::exit(2);
        }
    };

    let catalog = match &config.catalog {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => catalog,
            Err(err) => {
                log::error!("{}", err);
                std::process::exit(2);
            }
        },
        None => Catalog::sample(SAMPLE_SIZE),
    };

    if catalog.is_empty() {
        log::warn!("catalog is empty, every listing will be a single empty page");
    }
    log::info!(
        "serving {} items, {} per page, on {}",
        catalog.len(),
        config.per_page,
        config.bind
    );

    let state = routes::State {
        catalog,
        per_page: config.per_page,
    };

    rouille::start_server(config.bind, move |request| routes::handle(&state, request));
}
