use std::net::TcpListener;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    configuration::Settings,
    routes::{default_route, submission_route},
    services::{DroidFetcher, OpenaiClient},
};

pub fn run(
    listener: TcpListener,
    settings: Settings,
    openai_client: OpenaiClient,
) -> Result<Server, std::io::Error> {
    let fetcher = web::Data::new(DroidFetcher::new(settings.scraper.clone()));
    let openai_client = web::Data::new(openai_client);
    let settings = web::Data::new(settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(default_route::default)
            .service(submission_route::submit_form)
            .app_data(settings.clone())
            .app_data(openai_client.clone())
            .app_data(fetcher.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
