use std::sync::Arc;

use rocket::{catchers, http::Method, Build, Rocket};
use rocket_cors::{AllowedOrigins, CorsOptions};
use rocket_okapi::{openapi_get_routes, rapidoc::*, settings::UrlObject, swagger_ui::*};

use crate::controllers::{auth, catchers as registry_catchers, chain, records, rpc_url, status};
use crate::repo::config::ConfigRepo;
use crate::services::jwt::JwtService;
use crate::services::registry::RegistryService;

pub fn setup_app(
    registry_service: Arc<RegistryService>,
    jwt_service: Arc<JwtService>,
    config_repo: ConfigRepo,
) -> Rocket<Build> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Put, Method::Delete]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allow_credentials(true);

    let figment = rocket::Config::figment()
        .merge(("port", config_repo.port))
        .merge(("address", "0.0.0.0"));

    rocket::custom(figment)
        .manage(registry_service)
        .manage(jwt_service)
        .manage(config_repo)
        .mount(
            "/",
            openapi_get_routes![
                status::get_health,
                auth::post_token,
                records::post_create,
                records::get_all,
                chain::get_chain_by_name,
                chain::get_chain_by_url,
                chain::get_chain_info,
                chain::delete_chain,
                rpc_url::get_urls,
                rpc_url::put_update_url,
                rpc_url::delete_url,
                rpc_url::delete_urls_by_chain,
            ],
        )
        .register(
            "/",
            catchers![
                registry_catchers::unauthorized,
                registry_catchers::not_found,
                registry_catchers::unprocessable_entity,
                registry_catchers::internal_error,
            ],
        )
        .mount(
            "/swagger-ui/",
            make_swagger_ui(
                &(SwaggerUIConfig {
                    url: "/openapi.json".to_owned(),
                    ..Default::default()
                }),
            ),
        )
        .mount(
            "/rapidoc/",
            make_rapidoc(
                &(RapiDocConfig {
                    general: GeneralConfig {
                        spec_urls: vec![UrlObject::new("General", "/openapi.json")],
                        ..Default::default()
                    },
                    hide_show: HideShowConfig {
                        allow_spec_url_load: false,
                        allow_spec_file_load: false,
                        ..Default::default()
                    },
                    ..Default::default()
                }),
            ),
        )
        .attach(cors.to_cors().unwrap())
}
