use std::sync::Arc;

use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};
use rocket::State;
use rocket_okapi::request::OpenApiFromRequest;

use crate::models::auth::AuthUser;
use crate::services::jwt::JwtService;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthUser {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<AuthUser, ()> {
        let jwt_service = request
            .guard::<&State<Arc<JwtService>>>()
            .await
            .expect("jwt service");

        let Some(header) = request.headers().get_one("Authorization") else {
            return Outcome::Error((Status::Unauthorized, ()));
        };
        let Some(token) = header.strip_prefix("Bearer ") else {
            return Outcome::Error((Status::Unauthorized, ()));
        };

        match jwt_service.verify(token) {
            Ok(user) => Outcome::Success(user),
            Err(err) => {
                log::error!("failed to verify access token: {err}");
                Outcome::Error((Status::Unauthorized, ()))
            }
        }
    }
}

impl OpenApiFromRequest<'_> for AuthUser {
    fn from_request_input(
        _gen: &mut rocket_okapi::gen::OpenApiGenerator,
        _name: String,
        _required: bool,
    ) -> rocket_okapi::Result<rocket_okapi::request::RequestHeaderInput> {
        rocket_okapi::Result::Ok(rocket_okapi::request::RequestHeaderInput::None)
    }

    fn get_responses(
        _gen: &mut rocket_okapi::gen::OpenApiGenerator,
    ) -> rocket_okapi::Result<rocket_okapi::okapi::openapi3::Responses> {
        Ok(rocket_okapi::okapi::openapi3::Responses::default())
    }
}
