use axum::http::HeaderValue;
use std::env;
use std::path::PathBuf;

const DEFAULT_IMAGES_PATH: &str = "images/";
const DEFAULT_SERVER_PORT: u16 = 8000;
const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://localhost:3001,http://localhost:3002,http://localhost:3003";

pub struct EnvVariables {
    pub images_path: PathBuf,
    pub server_port: u16,
    pub cors_origins: Vec<HeaderValue>,
    pub apply_hemisphere_sign: bool,
}

impl EnvVariables {
    pub fn get_all() -> Self {
        let images_path = env::var("IMAGES_PATH").unwrap_or_else(|_| DEFAULT_IMAGES_PATH.into());

        let server_port = parse_port(env::var("SERVER_PORT").ok(), env::var("PORT").ok())
            .expect("SERVER_PORT (or PORT) must be a valid port number");

        let cors_origins = parse_origins(
            &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.into()),
        )
        .expect("CORS_ORIGINS must be a comma separated list of origins, without `*`");

        let apply_hemisphere_sign = env::var("APPLY_HEMISPHERE_SIGN").is_ok_and(|value| {
            parse_bool(&value).expect("APPLY_HEMISPHERE_SIGN must be either true or false")
        });

        Self {
            images_path: PathBuf::from(images_path),
            server_port,
            cors_origins,
            apply_hemisphere_sign,
        }
    }
}

/// `SERVER_PORT` wins over the shorter `PORT`
fn parse_port(server_port: Option<String>, port: Option<String>) -> Option<u16> {
    server_port
        .or(port)
        .map_or(Some(DEFAULT_SERVER_PORT), |port| port.trim().parse().ok())
}

/// A wildcard can't be combined with credentials, so `*` is rejected here
/// instead of panicking later inside the CORS layer.
fn parse_origins(value: &str) -> Option<Vec<HeaderValue>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| match origin {
            "*" => None,
            _ => HeaderValue::from_str(origin).ok(),
        })
        .collect()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
