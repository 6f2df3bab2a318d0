use dotenvy::dotenv;
use lazy_static::lazy_static;
use secrecy::Secret;
use std::env as std_env;

lazy_static! {
    pub static ref NOCODB_API_TOKEN: Option<Secret<String>> = load_token();
    pub static ref NOCODB_BASE_URL: String = load_or_default(
        env::NOCODB_BASE_URL_ENV_VAR,
        DEFAULT_NOCODB_BASE_URL
    );
    pub static ref NOCODB_MEMBERS_TABLE_ID: Option<String> =
        load_optional(env::NOCODB_MEMBERS_TABLE_ID_ENV_VAR);
    pub static ref NOCODB_PARTNERS_TABLE_ID: Option<String> =
        load_optional(env::NOCODB_PARTNERS_TABLE_ID_ENV_VAR);
}

fn load_env() {
    dotenv().ok();
}

// The token is optional on purpose: without one the service serves the
// static mock collections instead of calling out.
fn load_token() -> Option<Secret<String>> {
    load_optional(env::NOCODB_API_TOKEN_ENV_VAR).map(Secret::new)
}

fn load_optional(variable_name: &str) -> Option<String> {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => {
            if value.is_empty() {
                String::from(default_value)
            } else {
                value
            }
        }
        Err(_) => String::from(default_value),
    }
}

pub mod env {
    pub const NOCODB_API_TOKEN_ENV_VAR: &str = "NOCODB_API_TOKEN";
    pub const NOCODB_BASE_URL_ENV_VAR: &str = "NOCODB_BASE_URL";
    pub const NOCODB_MEMBERS_TABLE_ID_ENV_VAR: &str =
        "NOCODB_MEMBERS_TABLE_ID";
    pub const NOCODB_PARTNERS_TABLE_ID_ENV_VAR: &str =
        "NOCODB_PARTNERS_TABLE_ID";
}

pub const DEFAULT_NOCODB_BASE_URL: &str = "https://ndb.startmunich.de";

pub const MEMBERS_PAGE_SIZE: usize = 12;

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
