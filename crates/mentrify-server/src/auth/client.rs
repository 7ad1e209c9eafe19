use axum_extra::extract::cookie::{Cookie, SameSite};

pub const CLIENT_COOKIE: &str = "mentrify_client";

const CLIENT_COOKIE_DAYS: i64 = 365;

/// Opaque identifier for one browser profile. Not a credential.
pub fn generate_client_id() -> String {
    use base64::Engine;
    let mut bytes = [0u8; 32];
    use rand::RngCore;
    rand::thread_rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Accept only ids that look like ones we issued.
pub fn is_well_formed(client_id: &str) -> bool {
    client_id.len() == 43
        && client_id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

pub fn build_client_cookie(client_id: String, secure: bool) -> Cookie<'static> {
    Cookie::build((CLIENT_COOKIE, client_id))
        .path("/")
        .max_age(time::Duration::days(CLIENT_COOKIE_DAYS))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build()
}
