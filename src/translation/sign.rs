//! Request signing for the Baidu Fanyi API.

/// Computes the request signature: lowercase hex MD5 of
/// `app_id + text + salt + secret`.
pub fn sign(app_id: &str, text: &str, salt: &str, secret: &str) -> String {
    let data = format!("{app_id}{text}{salt}{secret}");
    format!("{:x}", md5::compute(data))
}
