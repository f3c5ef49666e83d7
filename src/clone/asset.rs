use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Wraps raw emoji image bytes as the inline data URI the create-emoji
/// endpoint expects.
pub fn to_data_uri(bytes: &[u8], animated: bool) -> String {
    let format = if animated { "gif" } else { "png" };
    format!("data:image/{format};base64,{}", STANDARD.encode(bytes))
}
