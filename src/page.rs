//! The single HTML page served at `GET /`.

/// Date-of-birth form with a small script that posts to `/calculate`.
pub const INDEX_HTML: &str = include_str!("../static/index.html");
