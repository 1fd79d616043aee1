mod parse_url;

pub use parse_url::parse_url;
