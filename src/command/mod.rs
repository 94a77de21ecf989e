mod ping;
mod validate;
mod value_type;

pub use ping::ping;
pub use validate::validate;
pub use value_type::value_type;
