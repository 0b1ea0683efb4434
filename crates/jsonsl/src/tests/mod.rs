mod parse_good;
pub(crate) mod utils;
