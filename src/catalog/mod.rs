mod filter;
mod index;
mod validate;

pub use self::filter::filter_recipes;
pub(crate) use self::filter::matching_indices;
pub use self::index::build_index;
pub use self::validate::validate;
