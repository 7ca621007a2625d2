pub(crate) mod dictionary;
pub(crate) mod display;

pub use self::dictionary::RopeMap;
pub use self::display::TreeDisplay;
