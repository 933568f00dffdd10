pub mod auth_utils;
pub mod collection_utils;
pub mod locale_utils;
pub mod validation_utils;
pub mod session_utils;
