mod code;
mod script_lang;

pub use code::LanguageCode;
pub use script_lang::{normalize_script, script_for_language, scripts_for_language};
