pub mod decode;
pub mod script;
