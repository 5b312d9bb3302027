pub mod note;

pub use note::{ALPHABET, DEFAULT_CODE_LENGTH, Note, is_valid_code, random_code, unix_now};
