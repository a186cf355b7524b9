pub mod text_utils;

pub use text_utils::{
    extract_word_at_cursor, find_word_boundaries, is_word_character, line_at, trailing_word,
};
