//! Embedded fallback word list
//!
//! Compiled into the binary at build time from `data/fallback_words.txt`.

include!(concat!(env!("OUT_DIR"), "/fallback.rs"));
