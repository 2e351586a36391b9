pub mod dexscreener_parser;

pub use dexscreener_parser::{DexScreenerParser, Parser};
