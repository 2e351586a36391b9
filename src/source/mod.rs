pub mod fetcher;
pub mod traits;

pub use fetcher::DexScreenerSource;
pub use traits::DataSource;
