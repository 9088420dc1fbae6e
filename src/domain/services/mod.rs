mod banner_selector;

pub use banner_selector::{BannerSelector, ValidBanner};
