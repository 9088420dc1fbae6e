mod banner;
mod banner_repository;

pub use banner::Banner;
pub use banner_repository::BannerRepository;
