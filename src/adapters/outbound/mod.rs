mod in_memory_banner_repo;

pub use in_memory_banner_repo::InMemoryBannerRepository;
