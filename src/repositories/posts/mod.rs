pub mod post_repo;

pub use post_repo::PostRepository;
