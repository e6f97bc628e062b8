pub mod bundler;
pub mod pages;
