pub mod helpers;
pub mod test_app;

#[allow(unused_imports)]
pub use helpers::{generate_test_email, seed_book, seed_seller};
#[allow(unused_imports)]
pub use test_app::TestApp;
