pub mod books;
pub mod sellers;
