pub mod system_clock;
pub mod tab_book;

pub use system_clock::SystemClock;
pub use tab_book::TabBook;
