pub mod detail_use_case;
pub mod fetch;
pub mod list_use_case;
pub mod ports;

pub use detail_use_case::{DetailPage, DetailUseCase};
pub use list_use_case::{ListPage, ListUseCase};
pub use ports::PokeApiPort;
