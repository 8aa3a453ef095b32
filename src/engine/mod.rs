use super::Result;

mod store;
pub use store::MemStore;

pub trait Engine {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, val: &str) -> Result<()>;

    fn del(&mut self, key: &str) -> Result<bool>;
}
