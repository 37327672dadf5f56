pub mod flan_t5;

pub use flan_t5::{FlanT5Model, FlanT5Options, FlanT5Size};
