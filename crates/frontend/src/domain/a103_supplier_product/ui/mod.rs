pub mod list;

pub use list::SupplierProductList;
