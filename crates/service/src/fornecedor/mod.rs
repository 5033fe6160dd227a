pub mod context;
pub mod service;

pub use context::{FornecedorContext, PendingChange};
pub use service::{
    create_fornecedor, delete_fornecedor, get_fornecedor, list_fornecedores, update_fornecedor,
};
