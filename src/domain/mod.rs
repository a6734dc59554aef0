// Domain layer - Pure data and computation, no I/O
pub mod aggregation;
pub mod dashboard;
pub mod filter;
pub mod pagination;
pub mod product;
pub mod session;
