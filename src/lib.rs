// Product dashboard - catalog aggregation, filtering and paging behind an HTTP surface
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
