pub mod shared_router_service;

pub use shared_router_service::SharedRouterService;
