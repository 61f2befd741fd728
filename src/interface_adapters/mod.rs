// Interface adapters: HTTP surface, storage adapter and outbound clients.

pub mod clients;
pub mod handlers;
pub mod middleware;
pub mod protocol;
pub mod routes;
pub mod share_page;
pub mod state;
