mod service;
mod show;

pub use service::ProfileQueryService;
pub use show::ShowProfileQuery;
