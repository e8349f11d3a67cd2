pub mod use_api_data;
pub mod use_bill_status;
pub mod use_extra_gb;
pub mod use_health_check;
pub mod use_profile;
pub mod use_system_theme;
pub mod use_usage_summary;
pub mod use_vas_bundles;

pub use use_api_data::{FetchHookReturn, use_api_data};
pub use use_bill_status::use_bill_status;
pub use use_extra_gb::use_extra_gb;
pub use use_health_check::use_health_check;
pub use use_profile::use_profile;
pub use use_system_theme::use_system_theme;
pub use use_usage_summary::use_usage_summary;
pub use use_vas_bundles::use_vas_bundles;
