pub mod bill_card;
pub mod dark_mode_toggle;
pub mod fetch_error;
pub mod layout;
pub mod profile_card;
pub mod progress_bar;
pub mod usage_card;
pub mod vas_bundle_card;

pub use bill_card::BillCard;
pub use dark_mode_toggle::DarkModeToggle;
pub use fetch_error::FetchErrorAlert;
pub use profile_card::ProfileCard;
pub use progress_bar::ProgressBar;
pub use usage_card::UsageCard;
pub use vas_bundle_card::VasBundleCard;
