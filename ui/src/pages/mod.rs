pub mod bill;
pub mod dashboard;
pub mod not_found;
pub mod profile;
pub mod usage;
pub mod vas;

pub use bill::BillPage;
pub use dashboard::DashboardPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use usage::UsagePage;
pub use vas::VasPage;
