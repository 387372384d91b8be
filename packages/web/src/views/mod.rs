mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod protected;
pub use protected::Protected;

mod dashboard;
pub use dashboard::Dashboard;

mod project_detail;
pub use project_detail::ProjectDetail;

mod not_found;
pub use not_found::NotFound;
